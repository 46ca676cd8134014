// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Credentials loaded from environment variables.
//!
//! For the `default` section the variables are `AKAMAI_HOST`,
//! `AKAMAI_CLIENT_TOKEN`, `AKAMAI_CLIENT_SECRET`, `AKAMAI_ACCESS_TOKEN`, and
//! optionally `AKAMAI_MAX_BODY`. Other sections insert the upper case section
//! name after the prefix, e.g. `AKAMAI_PAPI_HOST`.

use super::DEFAULT_SECTION;
use super::Credentials;
use super::edgegrid;
use crate::BuildResult;
use crate::build_errors::Error as BuildError;

/// A builder for credentials stored in environment variables.
#[derive(Debug)]
pub struct Builder {
    section: String,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            section: DEFAULT_SECTION.to_string(),
        }
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the variable prefix, see the module documentation.
    pub fn with_section<V: Into<String>>(mut self, v: V) -> Self {
        self.section = v.into();
        self
    }

    /// Returns true if the host variable for this section is set.
    pub fn is_configured(&self) -> bool {
        std::env::var_os(self.var("HOST")).is_some()
    }

    /// Returns a [Credentials] instance from the environment.
    ///
    /// # Errors
    ///
    /// - [is_parsing()][BuildError::is_parsing] if the max body variable is
    ///   not a number.
    /// - [is_missing_field()][BuildError::is_missing_field] if any of the
    ///   required variables is missing.
    pub fn build(self) -> BuildResult<Credentials> {
        let lookup = |name: &str| std::env::var(self.var(name)).ok();
        let mut builder = edgegrid::Builder::new();
        if let Some(v) = lookup("HOST") {
            builder = builder.with_host(v);
        }
        if let Some(v) = lookup("CLIENT_TOKEN") {
            builder = builder.with_client_token(v);
        }
        if let Some(v) = lookup("CLIENT_SECRET") {
            builder = builder.with_client_secret(v);
        }
        if let Some(v) = lookup("ACCESS_TOKEN") {
            builder = builder.with_access_token(v);
        }
        if let Some(v) = lookup("MAX_BODY") {
            let max_body = v.parse::<usize>().map_err(|e| {
                BuildError::parsing(format!("invalid {} {v:?}: {e}", self.var("MAX_BODY")))
            })?;
            builder = builder.with_max_body(max_body);
        }
        builder.build()
    }

    fn var(&self, name: &str) -> String {
        if self.section == DEFAULT_SECTION {
            format!("AKAMAI_{name}")
        } else {
            format!("AKAMAI_{}_{name}", self.section.to_uppercase())
        }
    }
}
