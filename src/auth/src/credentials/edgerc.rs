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

//! Credentials loaded from an `.edgerc` file.
//!
//! The `.edgerc` file is an INI file, each section holds one set of EdgeGrid
//! credentials:
//!
//! ```ini
//! [default]
//! host = akab-xxxx.luna.akamaiapis.net
//! client_token = akab-client-token
//! client_secret = client-secret
//! access_token = akab-access-token
//! max_body = 131072
//! ```
//!
//! Lines starting with `#` or `;` are comments. Values may be enclosed in
//! double quotes.

use super::DEFAULT_SECTION;
use super::Credentials;
use super::edgegrid;
use crate::BuildResult;
use crate::build_errors::Error as BuildError;
use std::collections::HashMap;
use std::path::PathBuf;

/// The environment variable holding the path of the `.edgerc` file.
pub(crate) const EDGERC_VAR: &str = "AKAMAI_EDGERC";

/// A builder for credentials stored in an `.edgerc` file.
#[derive(Debug)]
pub struct Builder {
    path: Option<PathBuf>,
    section: String,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            path: None,
            section: DEFAULT_SECTION.to_string(),
        }
    }
}

impl Builder {
    /// Creates a builder for the `default` section of the default file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the path of the file.
    ///
    /// By default the file is `$AKAMAI_EDGERC`, or `$HOME/.edgerc` if that
    /// environment variable is not set. A leading `~/` is replaced with the
    /// home directory.
    pub fn with_path<V: Into<PathBuf>>(mut self, v: V) -> Self {
        self.path = Some(v.into());
        self
    }

    /// Selects the section of the file.
    pub fn with_section<V: Into<String>>(mut self, v: V) -> Self {
        self.section = v.into();
        self
    }

    /// Loads the file and returns a [Credentials] instance.
    ///
    /// # Errors
    ///
    /// - [is_loading()][BuildError::is_loading] if the file cannot be read,
    ///   or the section is not found.
    /// - [is_parsing()][BuildError::is_parsing] if `max_body` is not a number.
    /// - [is_missing_field()][BuildError::is_missing_field] if the section
    ///   lacks any of the required keys.
    pub fn build(self) -> BuildResult<Credentials> {
        let path = match self.path {
            Some(p) => expand_home(p)?,
            None => default_path()?,
        };
        let contents = std::fs::read_to_string(&path).map_err(BuildError::loading)?;
        let mut sections = parse(&contents);
        let values = sections.remove(&self.section).ok_or_else(|| {
            BuildError::loading(format!(
                "section [{}] not found in {}",
                self.section,
                path.display()
            ))
        })?;
        from_values(values)
    }
}

fn from_values(mut values: HashMap<String, String>) -> BuildResult<Credentials> {
    let mut builder = edgegrid::Builder::new();
    if let Some(v) = values.remove("host") {
        builder = builder.with_host(v);
    }
    if let Some(v) = values.remove("client_token") {
        builder = builder.with_client_token(v);
    }
    if let Some(v) = values.remove("client_secret") {
        builder = builder.with_client_secret(v);
    }
    if let Some(v) = values.remove("access_token") {
        builder = builder.with_access_token(v);
    }
    if let Some(v) = values.remove("max_body") {
        let max_body = v
            .parse::<usize>()
            .map_err(|e| BuildError::parsing(format!("invalid max_body {v:?}: {e}")))?;
        builder = builder.with_max_body(max_body);
    }
    builder.build()
}

fn default_path() -> BuildResult<PathBuf> {
    if let Ok(p) = std::env::var(EDGERC_VAR) {
        return expand_home(PathBuf::from(p));
    }
    Ok(home()?.join(".edgerc"))
}

fn expand_home(path: PathBuf) -> BuildResult<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => Ok(home()?.join(rest)),
        Err(_) => Ok(path),
    }
}

fn home() -> BuildResult<PathBuf> {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .ok_or_else(|| BuildError::loading("cannot find the home directory, HOME is not set"))
}

/// Parses the file into a map of sections.
fn parse(contents: &str) -> HashMap<String, HashMap<String, String>> {
    let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
    let mut current = None;
    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let name = name.trim().to_string();
            sections.entry(name.clone()).or_default();
            current = Some(name);
            continue;
        }
        let (Some(section), Some((key, value))) = (current.as_ref(), line.split_once('=')) else {
            continue;
        };
        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value);
        sections
            .entry(section.clone())
            .or_default()
            .insert(key.trim().to_string(), value.to_string());
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::tests::{TestResult, edgerc_file};
    use scoped_env::ScopedEnv;
    use std::io::Write;

    #[test]
    fn parse_sections() {
        let contents = r#"
# a comment
; another comment
[default]
host = "akab-quoted.luna.akamaiapis.net"
client_token=no-spaces
ignored line

[ other ]
client_secret = a=b
"#;
        let got = parse(contents);
        assert_eq!(got.len(), 2, "{got:?}");
        let default = &got["default"];
        assert_eq!(default["host"], "akab-quoted.luna.akamaiapis.net");
        assert_eq!(default["client_token"], "no-spaces");
        assert!(!default.contains_key("ignored line"), "{default:?}");
        assert_eq!(got["other"]["client_secret"], "a=b");
    }

    #[tokio::test]
    async fn load_default_section() -> TestResult {
        let file = edgerc_file()?;
        let creds = Builder::new().with_path(file.path()).build()?;
        assert_eq!(
            creds.host().await.as_deref(),
            Some("akaa-baseurl-xxxxxxxxxxx-xxxxxxxxxxxxx.luna.akamaiapis.net")
        );
        Ok(())
    }

    #[tokio::test]
    async fn load_named_section() -> TestResult {
        let file = edgerc_file()?;
        let creds = Builder::new()
            .with_path(file.path())
            .with_section("papi")
            .build()?;
        assert_eq!(
            creds.host().await.as_deref(),
            Some("akaa-papi.luna.akamaiapis.net")
        );
        let fmt = format!("{creds:?}");
        assert!(fmt.contains("max_body: 1024"), "{fmt}");
        assert!(!fmt.contains("PAPISECRET"), "{fmt}");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn load_from_env_path() -> TestResult {
        let file = edgerc_file()?;
        let path = file.path().to_string_lossy().to_string();
        let _e = ScopedEnv::set(EDGERC_VAR, path.as_str());
        let creds = Builder::new().build()?;
        assert!(creds.host().await.is_some());
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn home_expansion() -> TestResult {
        let _e = ScopedEnv::set("HOME", "/home/test-only");
        let got = expand_home(PathBuf::from("~/.edgerc"))?;
        assert_eq!(got, PathBuf::from("/home/test-only/.edgerc"));
        let got = expand_home(PathBuf::from("/etc/edgerc"))?;
        assert_eq!(got, PathBuf::from("/etc/edgerc"));
        Ok(())
    }

    #[test]
    fn missing_file() {
        let err = Builder::new()
            .with_path("/does/not/exist/.edgerc")
            .build()
            .unwrap_err();
        assert!(err.is_loading(), "{err:?}");
    }

    #[test]
    fn missing_section() -> TestResult {
        let file = edgerc_file()?;
        let err = Builder::new()
            .with_path(file.path())
            .with_section("ccu")
            .build()
            .unwrap_err();
        assert!(err.is_loading(), "{err:?}");
        assert!(err.to_string().contains("[ccu]"), "{err}");
        Ok(())
    }

    #[test]
    fn bad_max_body() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(
            file,
            "[default]\nhost = h\nclient_token = a\nclient_secret = b\naccess_token = c\nmax_body = lots"
        )?;
        let err = Builder::new().with_path(file.path()).build().unwrap_err();
        assert!(err.is_parsing(), "{err:?}");
        Ok(())
    }

    #[test]
    fn missing_token() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "[default]\nhost = h\nclient_token = a\nclient_secret = b")?;
        let err = Builder::new().with_path(file.path()).build().unwrap_err();
        assert!(err.is_missing_field(), "{err:?}");
        assert!(err.to_string().contains("access_token"), "{err}");
        Ok(())
    }
}
