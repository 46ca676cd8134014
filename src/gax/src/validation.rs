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

//! Validate requests before they are sent.
//!
//! Each request type in the client libraries implements a `validate()`
//! function. These functions check each field with the rules in this module
//! and collect the failures into an [Errors] value. Requests that fail
//! validation are never sent, the client returns an [Error] where
//! [is_validation()][Error::is_validation] is true.
//!
//! # Example
//! ```
//! # use edgegrid_gax::validation::{self, Errors};
//! let config_id = 0_i64;
//! let policy_id = "";
//! let errors = Errors::new()
//!     .field("ConfigID", validation::required(&config_id))
//!     .field("PolicyID", validation::required_str(policy_id));
//! assert_eq!(
//!     errors.to_string(),
//!     "ConfigID: cannot be blank; PolicyID: cannot be blank."
//! );
//! ```

use crate::error::Error;
use std::collections::BTreeMap;

const BLANK: &str = "cannot be blank";

/// A collection of field validation failures.
///
/// Fields that pass validation are filtered out. The failures are rendered in
/// field name order, so the messages are stable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Errors(BTreeMap<String, Problem>);

#[derive(Clone, Debug, PartialEq)]
enum Problem {
    Message(String),
    Nested(Errors),
}

impl Errors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the result of validating the field `name`.
    ///
    /// `problem` is the output of a rule such as [required]. A `None` value
    /// means the field passed validation and is not recorded.
    pub fn field<K: Into<String>>(mut self, name: K, problem: Option<String>) -> Self {
        if let Some(p) = problem {
            self.0.insert(name.into(), Problem::Message(p));
        }
        self
    }

    /// Records the result of validating a nested structure.
    pub fn nested<K: Into<String>>(mut self, name: K, result: Result<(), Errors>) -> Self {
        if let Err(e) = result {
            if !e.is_empty() {
                self.0.insert(name.into(), Problem::Nested(e));
            }
        }
        self
    }

    /// Returns true if no field failed validation.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of fields that failed validation.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the field `name` failed validation.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Converts the collection to a [Result], `Ok(())` when it is empty.
    pub fn into_result(self) -> Result<(), Errors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Converts the collection to a client library result.
    pub fn into_gax_result(self) -> crate::Result<()> {
        self.into_result().map_err(Error::validation)
    }
}

impl std::fmt::Display for Errors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        for (i, (name, problem)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            match problem {
                Problem::Message(m) => write!(f, "{name}: {m}")?,
                Problem::Nested(n) => write!(f, "{name}: ({n})")?,
            }
        }
        write!(f, ".")
    }
}

impl std::error::Error for Errors {}

/// Fails if `value` is equal to its default, e.g. zero or an empty string.
pub fn required<T: Default + PartialEq>(value: &T) -> Option<String> {
    (*value == T::default()).then(|| BLANK.to_string())
}

/// Fails if `value` is empty.
pub fn required_str(value: &str) -> Option<String> {
    value.is_empty().then(|| BLANK.to_string())
}

/// Fails if `value` cannot be used as a single path segment.
///
/// Empty values fail with the same message as [required_str]. The dot
/// segments `.` and `..` fail even when percent-encoded, URL parsers resolve
/// them and the request would target a different resource.
pub fn path_segment(value: &str) -> Option<String> {
    match value {
        "" => Some(BLANK.to_string()),
        "." | ".." => Some("cannot be a relative path segment".to_string()),
        _ => None,
    }
}

/// Fails if `value` is `None`.
pub fn required_some<T>(value: &Option<T>) -> Option<String> {
    value.is_none().then(|| BLANK.to_string())
}

/// Fails if `value` is not one of the `allowed` values.
///
/// Empty values fail with the same message as [required_str].
pub fn one_of(value: &str, allowed: &[&str]) -> Option<String> {
    if value.is_empty() {
        return Some(BLANK.to_string());
    }
    if allowed.contains(&value) {
        return None;
    }
    let allowed = allowed
        .iter()
        .map(|v| format!("'{v}'"))
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("has to be {allowed}"))
}

/// Fails if `value` is present and outside `[min, max]`.
pub fn in_range<T>(value: Option<T>, min: T, max: T) -> Option<String>
where
    T: PartialOrd + std::fmt::Display,
{
    match value {
        Some(v) if v < min => Some(format!("must be no less than {min}")),
        Some(v) if v > max => Some(format!("must be no greater than {max}")),
        _ => None,
    }
}

/// Fails if any element of `values` is outside `[min, max]`.
pub fn each_in_range<T>(values: &[T], min: T, max: T) -> Option<String>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    values
        .iter()
        .enumerate()
        .find_map(|(i, v)| in_range(Some(*v), min, max).map(|m| format!("{i}: {m}")))
}
