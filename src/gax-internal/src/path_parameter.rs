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

//! Encoding of path parameters.
//!
//! Most path parameters are numeric identifiers. Some, such as DNS zone names,
//! record names, or image policy ids, are caller-provided strings and must be
//! percent-encoded before they are inserted in the request path.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// The characters encoded when they appear in a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encodes `value` for use as a single path segment.
///
/// # Example
/// ```
/// # use edgegrid_gax_internal::path_parameter::encode;
/// assert_eq!(encode("example.com"), "example.com");
/// assert_eq!(encode("a/b c"), "a%2Fb%20c");
/// ```
pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}
