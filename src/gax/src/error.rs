// Copyright 2024 Google LLC
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

mod core_error;
pub use core_error::*;
mod credentials;
pub use credentials::CredentialsError;

/// The error payload returned by EdgeGrid services.
///
/// All EdgeGrid APIs report failures using a JSON "problem details" object
/// with (at least) a `type`, a `title`, a `detail`, and a `status`. The client
/// libraries decode this payload uniformly, and preserve any additional fields
/// so service-specific crates can offer richer views.
///
/// # Examples
///
/// ```
/// # use edgegrid_gax::error;
/// use error::Error;
/// fn handle_error(e: Error) {
///     if let Some(api) = e.api_error() {
///         println!("the service reported {api}")
///     }
/// }
/// ```
pub mod api_error;
