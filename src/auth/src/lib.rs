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

//! EdgeGrid Client Libraries for Rust - Authentication Components
//!
//! This crate contains types and functions used to authenticate requests to
//! EdgeGrid APIs. The clients consume an implementation of
//! [credentials::Credentials] and use these credentials to sign each request.
//!
//! EdgeGrid credentials consist of a client token, a client secret, an access
//! token, and the API host. They are typically stored in a section of an
//! `.edgerc` file, or in `AKAMAI_*` environment variables. Each request is
//! signed with the `EG1-HMAC-SHA256` algorithm, which covers the method, the
//! URL, selected headers, and (for `POST` requests) a hash of the body.

pub mod build_errors;
pub mod errors;

/// Types and functions to work with EdgeGrid credentials.
pub mod credentials;

/// A `Result` alias where the `Err` case is
/// `edgegrid_auth::errors::CredentialsError`.
pub(crate) type Result<T> = std::result::Result<T, crate::errors::CredentialsError>;

/// The result of building credentials.
pub(crate) type BuildResult<T> = std::result::Result<T, crate::build_errors::Error>;
