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

//! EdgeGrid API helpers.
//!
//! This crate contains the types shared by all the EdgeGrid client libraries:
//! the error model, the per-request options, the response wrapper, the client
//! builder, and the request validation helpers.
//!
//! <div class="warning">
//! Types and functions hidden from the documentation are implementation
//! details of the client libraries. They may change without notice.
//! </div>

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping API calls.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the clients.
pub mod error;

pub mod client_builder;
pub mod options;
pub mod response;
pub mod validation;
