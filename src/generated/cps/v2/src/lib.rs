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


//! EdgeGrid Client Libraries for Rust - Certificate Provisioning System API
//!
//! This crate contains the client for the Certificate Provisioning System
//! (CPS) API, version 2. The client reads and removes certificate
//! enrollments, tracks the changes that deploy them, and answers the domain
//! validation challenges and pre-verification warnings those changes wait on.
//!
//! Each CPS operation uses versioned media types. The client sends the
//! matching `Accept` and `Content-Type` headers, applications can override
//! them with
//! [with_header()][gax::options::RequestOptionsBuilder::with_header].
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use edgegrid_cps_v2::client::Cps;
//! use edgegrid_cps_v2::model::ListEnrollmentsRequest;
//! let client = Cps::builder().build().await?;
//! let response = client
//!     .list_enrollments(ListEnrollmentsRequest::new().set_contract_id("K-0N7RAK71"))
//!     .send()
//!     .await?;
//! for enrollment in response.enrollments {
//!     println!("{:?} {:?}", enrollment.id(), enrollment.csr);
//! }
//! # anyhow::Result::<()>::Ok(()) });
//! ```

/// The messages and enums that are part of this client library.
pub mod model;

pub use gax::Result;
pub use gax::error::Error;

/// Request builders.
pub mod builder;

/// Concrete implementations of this client library traits.
pub mod client;

/// Traits to mock the clients in this library.
pub mod stub;

pub(crate) mod transport;
