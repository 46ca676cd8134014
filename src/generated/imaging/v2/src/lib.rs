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

//! EdgeGrid Client Libraries for Rust - Image and Video Manager API
//!
//! This crate contains the client for the Image and Video Manager API,
//! version 2. The client manages the policies in a policy set. Each policy
//! describes how the service transforms the images (or videos) it serves.
//!
//! Policies are deployed to a network, either [staging][model::NETWORK_STAGING]
//! or [production][model::NETWORK_PRODUCTION]. All the operations require the
//! contract and the policy set that own the policy.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use edgegrid_imaging_v2::client::Policies;
//! use edgegrid_imaging_v2::model::{ListPoliciesRequest, NETWORK_PRODUCTION};
//! let client = Policies::builder().build().await?;
//! let response = client
//!     .list_policies(
//!         ListPoliciesRequest::new()
//!             .set_network(NETWORK_PRODUCTION)
//!             .set_contract_id("3-WNKXX1")
//!             .set_policy_set_id("570f9090-5dbe-11ec-8a0a-71665789c1d8"),
//!     )
//!     .send()
//!     .await?;
//! for policy in response.items {
//!     println!("{} version {}", policy.id(), policy.version());
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
