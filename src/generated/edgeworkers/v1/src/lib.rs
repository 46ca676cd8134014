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


//! EdgeGrid Client Libraries for Rust - EdgeWorkers API
//!
//! This crate contains the client for the EdgeWorkers API, version 1. The
//! client manages the EdgeWorker identifiers in an account.
//!
//! The service returns richer problem details than most EdgeGrid services.
//! Use [errors::Error::from_error] to inspect them.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use edgegrid_edgeworkers_v1::client::EdgeWorkers;
//! use edgegrid_edgeworkers_v1::model::ListEdgeWorkerIdsRequest;
//! let client = EdgeWorkers::builder().build().await?;
//! let response = client
//!     .list_edge_worker_ids(ListEdgeWorkerIdsRequest::new().set_group_id(72297))
//!     .send()
//!     .await?;
//! for id in response.edge_worker_ids {
//!     println!("{} {}", id.edge_worker_id, id.name);
//! }
//! # anyhow::Result::<()>::Ok(()) });
//! ```

/// The messages and enums that are part of this client library.
pub mod model;

/// Errors returned by the EdgeWorkers service.
pub mod errors;

pub use gax::Result;
pub use gax::error::Error;

/// Request builders.
pub mod builder;

/// Concrete implementations of this client library traits.
pub mod client;

/// Traits to mock the clients in this library.
pub mod stub;

pub(crate) mod transport;
