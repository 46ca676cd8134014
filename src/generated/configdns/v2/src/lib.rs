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

//! EdgeGrid Client Libraries for Rust - Edge DNS Zone Management API
//!
//! This crate contains the client for the Edge DNS Zone Management API,
//! version 2. The client reads and changes the record sets of a zone.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use edgegrid_configdns_v2::client::ConfigDns;
//! use edgegrid_configdns_v2::model::{CreateRecordSetRequest, RecordSet};
//! let client = ConfigDns::builder().build().await?;
//! let created = client
//!     .create_record_set(
//!         CreateRecordSetRequest::new().set_zone("example.com").set_record_set(
//!             RecordSet::new()
//!                 .set_name("www.example.com")
//!                 .set_type("A")
//!                 .set_ttl(300)
//!                 .set_rdata(["10.0.0.2", "10.0.0.3"]),
//!         ),
//!     )
//!     .send()
//!     .await?;
//! println!("created {created:?}");
//! # anyhow::Result::<()>::Ok(()) });
//! ```

/// The messages and enums that are part of this client library.
pub mod model;

/// Errors specific to this client library.
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
