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

//! EdgeGrid Client Libraries for Rust - Application Security API
//!
//! This crate contains the client for the Application Security API, version 1.
//! The client covers the policy resources used to tune a security
//! configuration:
//!
//! - the actions and condition exceptions of rules and attack groups in
//!   evaluation mode,
//! - the protections enabled on a security policy,
//! - the actions of reputation profiles,
//! - the hostname coverage of all security configurations.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use edgegrid_appsec_v1::client::Appsec;
//! use edgegrid_appsec_v1::model::GetEvalRuleRequest;
//! let client = Appsec::builder().build().await?;
//! let rule = client
//!     .get_eval_rule(
//!         GetEvalRuleRequest::new()
//!             .set_config_id(43253)
//!             .set_version(15)
//!             .set_policy_id("AAAA_81230")
//!             .set_rule_id(699989),
//!     )
//!     .send()
//!     .await?;
//! println!("rule action is {}", rule.action);
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
