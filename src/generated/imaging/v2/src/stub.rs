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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! responses. The traits in this module are the extension points to do so.

use crate::Result;
use crate::model;
use gax::options::RequestOptions;
use gax::response::Response;
use gaxi::unimplemented::unimplemented_stub;

pub(crate) mod dynamic;

/// Defines the trait used to implement [crate::client::Policies].
///
/// Application developers may need to implement this trait to mock
/// `Policies`. In other use-cases, application developers only
/// use `Policies` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new operations routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just panic.
pub trait Policies: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::Policies::list_policies].
    fn list_policies(
        &self,
        _req: model::ListPoliciesRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::ListPoliciesResponse>>> + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Policies::get_policy].
    fn get_policy(
        &self,
        _req: model::GetPolicyRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::PolicyOutput>>> + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Policies::upsert_policy].
    fn upsert_policy(
        &self,
        _req: model::UpsertPolicyRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::PolicyResponse>>> + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Policies::delete_policy].
    fn delete_policy(
        &self,
        _req: model::DeletePolicyRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::PolicyResponse>>> + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Policies::get_policy_history].
    fn get_policy_history(
        &self,
        _req: model::GetPolicyHistoryRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = Result<Response<model::GetPolicyHistoryResponse>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Policies::rollback_policy].
    fn rollback_policy(
        &self,
        _req: model::RollbackPolicyRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::PolicyResponse>>> + Send {
        unimplemented_stub()
    }
}
