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

use crate::Result;
use crate::model;
use gax::options::RequestOptions;
use gax::response::Response;

/// A dyn-compatible, crate-private version of [super::Policies].
#[async_trait::async_trait]
pub trait Policies: std::fmt::Debug + Send + Sync {
    async fn list_policies(
        &self,
        req: model::ListPoliciesRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ListPoliciesResponse>>;

    async fn get_policy(
        &self,
        req: model::GetPolicyRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PolicyOutput>>;

    async fn upsert_policy(
        &self,
        req: model::UpsertPolicyRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PolicyResponse>>;

    async fn delete_policy(
        &self,
        req: model::DeletePolicyRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PolicyResponse>>;

    async fn get_policy_history(
        &self,
        req: model::GetPolicyHistoryRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetPolicyHistoryResponse>>;

    async fn rollback_policy(
        &self,
        req: model::RollbackPolicyRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PolicyResponse>>;
}

/// All implementations of [super::Policies] also implement [Policies].
#[async_trait::async_trait]
impl<T: super::Policies> Policies for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_policies(
        &self,
        req: model::ListPoliciesRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ListPoliciesResponse>> {
        T::list_policies(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_policy(
        &self,
        req: model::GetPolicyRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PolicyOutput>> {
        T::get_policy(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn upsert_policy(
        &self,
        req: model::UpsertPolicyRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PolicyResponse>> {
        T::upsert_policy(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_policy(
        &self,
        req: model::DeletePolicyRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PolicyResponse>> {
        T::delete_policy(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_policy_history(
        &self,
        req: model::GetPolicyHistoryRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetPolicyHistoryResponse>> {
        T::get_policy_history(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn rollback_policy(
        &self,
        req: model::RollbackPolicyRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PolicyResponse>> {
        T::rollback_policy(self, req, options).await
    }
}
