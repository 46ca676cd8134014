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

/// A dyn-compatible, crate-private version of [super::Appsec].
#[async_trait::async_trait]
pub trait Appsec: std::fmt::Debug + Send + Sync {
    async fn get_eval_rules(
        &self,
        req: model::GetEvalRulesRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetEvalRulesResponse>>;

    async fn get_eval_rule(
        &self,
        req: model::GetEvalRuleRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetEvalRuleResponse>>;

    async fn update_eval_rule(
        &self,
        req: model::UpdateEvalRuleRequest,
        options: RequestOptions,
    ) -> Result<Response<model::UpdateEvalRuleResponse>>;

    async fn get_eval_groups(
        &self,
        req: model::GetEvalGroupsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetEvalGroupsResponse>>;

    async fn get_eval_group(
        &self,
        req: model::GetEvalGroupRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetEvalGroupResponse>>;

    async fn update_eval_group(
        &self,
        req: model::UpdateEvalGroupRequest,
        options: RequestOptions,
    ) -> Result<Response<model::UpdateEvalGroupResponse>>;

    async fn get_ip_geo_protections(
        &self,
        req: model::GetIpGeoProtectionsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetIpGeoProtectionsResponse>>;

    async fn get_ip_geo_protection(
        &self,
        req: model::GetIpGeoProtectionRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetIpGeoProtectionResponse>>;

    async fn update_ip_geo_protection(
        &self,
        req: model::UpdateIpGeoProtectionRequest,
        options: RequestOptions,
    ) -> Result<Response<model::UpdateIpGeoProtectionResponse>>;

    async fn get_reputation_profile_actions(
        &self,
        req: model::GetReputationProfileActionsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetReputationProfileActionsResponse>>;

    async fn get_reputation_profile_action(
        &self,
        req: model::GetReputationProfileActionRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetReputationProfileActionResponse>>;

    async fn update_reputation_profile_action(
        &self,
        req: model::UpdateReputationProfileActionRequest,
        options: RequestOptions,
    ) -> Result<Response<model::UpdateReputationProfileActionResponse>>;

    async fn get_api_hostname_coverage(
        &self,
        req: model::GetApiHostnameCoverageRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetApiHostnameCoverageResponse>>;
}

/// All implementations of [super::Appsec] also implement [Appsec].
#[async_trait::async_trait]
impl<T: super::Appsec> Appsec for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn get_eval_rules(
        &self,
        req: model::GetEvalRulesRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetEvalRulesResponse>> {
        T::get_eval_rules(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_eval_rule(
        &self,
        req: model::GetEvalRuleRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetEvalRuleResponse>> {
        T::get_eval_rule(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_eval_rule(
        &self,
        req: model::UpdateEvalRuleRequest,
        options: RequestOptions,
    ) -> Result<Response<model::UpdateEvalRuleResponse>> {
        T::update_eval_rule(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_eval_groups(
        &self,
        req: model::GetEvalGroupsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetEvalGroupsResponse>> {
        T::get_eval_groups(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_eval_group(
        &self,
        req: model::GetEvalGroupRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetEvalGroupResponse>> {
        T::get_eval_group(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_eval_group(
        &self,
        req: model::UpdateEvalGroupRequest,
        options: RequestOptions,
    ) -> Result<Response<model::UpdateEvalGroupResponse>> {
        T::update_eval_group(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_ip_geo_protections(
        &self,
        req: model::GetIpGeoProtectionsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetIpGeoProtectionsResponse>> {
        T::get_ip_geo_protections(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_ip_geo_protection(
        &self,
        req: model::GetIpGeoProtectionRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetIpGeoProtectionResponse>> {
        T::get_ip_geo_protection(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_ip_geo_protection(
        &self,
        req: model::UpdateIpGeoProtectionRequest,
        options: RequestOptions,
    ) -> Result<Response<model::UpdateIpGeoProtectionResponse>> {
        T::update_ip_geo_protection(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_reputation_profile_actions(
        &self,
        req: model::GetReputationProfileActionsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetReputationProfileActionsResponse>> {
        T::get_reputation_profile_actions(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_reputation_profile_action(
        &self,
        req: model::GetReputationProfileActionRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetReputationProfileActionResponse>> {
        T::get_reputation_profile_action(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_reputation_profile_action(
        &self,
        req: model::UpdateReputationProfileActionRequest,
        options: RequestOptions,
    ) -> Result<Response<model::UpdateReputationProfileActionResponse>> {
        T::update_reputation_profile_action(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_api_hostname_coverage(
        &self,
        req: model::GetApiHostnameCoverageRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetApiHostnameCoverageResponse>> {
        T::get_api_hostname_coverage(self, req, options).await
    }
}
