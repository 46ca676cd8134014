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
use gax::error::Error;
use gax::options::RequestOptions;
use gax::options::internal::set_path_template;
use gax::response::Response;
use gaxi::http::{NoBody, ReqwestClient};
use gaxi::path_parameter::encode;
use gaxi::query_parameter::QueryParameter;
use http::{Method, StatusCode};

const OK: &[StatusCode] = &[StatusCode::OK];
const OK_OR_CREATED: &[StatusCode] = &[StatusCode::OK, StatusCode::CREATED];

/// Implements [Appsec](super::stub::Appsec) using a [ReqwestClient].
#[derive(Clone, Debug)]
pub struct Appsec {
    inner: ReqwestClient,
}

impl Appsec {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config).await?;
        Ok(Self { inner })
    }
}

fn policy_path(config_id: i64, version: i64, policy_id: &str) -> String {
    format!(
        "/appsec/v1/configs/{config_id}/versions/{version}/security-policies/{}",
        encode(policy_id)
    )
}

impl super::stub::Appsec for Appsec {
    async fn get_eval_rules(
        &self,
        req: model::GetEvalRulesRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetEvalRulesResponse>> {
        tracing::debug!("GetEvalRules");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(
            options,
            "/appsec/v1/configs/{configId}/versions/{version}/security-policies/{policyId}/eval-rules",
        );
        let path = format!(
            "{}/eval-rules",
            policy_path(req.config_id, req.version, &req.policy_id)
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = true.add(builder, "includeConditionException");
        let response = self
            .inner
            .execute::<NoBody, model::GetEvalRulesResponse>(builder, None, OK, options)
            .await?;
        if req.rule_id == 0 {
            return Ok(response);
        }
        Ok(response.map(|mut body| {
            body.rules.retain(|r| r.id == req.rule_id);
            body
        }))
    }

    async fn get_eval_rule(
        &self,
        req: model::GetEvalRuleRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetEvalRuleResponse>> {
        tracing::debug!("GetEvalRule");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(
            options,
            "/appsec/v1/configs/{configId}/versions/{version}/security-policies/{policyId}/eval-rules/{ruleId}",
        );
        let path = format!(
            "{}/eval-rules/{}",
            policy_path(req.config_id, req.version, &req.policy_id),
            req.rule_id
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = true.add(builder, "includeConditionException");
        self.inner
            .execute(builder, None::<NoBody>, OK, options)
            .await
    }

    async fn update_eval_rule(
        &self,
        req: model::UpdateEvalRuleRequest,
        options: RequestOptions,
    ) -> Result<Response<model::UpdateEvalRuleResponse>> {
        tracing::debug!("UpdateEvalRule");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(
            options,
            "/appsec/v1/configs/{configId}/versions/{version}/security-policies/{policyId}/eval-rules/{ruleId}/action-condition-exception",
        );
        let path = format!(
            "{}/eval-rules/{}/action-condition-exception",
            policy_path(req.config_id, req.version, &req.policy_id),
            req.rule_id
        );
        let builder = self.inner.builder(Method::PUT, path);
        let body = model::ActionConditionException::new(&req.action, &req.condition_exception);
        self.inner
            .execute(builder, Some(body), OK_OR_CREATED, options)
            .await
    }

    async fn get_eval_groups(
        &self,
        req: model::GetEvalGroupsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetEvalGroupsResponse>> {
        tracing::debug!("GetEvalGroups");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(
            options,
            "/appsec/v1/configs/{configId}/versions/{version}/security-policies/{policyId}/eval-groups",
        );
        let path = format!(
            "{}/eval-groups",
            policy_path(req.config_id, req.version, &req.policy_id)
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = true.add(builder, "includeConditionException");
        let response = self
            .inner
            .execute::<NoBody, model::GetEvalGroupsResponse>(builder, None, OK, options)
            .await?;
        if req.group.is_empty() {
            return Ok(response);
        }
        Ok(response.map(|mut body| {
            body.attack_groups.retain(|g| g.group == req.group);
            body
        }))
    }

    async fn get_eval_group(
        &self,
        req: model::GetEvalGroupRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetEvalGroupResponse>> {
        tracing::debug!("GetEvalGroup");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(
            options,
            "/appsec/v1/configs/{configId}/versions/{version}/security-policies/{policyId}/eval-groups/{group}",
        );
        let path = format!(
            "{}/eval-groups/{}",
            policy_path(req.config_id, req.version, &req.policy_id),
            encode(&req.group)
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = true.add(builder, "includeConditionException");
        self.inner
            .execute(builder, None::<NoBody>, OK, options)
            .await
    }

    async fn update_eval_group(
        &self,
        req: model::UpdateEvalGroupRequest,
        options: RequestOptions,
    ) -> Result<Response<model::UpdateEvalGroupResponse>> {
        tracing::debug!("UpdateEvalGroup");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(
            options,
            "/appsec/v1/configs/{configId}/versions/{version}/security-policies/{policyId}/eval-groups/{group}/action-condition-exception",
        );
        let path = format!(
            "{}/eval-groups/{}/action-condition-exception",
            policy_path(req.config_id, req.version, &req.policy_id),
            encode(&req.group)
        );
        let builder = self.inner.builder(Method::PUT, path);
        let body = model::ActionConditionException::new(&req.action, &req.condition_exception);
        self.inner
            .execute(builder, Some(body), OK_OR_CREATED, options)
            .await
    }

    async fn get_ip_geo_protections(
        &self,
        req: model::GetIpGeoProtectionsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetIpGeoProtectionsResponse>> {
        tracing::debug!("GetIPGeoProtections");
        req.validate().map_err(Error::validation)?;
        self.protections(req.config_id, req.version, &req.policy_id, options)
            .await
    }

    async fn get_ip_geo_protection(
        &self,
        req: model::GetIpGeoProtectionRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetIpGeoProtectionResponse>> {
        tracing::debug!("GetIPGeoProtection");
        req.validate().map_err(Error::validation)?;
        self.protections(req.config_id, req.version, &req.policy_id, options)
            .await
    }

    async fn update_ip_geo_protection(
        &self,
        req: model::UpdateIpGeoProtectionRequest,
        options: RequestOptions,
    ) -> Result<Response<model::UpdateIpGeoProtectionResponse>> {
        tracing::debug!("UpdateIPGeoProtection");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(
            options,
            "/appsec/v1/configs/{configId}/versions/{version}/security-policies/{policyId}/protections",
        );
        let path = format!(
            "{}/protections",
            policy_path(req.config_id, req.version, &req.policy_id)
        );
        let builder = self.inner.builder(Method::PUT, path);
        self.inner
            .execute(builder, Some(&req), OK_OR_CREATED, options)
            .await
    }

    async fn get_reputation_profile_actions(
        &self,
        req: model::GetReputationProfileActionsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetReputationProfileActionsResponse>> {
        tracing::debug!("GetReputationProfileActions");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(
            options,
            "/appsec/v1/configs/{configId}/versions/{version}/security-policies/{policyId}/reputation-profiles",
        );
        let path = format!(
            "{}/reputation-profiles",
            policy_path(req.config_id, req.version, &req.policy_id)
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner
            .execute(builder, None::<NoBody>, OK, options)
            .await
    }

    async fn get_reputation_profile_action(
        &self,
        req: model::GetReputationProfileActionRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetReputationProfileActionResponse>> {
        tracing::debug!("GetReputationProfileAction");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(
            options,
            "/appsec/v1/configs/{configId}/versions/{version}/security-policies/{policyId}/reputation-profiles/{reputationProfileId}",
        );
        let path = format!(
            "{}/reputation-profiles/{}",
            policy_path(req.config_id, req.version, &req.policy_id),
            req.reputation_profile_id
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner
            .execute(builder, None::<NoBody>, OK, options)
            .await
    }

    async fn update_reputation_profile_action(
        &self,
        req: model::UpdateReputationProfileActionRequest,
        options: RequestOptions,
    ) -> Result<Response<model::UpdateReputationProfileActionResponse>> {
        tracing::debug!("UpdateReputationProfileAction");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(
            options,
            "/appsec/v1/configs/{configId}/versions/{version}/security-policies/{policyId}/reputation-profiles/{reputationProfileId}",
        );
        let path = format!(
            "{}/reputation-profiles/{}",
            policy_path(req.config_id, req.version, &req.policy_id),
            req.reputation_profile_id
        );
        let builder = self.inner.builder(Method::PUT, path);
        self.inner
            .execute(builder, Some(&req), OK_OR_CREATED, options)
            .await
    }

    async fn get_api_hostname_coverage(
        &self,
        req: model::GetApiHostnameCoverageRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetApiHostnameCoverageResponse>> {
        tracing::debug!("GetApiHostnameCoverage");
        let options = set_path_template(options, "/appsec/v1/hostname-coverage");
        let builder = self
            .inner
            .builder(Method::GET, "/appsec/v1/hostname-coverage".to_string());
        let response = self
            .inner
            .execute::<NoBody, model::GetApiHostnameCoverageResponse>(builder, None, OK, options)
            .await?;
        Ok(response.map(|mut body| {
            body.hostname_coverage.retain(|c| req.matches(c));
            body
        }))
    }
}

impl Appsec {
    // Both protection getters read the same resource.
    async fn protections(
        &self,
        config_id: i64,
        version: i64,
        policy_id: &str,
        options: RequestOptions,
    ) -> Result<Response<model::ProtectionsResponse>> {
        let options = set_path_template(
            options,
            "/appsec/v1/configs/{configId}/versions/{version}/security-policies/{policyId}/protections",
        );
        let path = format!("{}/protections", policy_path(config_id, version, policy_id));
        let builder = self.inner.builder(Method::GET, path);
        self.inner
            .execute(builder, None::<NoBody>, OK, options)
            .await
    }
}
