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
use http::{Method, StatusCode};

const OK: &[StatusCode] = &[StatusCode::OK];
const OK_OR_CREATED: &[StatusCode] = &[StatusCode::OK, StatusCode::CREATED];

const CONTRACT: &str = "Contract";
const POLICY_SET: &str = "Policy-Set";

/// Implements [Policies](super::stub::Policies) using a [ReqwestClient].
#[derive(Clone, Debug)]
pub struct Policies {
    inner: ReqwestClient,
}

impl Policies {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config).await?;
        Ok(Self { inner })
    }
}

impl super::stub::Policies for Policies {
    async fn list_policies(
        &self,
        req: model::ListPoliciesRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ListPoliciesResponse>> {
        tracing::debug!("ListPolicies");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(options, "/imaging/v2/network/{network}/policies/");
        let path = format!("/imaging/v2/network/{}/policies/", encode(&req.network));
        let builder = self
            .inner
            .builder(Method::GET, path)
            .header(CONTRACT, req.contract_id.as_str())
            .header(POLICY_SET, req.policy_set_id.as_str());
        self.inner
            .execute(builder, None::<NoBody>, OK, options)
            .await
    }

    async fn get_policy(
        &self,
        req: model::GetPolicyRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PolicyOutput>> {
        tracing::debug!("GetPolicy");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(
            options,
            "/imaging/v2/network/{network}/policies/{policyId}",
        );
        let path = format!(
            "/imaging/v2/network/{}/policies/{}",
            encode(&req.network),
            encode(&req.policy_id)
        );
        let builder = self
            .inner
            .builder(Method::GET, path)
            .header(CONTRACT, req.contract_id.as_str())
            .header(POLICY_SET, req.policy_set_id.as_str());
        self.inner
            .execute(builder, None::<NoBody>, OK, options)
            .await
    }

    async fn upsert_policy(
        &self,
        req: model::UpsertPolicyRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PolicyResponse>> {
        tracing::debug!("UpsertPolicy");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(
            options,
            "/imaging/v2/network/{network}/policies/{policyId}",
        );
        let path = format!(
            "/imaging/v2/network/{}/policies/{}",
            encode(&req.network),
            encode(&req.policy_id)
        );
        let builder = self
            .inner
            .builder(Method::PUT, path)
            .header(CONTRACT, req.contract_id.as_str())
            .header(POLICY_SET, req.policy_set_id.as_str());
        self.inner
            .execute(builder, req.policy.as_ref(), OK_OR_CREATED, options)
            .await
    }

    async fn delete_policy(
        &self,
        req: model::DeletePolicyRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PolicyResponse>> {
        tracing::debug!("DeletePolicy");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(
            options,
            "/imaging/v2/network/{network}/policies/{policyId}",
        );
        let path = format!(
            "/imaging/v2/network/{}/policies/{}",
            encode(&req.network),
            encode(&req.policy_id)
        );
        let builder = self
            .inner
            .builder(Method::DELETE, path)
            .header(CONTRACT, req.contract_id.as_str())
            .header(POLICY_SET, req.policy_set_id.as_str());
        self.inner
            .execute(builder, None::<NoBody>, OK, options)
            .await
    }

    async fn get_policy_history(
        &self,
        req: model::GetPolicyHistoryRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetPolicyHistoryResponse>> {
        tracing::debug!("GetPolicyHistory");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(
            options,
            "/imaging/v2/network/{network}/policies/history/{policyId}",
        );
        let path = format!(
            "/imaging/v2/network/{}/policies/history/{}",
            encode(&req.network),
            encode(&req.policy_id)
        );
        let builder = self
            .inner
            .builder(Method::GET, path)
            .header(CONTRACT, req.contract_id.as_str())
            .header(POLICY_SET, req.policy_set_id.as_str());
        self.inner
            .execute(builder, None::<NoBody>, OK, options)
            .await
    }

    async fn rollback_policy(
        &self,
        req: model::RollbackPolicyRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PolicyResponse>> {
        tracing::debug!("RollbackPolicy");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(
            options,
            "/imaging/v2/network/{network}/policies/rollback/{policyId}",
        );
        let path = format!(
            "/imaging/v2/network/{}/policies/rollback/{}",
            encode(&req.network),
            encode(&req.policy_id)
        );
        let builder = self
            .inner
            .builder(Method::PUT, path)
            .header(CONTRACT, req.contract_id.as_str())
            .header(POLICY_SET, req.policy_set_id.as_str());
        self.inner
            .execute(builder, None::<NoBody>, OK, options)
            .await
    }
}
