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
use gaxi::query_parameter::QueryParameter;
use http::{Method, StatusCode};

/// Implements [EdgeWorkers](super::stub::EdgeWorkers) using a [ReqwestClient].
#[derive(Clone, Debug)]
pub struct EdgeWorkers {
    inner: ReqwestClient,
}

impl EdgeWorkers {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config).await?;
        Ok(Self { inner })
    }
}

const IDS_PATH: &str = "/edgeworkers/v1/ids";
const ID_TEMPLATE: &str = "/edgeworkers/v1/ids/{edgeWorkerId}";

impl super::stub::EdgeWorkers for EdgeWorkers {
    async fn list_edge_worker_ids(
        &self,
        req: model::ListEdgeWorkerIdsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ListEdgeWorkerIdsResponse>> {
        tracing::debug!("ListEdgeWorkersID");
        let options = set_path_template(options, IDS_PATH);
        let builder = self.inner.builder(Method::GET, IDS_PATH.to_string());
        let builder = req.group_id.add(builder, "groupId");
        let builder = req.resource_tier_id.add(builder, "resourceTierId");
        self.inner
            .execute(builder, None::<NoBody>, &[StatusCode::OK], options)
            .await
    }

    async fn get_edge_worker_id(
        &self,
        req: model::GetEdgeWorkerIdRequest,
        options: RequestOptions,
    ) -> Result<Response<model::EdgeWorkerId>> {
        tracing::debug!("GetEdgeWorkerID");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(options, ID_TEMPLATE);
        let path = format!("{IDS_PATH}/{}", req.edge_worker_id);
        let builder = self.inner.builder(Method::GET, path);
        self.inner
            .execute(builder, None::<NoBody>, &[StatusCode::OK], options)
            .await
    }

    async fn create_edge_worker_id(
        &self,
        req: model::CreateEdgeWorkerIdRequest,
        options: RequestOptions,
    ) -> Result<Response<model::EdgeWorkerId>> {
        tracing::debug!("CreateEdgeWorkerID");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(options, IDS_PATH);
        let builder = self.inner.builder(Method::POST, IDS_PATH.to_string());
        self.inner
            .execute(builder, Some(&req), &[StatusCode::CREATED], options)
            .await
    }

    async fn delete_edge_worker_id(
        &self,
        req: model::DeleteEdgeWorkerIdRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        tracing::debug!("DeleteEdgeWorkerID");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(options, ID_TEMPLATE);
        let path = format!("{IDS_PATH}/{}", req.edge_worker_id);
        let builder = self.inner.builder(Method::DELETE, path);
        self.inner
            .execute(builder, None::<NoBody>, &[StatusCode::NO_CONTENT], options)
            .await
    }
}
