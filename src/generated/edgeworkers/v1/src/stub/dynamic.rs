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

/// A dyn-compatible, crate-private version of [super::EdgeWorkers].
#[async_trait::async_trait]
pub trait EdgeWorkers: std::fmt::Debug + Send + Sync {
    async fn list_edge_worker_ids(
        &self,
        req: model::ListEdgeWorkerIdsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ListEdgeWorkerIdsResponse>>;

    async fn get_edge_worker_id(
        &self,
        req: model::GetEdgeWorkerIdRequest,
        options: RequestOptions,
    ) -> Result<Response<model::EdgeWorkerId>>;

    async fn create_edge_worker_id(
        &self,
        req: model::CreateEdgeWorkerIdRequest,
        options: RequestOptions,
    ) -> Result<Response<model::EdgeWorkerId>>;

    async fn delete_edge_worker_id(
        &self,
        req: model::DeleteEdgeWorkerIdRequest,
        options: RequestOptions,
    ) -> Result<Response<()>>;
}

/// All implementations of [super::EdgeWorkers] also implement [EdgeWorkers].
#[async_trait::async_trait]
impl<T: super::EdgeWorkers> EdgeWorkers for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_edge_worker_ids(
        &self,
        req: model::ListEdgeWorkerIdsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ListEdgeWorkerIdsResponse>> {
        T::list_edge_worker_ids(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_edge_worker_id(
        &self,
        req: model::GetEdgeWorkerIdRequest,
        options: RequestOptions,
    ) -> Result<Response<model::EdgeWorkerId>> {
        T::get_edge_worker_id(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_edge_worker_id(
        &self,
        req: model::CreateEdgeWorkerIdRequest,
        options: RequestOptions,
    ) -> Result<Response<model::EdgeWorkerId>> {
        T::create_edge_worker_id(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_edge_worker_id(
        &self,
        req: model::DeleteEdgeWorkerIdRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        T::delete_edge_worker_id(self, req, options).await
    }
}
