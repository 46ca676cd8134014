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

/// Defines the trait used to implement [crate::client::EdgeWorkers].
///
/// Application developers may need to implement this trait to mock
/// `EdgeWorkers`. In other use-cases, application developers only
/// use `EdgeWorkers` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new operations routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just panic.
pub trait EdgeWorkers: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::EdgeWorkers::list_edge_worker_ids].
    fn list_edge_worker_ids(
        &self,
        _req: model::ListEdgeWorkerIdsRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = Result<Response<model::ListEdgeWorkerIdsResponse>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::EdgeWorkers::get_edge_worker_id].
    fn get_edge_worker_id(
        &self,
        _req: model::GetEdgeWorkerIdRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::EdgeWorkerId>>> + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::EdgeWorkers::create_edge_worker_id].
    fn create_edge_worker_id(
        &self,
        _req: model::CreateEdgeWorkerIdRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::EdgeWorkerId>>> + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::EdgeWorkers::delete_edge_worker_id].
    fn delete_edge_worker_id(
        &self,
        _req: model::DeleteEdgeWorkerIdRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<()>>> + Send {
        unimplemented_stub()
    }
}
