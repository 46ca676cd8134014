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

/// Implements a client for the EdgeWorkers API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use edgegrid_edgeworkers_v1::client::EdgeWorkers;
/// let client = EdgeWorkers::builder().build().await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `EdgeWorkers` use the `with_*` methods in the type returned
/// by [builder()][EdgeWorkers::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client sends requests to the host
///   in the EdgeGrid credentials. Applications using a proxy, or testing
///   against a local server, may want to override this default.
/// * [with_credentials()]: by default this client loads the credentials from
///   the environment, or from the `default` section of `~/.edgerc`.
///   Applications with multiple accounts may need to override this default.
///
/// [with_endpoint()]: super::builder::edge_workers::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::edge_workers::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `EdgeWorkers` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `EdgeWorkers` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct EdgeWorkers {
    inner: std::sync::Arc<dyn super::stub::dynamic::EdgeWorkers>,
}

impl EdgeWorkers {
    /// Returns a builder for [EdgeWorkers].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use edgegrid_edgeworkers_v1::client::EdgeWorkers;
    /// let client = EdgeWorkers::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::edge_workers::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::edge_workers::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::EdgeWorkers + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = super::transport::EdgeWorkers::new(config).await?;
        Ok(Self {
            inner: std::sync::Arc::new(inner),
        })
    }

    /// Lists the EdgeWorker identifiers in the account.
    pub fn list_edge_worker_ids(
        &self,
        req: crate::model::ListEdgeWorkerIdsRequest,
    ) -> super::builder::edge_workers::ListEdgeWorkerIds {
        super::builder::edge_workers::ListEdgeWorkerIds::new(self.inner.clone()).with_request(req)
    }

    /// Returns an EdgeWorker identifier.
    ///
    /// # Example
    /// ```
    /// # use edgegrid_edgeworkers_v1::client::EdgeWorkers;
    /// # use edgegrid_edgeworkers_v1::model::GetEdgeWorkerIdRequest;
    /// async fn example(client: &EdgeWorkers) -> gax::Result<()> {
    ///     let id = client
    ///         .get_edge_worker_id(GetEdgeWorkerIdRequest::new().set_edge_worker_id(42))
    ///         .send()
    ///         .await?;
    ///     println!("{} is in group {}", id.name, id.group_id);
    ///     Ok(())
    /// }
    /// ```
    pub fn get_edge_worker_id(
        &self,
        req: crate::model::GetEdgeWorkerIdRequest,
    ) -> super::builder::edge_workers::GetEdgeWorkerId {
        super::builder::edge_workers::GetEdgeWorkerId::new(self.inner.clone()).with_request(req)
    }

    /// Creates an EdgeWorker identifier.
    pub fn create_edge_worker_id(
        &self,
        req: crate::model::CreateEdgeWorkerIdRequest,
    ) -> super::builder::edge_workers::CreateEdgeWorkerId {
        super::builder::edge_workers::CreateEdgeWorkerId::new(self.inner.clone()).with_request(req)
    }

    /// Deletes an EdgeWorker identifier.
    ///
    /// The service rejects the request if the EdgeWorker has active versions.
    pub fn delete_edge_worker_id(
        &self,
        req: crate::model::DeleteEdgeWorkerIdRequest,
    ) -> super::builder::edge_workers::DeleteEdgeWorkerId {
        super::builder::edge_workers::DeleteEdgeWorkerId::new(self.inner.clone()).with_request(req)
    }
}
