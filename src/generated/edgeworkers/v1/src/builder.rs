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

pub mod edge_workers {
    use crate::Result;
    use std::sync::Arc;

    /// A builder for [EdgeWorkers][crate::client::EdgeWorkers].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use edgegrid_edgeworkers_v1::*;
    /// # use builder::edge_workers::ClientBuilder;
    /// # use client::EdgeWorkers;
    /// let builder : ClientBuilder = EdgeWorkers::builder();
    /// let client = builder
    ///     .with_endpoint("https://akab-test.luna.akamaiapis.net")
    ///     .with_credentials(auth::credentials::anonymous::Builder::new().build())
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::EdgeWorkers;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = EdgeWorkers;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::EdgeWorkers] request builders.
    #[derive(Clone, Debug)]
    pub struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn crate::stub::dynamic::EdgeWorkers>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::EdgeWorkers>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<R>>(mut self, v: V) -> Self {
            self.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.options = v.into();
            self
        }
    }

    impl<R> gax::options::RequestBuilder for RequestBuilder<R>
    where
        R: std::default::Default,
    {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [EdgeWorkers::list_edge_worker_ids][crate::client::EdgeWorkers::list_edge_worker_ids] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_edgeworkers_v1::builder;
    /// use builder::edge_workers::ListEdgeWorkerIds;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListEdgeWorkerIds {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type ListEdgeWorkerIds = RequestBuilder<crate::model::ListEdgeWorkerIdsRequest>;

    impl ListEdgeWorkerIds {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListEdgeWorkerIdsResponse> {
            (*self.stub)
                .list_edge_worker_ids(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [EdgeWorkers::get_edge_worker_id][crate::client::EdgeWorkers::get_edge_worker_id] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_edgeworkers_v1::builder;
    /// use builder::edge_workers::GetEdgeWorkerId;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetEdgeWorkerId {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type GetEdgeWorkerId = RequestBuilder<crate::model::GetEdgeWorkerIdRequest>;

    impl GetEdgeWorkerId {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::EdgeWorkerId> {
            (*self.stub)
                .get_edge_worker_id(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [EdgeWorkers::create_edge_worker_id][crate::client::EdgeWorkers::create_edge_worker_id] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_edgeworkers_v1::builder;
    /// use builder::edge_workers::CreateEdgeWorkerId;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateEdgeWorkerId {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type CreateEdgeWorkerId = RequestBuilder<crate::model::CreateEdgeWorkerIdRequest>;

    impl CreateEdgeWorkerId {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::EdgeWorkerId> {
            (*self.stub)
                .create_edge_worker_id(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [EdgeWorkers::delete_edge_worker_id][crate::client::EdgeWorkers::delete_edge_worker_id] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_edgeworkers_v1::builder;
    /// use builder::edge_workers::DeleteEdgeWorkerId;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteEdgeWorkerId {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type DeleteEdgeWorkerId = RequestBuilder<crate::model::DeleteEdgeWorkerIdRequest>;

    impl DeleteEdgeWorkerId {
        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            (*self.stub)
                .delete_edge_worker_id(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }
}
