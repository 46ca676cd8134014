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

pub mod policies {
    use crate::Result;
    use std::sync::Arc;

    /// A builder for [Policies][crate::client::Policies].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use edgegrid_imaging_v2::*;
    /// # use builder::policies::ClientBuilder;
    /// # use client::Policies;
    /// let builder : ClientBuilder = Policies::builder();
    /// let client = builder
    ///     .with_endpoint("https://akab-test.luna.akamaiapis.net")
    ///     .with_credentials(auth::credentials::anonymous::Builder::new().build())
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::Policies;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Policies;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::Policies] request builders.
    #[derive(Clone, Debug)]
    pub struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn crate::stub::dynamic::Policies>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::Policies>) -> Self {
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

    /// The request builder for [Policies::list_policies][crate::client::Policies::list_policies] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_imaging_v2::builder;
    /// use builder::policies::ListPolicies;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListPolicies {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type ListPolicies = RequestBuilder<crate::model::ListPoliciesRequest>;

    impl ListPolicies {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListPoliciesResponse> {
            (*self.stub)
                .list_policies(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Policies::get_policy][crate::client::Policies::get_policy] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_imaging_v2::builder;
    /// use builder::policies::GetPolicy;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetPolicy {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type GetPolicy = RequestBuilder<crate::model::GetPolicyRequest>;

    impl GetPolicy {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::PolicyOutput> {
            (*self.stub)
                .get_policy(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Policies::upsert_policy][crate::client::Policies::upsert_policy] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_imaging_v2::builder;
    /// use builder::policies::UpsertPolicy;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpsertPolicy {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type UpsertPolicy = RequestBuilder<crate::model::UpsertPolicyRequest>;

    impl UpsertPolicy {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::PolicyResponse> {
            (*self.stub)
                .upsert_policy(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Policies::delete_policy][crate::client::Policies::delete_policy] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_imaging_v2::builder;
    /// use builder::policies::DeletePolicy;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeletePolicy {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type DeletePolicy = RequestBuilder<crate::model::DeletePolicyRequest>;

    impl DeletePolicy {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::PolicyResponse> {
            (*self.stub)
                .delete_policy(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Policies::get_policy_history][crate::client::Policies::get_policy_history] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_imaging_v2::builder;
    /// use builder::policies::GetPolicyHistory;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetPolicyHistory {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type GetPolicyHistory = RequestBuilder<crate::model::GetPolicyHistoryRequest>;

    impl GetPolicyHistory {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::GetPolicyHistoryResponse> {
            (*self.stub)
                .get_policy_history(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Policies::rollback_policy][crate::client::Policies::rollback_policy] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_imaging_v2::builder;
    /// use builder::policies::RollbackPolicy;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> RollbackPolicy {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type RollbackPolicy = RequestBuilder<crate::model::RollbackPolicyRequest>;

    impl RollbackPolicy {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::PolicyResponse> {
            (*self.stub)
                .rollback_policy(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }
}
