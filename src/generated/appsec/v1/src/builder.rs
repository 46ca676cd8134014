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

pub mod appsec {
    use crate::Result;
    use std::sync::Arc;

    /// A builder for [Appsec][crate::client::Appsec].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use edgegrid_appsec_v1::*;
    /// # use builder::appsec::ClientBuilder;
    /// # use client::Appsec;
    /// let builder : ClientBuilder = Appsec::builder();
    /// let client = builder
    ///     .with_endpoint("https://akab-test.luna.akamaiapis.net")
    ///     .with_credentials(auth::credentials::anonymous::Builder::new().build())
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::Appsec;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Appsec;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::Appsec] request builders.
    #[derive(Clone, Debug)]
    pub struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn crate::stub::dynamic::Appsec>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::Appsec>) -> Self {
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

    /// The request builder for [Appsec::get_eval_rules][crate::client::Appsec::get_eval_rules] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_appsec_v1::builder;
    /// use builder::appsec::GetEvalRules;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetEvalRules {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type GetEvalRules = RequestBuilder<crate::model::GetEvalRulesRequest>;

    impl GetEvalRules {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::GetEvalRulesResponse> {
            (*self.stub)
                .get_eval_rules(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Appsec::get_eval_rule][crate::client::Appsec::get_eval_rule] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_appsec_v1::builder;
    /// use builder::appsec::GetEvalRule;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetEvalRule {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type GetEvalRule = RequestBuilder<crate::model::GetEvalRuleRequest>;

    impl GetEvalRule {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::GetEvalRuleResponse> {
            (*self.stub)
                .get_eval_rule(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Appsec::update_eval_rule][crate::client::Appsec::update_eval_rule] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_appsec_v1::builder;
    /// use builder::appsec::UpdateEvalRule;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateEvalRule {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type UpdateEvalRule = RequestBuilder<crate::model::UpdateEvalRuleRequest>;

    impl UpdateEvalRule {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::UpdateEvalRuleResponse> {
            (*self.stub)
                .update_eval_rule(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Appsec::get_eval_groups][crate::client::Appsec::get_eval_groups] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_appsec_v1::builder;
    /// use builder::appsec::GetEvalGroups;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetEvalGroups {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type GetEvalGroups = RequestBuilder<crate::model::GetEvalGroupsRequest>;

    impl GetEvalGroups {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::GetEvalGroupsResponse> {
            (*self.stub)
                .get_eval_groups(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Appsec::get_eval_group][crate::client::Appsec::get_eval_group] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_appsec_v1::builder;
    /// use builder::appsec::GetEvalGroup;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetEvalGroup {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type GetEvalGroup = RequestBuilder<crate::model::GetEvalGroupRequest>;

    impl GetEvalGroup {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::GetEvalGroupResponse> {
            (*self.stub)
                .get_eval_group(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Appsec::update_eval_group][crate::client::Appsec::update_eval_group] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_appsec_v1::builder;
    /// use builder::appsec::UpdateEvalGroup;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateEvalGroup {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type UpdateEvalGroup = RequestBuilder<crate::model::UpdateEvalGroupRequest>;

    impl UpdateEvalGroup {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::UpdateEvalGroupResponse> {
            (*self.stub)
                .update_eval_group(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Appsec::get_ip_geo_protections][crate::client::Appsec::get_ip_geo_protections] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_appsec_v1::builder;
    /// use builder::appsec::GetIpGeoProtections;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetIpGeoProtections {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type GetIpGeoProtections = RequestBuilder<crate::model::GetIpGeoProtectionsRequest>;

    impl GetIpGeoProtections {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::GetIpGeoProtectionsResponse> {
            (*self.stub)
                .get_ip_geo_protections(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Appsec::get_ip_geo_protection][crate::client::Appsec::get_ip_geo_protection] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_appsec_v1::builder;
    /// use builder::appsec::GetIpGeoProtection;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetIpGeoProtection {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type GetIpGeoProtection = RequestBuilder<crate::model::GetIpGeoProtectionRequest>;

    impl GetIpGeoProtection {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::GetIpGeoProtectionResponse> {
            (*self.stub)
                .get_ip_geo_protection(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Appsec::update_ip_geo_protection][crate::client::Appsec::update_ip_geo_protection] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_appsec_v1::builder;
    /// use builder::appsec::UpdateIpGeoProtection;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateIpGeoProtection {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type UpdateIpGeoProtection = RequestBuilder<crate::model::UpdateIpGeoProtectionRequest>;

    impl UpdateIpGeoProtection {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::UpdateIpGeoProtectionResponse> {
            (*self.stub)
                .update_ip_geo_protection(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Appsec::get_reputation_profile_actions][crate::client::Appsec::get_reputation_profile_actions] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_appsec_v1::builder;
    /// use builder::appsec::GetReputationProfileActions;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetReputationProfileActions {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type GetReputationProfileActions =
        RequestBuilder<crate::model::GetReputationProfileActionsRequest>;

    impl GetReputationProfileActions {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::GetReputationProfileActionsResponse> {
            (*self.stub)
                .get_reputation_profile_actions(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Appsec::get_reputation_profile_action][crate::client::Appsec::get_reputation_profile_action] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_appsec_v1::builder;
    /// use builder::appsec::GetReputationProfileAction;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetReputationProfileAction {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type GetReputationProfileAction =
        RequestBuilder<crate::model::GetReputationProfileActionRequest>;

    impl GetReputationProfileAction {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::GetReputationProfileActionResponse> {
            (*self.stub)
                .get_reputation_profile_action(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Appsec::update_reputation_profile_action][crate::client::Appsec::update_reputation_profile_action] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_appsec_v1::builder;
    /// use builder::appsec::UpdateReputationProfileAction;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateReputationProfileAction {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type UpdateReputationProfileAction =
        RequestBuilder<crate::model::UpdateReputationProfileActionRequest>;

    impl UpdateReputationProfileAction {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::UpdateReputationProfileActionResponse> {
            (*self.stub)
                .update_reputation_profile_action(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Appsec::get_api_hostname_coverage][crate::client::Appsec::get_api_hostname_coverage] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_appsec_v1::builder;
    /// use builder::appsec::GetApiHostnameCoverage;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetApiHostnameCoverage {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type GetApiHostnameCoverage = RequestBuilder<crate::model::GetApiHostnameCoverageRequest>;

    impl GetApiHostnameCoverage {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::GetApiHostnameCoverageResponse> {
            (*self.stub)
                .get_api_hostname_coverage(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }
}
