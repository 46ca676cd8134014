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

pub mod config_dns {
    use crate::Result;
    use std::sync::Arc;

    /// A builder for [ConfigDns][crate::client::ConfigDns].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use edgegrid_configdns_v2::*;
    /// # use builder::config_dns::ClientBuilder;
    /// # use client::ConfigDns;
    /// let builder : ClientBuilder = ConfigDns::builder();
    /// let client = builder
    ///     .with_endpoint("https://akab-test.luna.akamaiapis.net")
    ///     .with_credentials(auth::credentials::anonymous::Builder::new().build())
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::ConfigDns;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = ConfigDns;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::ConfigDns] request builders.
    #[derive(Clone, Debug)]
    pub struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn crate::stub::dynamic::ConfigDns>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::ConfigDns>) -> Self {
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

    /// The request builder for [ConfigDns::get_record_list][crate::client::ConfigDns::get_record_list] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_configdns_v2::builder;
    /// use builder::config_dns::GetRecordList;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetRecordList {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type GetRecordList = RequestBuilder<crate::model::GetRecordListRequest>;

    impl GetRecordList {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::RecordSetResponse> {
            (*self.stub)
                .get_record_list(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [ConfigDns::get_record_list_ip][crate::client::ConfigDns::get_record_list_ip] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_configdns_v2::builder;
    /// use builder::config_dns::GetRecordListIp;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetRecordListIp {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type GetRecordListIp = RequestBuilder<crate::model::GetRecordListIpRequest>;

    impl GetRecordListIp {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::GetRecordListIpResponse> {
            (*self.stub)
                .get_record_list_ip(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [ConfigDns::get_record_set][crate::client::ConfigDns::get_record_set] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_configdns_v2::builder;
    /// use builder::config_dns::GetRecordSet;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetRecordSet {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type GetRecordSet = RequestBuilder<crate::model::GetRecordSetRequest>;

    impl GetRecordSet {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::RecordSet> {
            (*self.stub)
                .get_record_set(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [ConfigDns::create_record_set][crate::client::ConfigDns::create_record_set] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_configdns_v2::builder;
    /// use builder::config_dns::CreateRecordSet;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateRecordSet {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type CreateRecordSet = RequestBuilder<crate::model::CreateRecordSetRequest>;

    impl CreateRecordSet {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::RecordSet> {
            (*self.stub)
                .create_record_set(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [ConfigDns::update_record_set][crate::client::ConfigDns::update_record_set] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_configdns_v2::builder;
    /// use builder::config_dns::UpdateRecordSet;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateRecordSet {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type UpdateRecordSet = RequestBuilder<crate::model::UpdateRecordSetRequest>;

    impl UpdateRecordSet {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::RecordSet> {
            (*self.stub)
                .update_record_set(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [ConfigDns::delete_record_set][crate::client::ConfigDns::delete_record_set] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_configdns_v2::builder;
    /// use builder::config_dns::DeleteRecordSet;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteRecordSet {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type DeleteRecordSet = RequestBuilder<crate::model::DeleteRecordSetRequest>;

    impl DeleteRecordSet {
        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            (*self.stub)
                .delete_record_set(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }
}
