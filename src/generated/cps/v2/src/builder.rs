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

pub mod cps {
    use crate::Result;
    use std::sync::Arc;

    /// A builder for [Cps][crate::client::Cps].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use edgegrid_cps_v2::*;
    /// # use builder::cps::ClientBuilder;
    /// # use client::Cps;
    /// let builder : ClientBuilder = Cps::builder();
    /// let client = builder
    ///     .with_endpoint("https://akab-test.luna.akamaiapis.net")
    ///     .with_credentials(auth::credentials::anonymous::Builder::new().build())
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::Cps;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Cps;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::Cps] request builders.
    #[derive(Clone, Debug)]
    pub struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn crate::stub::dynamic::Cps>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::Cps>) -> Self {
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

    /// The request builder for [Cps::list_enrollments][crate::client::Cps::list_enrollments] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_cps_v2::builder;
    /// use builder::cps::ListEnrollments;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListEnrollments {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type ListEnrollments = RequestBuilder<crate::model::ListEnrollmentsRequest>;

    impl ListEnrollments {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListEnrollmentsResponse> {
            (*self.stub)
                .list_enrollments(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Cps::get_enrollment][crate::client::Cps::get_enrollment] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_cps_v2::builder;
    /// use builder::cps::GetEnrollment;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetEnrollment {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type GetEnrollment = RequestBuilder<crate::model::GetEnrollmentRequest>;

    impl GetEnrollment {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Enrollment> {
            (*self.stub)
                .get_enrollment(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Cps::remove_enrollment][crate::client::Cps::remove_enrollment] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_cps_v2::builder;
    /// use builder::cps::RemoveEnrollment;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> RemoveEnrollment {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type RemoveEnrollment = RequestBuilder<crate::model::RemoveEnrollmentRequest>;

    impl RemoveEnrollment {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::RemoveEnrollmentResponse> {
            (*self.stub)
                .remove_enrollment(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Cps::get_change_status][crate::client::Cps::get_change_status] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_cps_v2::builder;
    /// use builder::cps::GetChangeStatus;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetChangeStatus {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type GetChangeStatus = RequestBuilder<crate::model::GetChangeStatusRequest>;

    impl GetChangeStatus {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Change> {
            (*self.stub)
                .get_change_status(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Cps::get_change_lets_encrypt_challenges][crate::client::Cps::get_change_lets_encrypt_challenges] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_cps_v2::builder;
    /// use builder::cps::GetChangeLetsEncryptChallenges;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetChangeLetsEncryptChallenges {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type GetChangeLetsEncryptChallenges =
        RequestBuilder<crate::model::GetChangeLetsEncryptChallengesRequest>;

    impl GetChangeLetsEncryptChallenges {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DvChallenges> {
            (*self.stub)
                .get_change_lets_encrypt_challenges(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Cps::acknowledge_dv_challenges][crate::client::Cps::acknowledge_dv_challenges] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_cps_v2::builder;
    /// use builder::cps::AcknowledgeDvChallenges;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> AcknowledgeDvChallenges {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type AcknowledgeDvChallenges = RequestBuilder<crate::model::AcknowledgeDvChallengesRequest>;

    impl AcknowledgeDvChallenges {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AcknowledgementResponse> {
            (*self.stub)
                .acknowledge_dv_challenges(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Cps::get_change_pre_verification_warnings][crate::client::Cps::get_change_pre_verification_warnings] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_cps_v2::builder;
    /// use builder::cps::GetChangePreVerificationWarnings;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetChangePreVerificationWarnings {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type GetChangePreVerificationWarnings =
        RequestBuilder<crate::model::GetChangePreVerificationWarningsRequest>;

    impl GetChangePreVerificationWarnings {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::PreVerificationWarnings> {
            (*self.stub)
                .get_change_pre_verification_warnings(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    /// The request builder for [Cps::acknowledge_pre_verification_warnings][crate::client::Cps::acknowledge_pre_verification_warnings] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use edgegrid_cps_v2::builder;
    /// use builder::cps::AcknowledgePreVerificationWarnings;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> AcknowledgePreVerificationWarnings {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    pub type AcknowledgePreVerificationWarnings =
        RequestBuilder<crate::model::AcknowledgePreVerificationWarningsRequest>;

    impl AcknowledgePreVerificationWarnings {
        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AcknowledgementResponse> {
            (*self.stub)
                .acknowledge_pre_verification_warnings(self.request, self.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }
}
