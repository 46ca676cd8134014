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

/// Implements a client for the Certificate Provisioning System API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use edgegrid_cps_v2::client::Cps;
/// let client = Cps::builder().build().await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `Cps` use the `with_*` methods in the type returned
/// by [builder()][Cps::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client sends requests to the host
///   in the EdgeGrid credentials. Applications using a proxy, or testing
///   against a local server, may want to override this default.
/// * [with_credentials()]: by default this client loads the credentials from
///   the environment, or from the `default` section of `~/.edgerc`.
///   Applications with multiple accounts may need to override this default.
///
/// [with_endpoint()]: super::builder::cps::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::cps::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `Cps` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `Cps` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Cps {
    inner: std::sync::Arc<dyn super::stub::dynamic::Cps>,
}

impl Cps {
    /// Returns a builder for [Cps].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use edgegrid_cps_v2::client::Cps;
    /// let client = Cps::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::cps::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::cps::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Cps + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = super::transport::Cps::new(config).await?;
        Ok(Self {
            inner: std::sync::Arc::new(inner),
        })
    }

    /// Lists the certificate enrollments of a contract.
    ///
    /// This operation and the other enrollment operations form the enrollments
    /// group of the service.
    pub fn list_enrollments(
        &self,
        req: crate::model::ListEnrollmentsRequest,
    ) -> super::builder::cps::ListEnrollments {
        super::builder::cps::ListEnrollments::new(self.inner.clone()).with_request(req)
    }

    /// Returns a certificate enrollment.
    pub fn get_enrollment(
        &self,
        req: crate::model::GetEnrollmentRequest,
    ) -> super::builder::cps::GetEnrollment {
        super::builder::cps::GetEnrollment::new(self.inner.clone()).with_request(req)
    }

    /// Removes a certificate enrollment.
    ///
    /// The service may accept the request and remove the certificate from the
    /// network later. The response lists the changes created to do so, use
    /// [get_change_status][Cps::get_change_status] to track them.
    pub fn remove_enrollment(
        &self,
        req: crate::model::RemoveEnrollmentRequest,
    ) -> super::builder::cps::RemoveEnrollment {
        super::builder::cps::RemoveEnrollment::new(self.inner.clone()).with_request(req)
    }

    /// Returns the status of a change to an enrollment.
    ///
    /// # Example
    /// ```
    /// # use edgegrid_cps_v2::client::Cps;
    /// # use edgegrid_cps_v2::model::GetChangeStatusRequest;
    /// async fn example(client: &Cps) -> gax::Result<()> {
    ///     let change = client
    ///         .get_change_status(
    ///             GetChangeStatusRequest::new()
    ///                 .set_enrollment_id(10002)
    ///                 .set_change_id(10003),
    ///         )
    ///         .send()
    ///         .await?;
    ///     if change.requires_input() {
    ///         println!("the change is waiting for input: {:?}", change.allowed_input);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn get_change_status(
        &self,
        req: crate::model::GetChangeStatusRequest,
    ) -> super::builder::cps::GetChangeStatus {
        super::builder::cps::GetChangeStatus::new(self.inner.clone()).with_request(req)
    }

    /// Returns the domain validation challenges of a change.
    ///
    /// Use this operation when the change waits for the
    /// `lets-encrypt-challenges` input. Once every challenge is in place call
    /// [acknowledge_dv_challenges][Cps::acknowledge_dv_challenges].
    pub fn get_change_lets_encrypt_challenges(
        &self,
        req: crate::model::GetChangeLetsEncryptChallengesRequest,
    ) -> super::builder::cps::GetChangeLetsEncryptChallenges {
        super::builder::cps::GetChangeLetsEncryptChallenges::new(self.inner.clone())
            .with_request(req)
    }

    /// Acknowledges the domain validation challenges of a change.
    ///
    /// # Example
    /// ```
    /// # use edgegrid_cps_v2::client::Cps;
    /// # use edgegrid_cps_v2::model::{ACKNOWLEDGE, AcknowledgeDvChallengesRequest};
    /// async fn example(client: &Cps) -> gax::Result<()> {
    ///     let response = client
    ///         .acknowledge_dv_challenges(
    ///             AcknowledgeDvChallengesRequest::new()
    ///                 .set_enrollment_id(10002)
    ///                 .set_change_id(10003)
    ///                 .set_acknowledgement(ACKNOWLEDGE),
    ///         )
    ///         .send()
    ///         .await?;
    ///     println!("acknowledged change {:?}", response.change_id());
    ///     Ok(())
    /// }
    /// ```
    pub fn acknowledge_dv_challenges(
        &self,
        req: crate::model::AcknowledgeDvChallengesRequest,
    ) -> super::builder::cps::AcknowledgeDvChallenges {
        super::builder::cps::AcknowledgeDvChallenges::new(self.inner.clone()).with_request(req)
    }

    /// Returns the warnings found before the certificate is requested.
    ///
    /// Use this operation when the change waits for the
    /// `pre-verification-warnings` input.
    pub fn get_change_pre_verification_warnings(
        &self,
        req: crate::model::GetChangePreVerificationWarningsRequest,
    ) -> super::builder::cps::GetChangePreVerificationWarnings {
        super::builder::cps::GetChangePreVerificationWarnings::new(self.inner.clone())
            .with_request(req)
    }

    /// Acknowledges the pre-verification warnings of a change.
    ///
    /// Denying the warnings cancels the change.
    pub fn acknowledge_pre_verification_warnings(
        &self,
        req: crate::model::AcknowledgePreVerificationWarningsRequest,
    ) -> super::builder::cps::AcknowledgePreVerificationWarnings {
        super::builder::cps::AcknowledgePreVerificationWarnings::new(self.inner.clone())
            .with_request(req)
    }
}
