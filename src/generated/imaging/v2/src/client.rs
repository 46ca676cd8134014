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

/// Implements a client for the Image and Video Manager API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use edgegrid_imaging_v2::client::Policies;
/// let client = Policies::builder().build().await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `Policies` use the `with_*` methods in the type returned
/// by [builder()][Policies::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client sends requests to the host
///   in the EdgeGrid credentials. Applications using a proxy, or testing
///   against a local server, may want to override this default.
/// * [with_credentials()]: by default this client loads the credentials from
///   the environment, or from the `default` section of `~/.edgerc`.
///   Applications with multiple accounts may need to override this default.
///
/// [with_endpoint()]: super::builder::policies::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::policies::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `Policies` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `Policies` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Policies {
    inner: std::sync::Arc<dyn super::stub::dynamic::Policies>,
}

impl Policies {
    /// Returns a builder for [Policies].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use edgegrid_imaging_v2::client::Policies;
    /// let client = Policies::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::policies::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::policies::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Policies + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = super::transport::Policies::new(config).await?;
        Ok(Self {
            inner: std::sync::Arc::new(inner),
        })
    }

    /// Lists the policies of a policy set.
    pub fn list_policies(
        &self,
        req: crate::model::ListPoliciesRequest,
    ) -> super::builder::policies::ListPolicies {
        super::builder::policies::ListPolicies::new(self.inner.clone()).with_request(req)
    }

    /// Returns a policy.
    ///
    /// The result is either an image or a video policy, depending on the policy
    /// set.
    ///
    /// # Example
    /// ```
    /// # use edgegrid_imaging_v2::client::Policies;
    /// # use edgegrid_imaging_v2::model::{GetPolicyRequest, NETWORK_STAGING};
    /// async fn example(client: &Policies) -> gax::Result<()> {
    ///     let policy = client
    ///         .get_policy(
    ///             GetPolicyRequest::new()
    ///                 .set_policy_id("thumbnails")
    ///                 .set_network(NETWORK_STAGING)
    ///                 .set_contract_id("3-WNKXX1")
    ///                 .set_policy_set_id("570f9090-5dbe-11ec-8a0a-71665789c1d8"),
    ///         )
    ///         .send()
    ///         .await?;
    ///     if let Some(video) = policy.video() {
    ///         println!("video policy {} at version {}", video.id, video.version);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn get_policy(
        &self,
        req: crate::model::GetPolicyRequest,
    ) -> super::builder::policies::GetPolicy {
        super::builder::policies::GetPolicy::new(self.inner.clone()).with_request(req)
    }

    /// Creates or updates a policy.
    ///
    /// The service returns `201 Created` for new policies and `200 OK` for
    /// updates, both are successful responses.
    pub fn upsert_policy(
        &self,
        req: crate::model::UpsertPolicyRequest,
    ) -> super::builder::policies::UpsertPolicy {
        super::builder::policies::UpsertPolicy::new(self.inner.clone()).with_request(req)
    }

    /// Deletes a policy.
    pub fn delete_policy(
        &self,
        req: crate::model::DeletePolicyRequest,
    ) -> super::builder::policies::DeletePolicy {
        super::builder::policies::DeletePolicy::new(self.inner.clone()).with_request(req)
    }

    /// Lists the changes made to a policy.
    pub fn get_policy_history(
        &self,
        req: crate::model::GetPolicyHistoryRequest,
    ) -> super::builder::policies::GetPolicyHistory {
        super::builder::policies::GetPolicyHistory::new(self.inner.clone()).with_request(req)
    }

    /// Restores the previous version of a policy.
    pub fn rollback_policy(
        &self,
        req: crate::model::RollbackPolicyRequest,
    ) -> super::builder::policies::RollbackPolicy {
        super::builder::policies::RollbackPolicy::new(self.inner.clone()).with_request(req)
    }
}
