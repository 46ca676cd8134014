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

/// Implements a client for the Application Security API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use edgegrid_appsec_v1::client::Appsec;
/// let client = Appsec::builder().build().await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `Appsec` use the `with_*` methods in the type returned
/// by [builder()][Appsec::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client sends requests to the host
///   in the EdgeGrid credentials. Applications using a proxy, or testing
///   against a local server, may want to override this default.
/// * [with_credentials()]: by default this client loads the credentials from
///   the environment, or from the `default` section of `~/.edgerc`.
///   Applications with multiple accounts may need to override this default.
///
/// [with_endpoint()]: super::builder::appsec::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::appsec::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `Appsec` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `Appsec` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Appsec {
    inner: std::sync::Arc<dyn super::stub::dynamic::Appsec>,
}

impl Appsec {
    /// Returns a builder for [Appsec].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use edgegrid_appsec_v1::client::Appsec;
    /// let client = Appsec::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::appsec::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::appsec::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Appsec + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = super::transport::Appsec::new(config).await?;
        Ok(Self {
            inner: std::sync::Arc::new(inner),
        })
    }

    /// Lists the rules available for evaluation and their actions.
    ///
    /// When [rule_id][crate::model::GetEvalRulesRequest::rule_id] is set, the
    /// response only contains that rule.
    pub fn get_eval_rules(
        &self,
        req: crate::model::GetEvalRulesRequest,
    ) -> super::builder::appsec::GetEvalRules {
        super::builder::appsec::GetEvalRules::new(self.inner.clone()).with_request(req)
    }

    /// Returns the action and the condition exception of a rule in evaluation mode.
    pub fn get_eval_rule(
        &self,
        req: crate::model::GetEvalRuleRequest,
    ) -> super::builder::appsec::GetEvalRule {
        super::builder::appsec::GetEvalRule::new(self.inner.clone()).with_request(req)
    }

    /// Changes the action and the condition exception of a rule in evaluation mode.
    ///
    /// # Example
    /// ```
    /// # use edgegrid_appsec_v1::client::Appsec;
    /// # use edgegrid_appsec_v1::model::UpdateEvalRuleRequest;
    /// async fn example(client: &Appsec) -> gax::Result<()> {
    ///     let updated = client
    ///         .update_eval_rule(
    ///             UpdateEvalRuleRequest::new()
    ///                 .set_config_id(43253)
    ///                 .set_version(15)
    ///                 .set_policy_id("AAAA_81230")
    ///                 .set_rule_id(699989)
    ///                 .set_action("deny"),
    ///         )
    ///         .send()
    ///         .await?;
    ///     println!("new action is {}", updated.action);
    ///     Ok(())
    /// }
    /// ```
    pub fn update_eval_rule(
        &self,
        req: crate::model::UpdateEvalRuleRequest,
    ) -> super::builder::appsec::UpdateEvalRule {
        super::builder::appsec::UpdateEvalRule::new(self.inner.clone()).with_request(req)
    }

    /// Lists the attack groups available for evaluation and their actions.
    ///
    /// When [group][crate::model::GetEvalGroupsRequest::group] is set, the response
    /// only contains that attack group.
    pub fn get_eval_groups(
        &self,
        req: crate::model::GetEvalGroupsRequest,
    ) -> super::builder::appsec::GetEvalGroups {
        super::builder::appsec::GetEvalGroups::new(self.inner.clone()).with_request(req)
    }

    /// Returns the action and the condition exception of an attack group in evaluation mode.
    pub fn get_eval_group(
        &self,
        req: crate::model::GetEvalGroupRequest,
    ) -> super::builder::appsec::GetEvalGroup {
        super::builder::appsec::GetEvalGroup::new(self.inner.clone()).with_request(req)
    }

    /// Changes the action and the condition exception of an attack group in evaluation mode.
    pub fn update_eval_group(
        &self,
        req: crate::model::UpdateEvalGroupRequest,
    ) -> super::builder::appsec::UpdateEvalGroup {
        super::builder::appsec::UpdateEvalGroup::new(self.inner.clone()).with_request(req)
    }

    /// Lists the protections of a security policy.
    pub fn get_ip_geo_protections(
        &self,
        req: crate::model::GetIpGeoProtectionsRequest,
    ) -> super::builder::appsec::GetIpGeoProtections {
        super::builder::appsec::GetIpGeoProtections::new(self.inner.clone()).with_request(req)
    }

    /// Returns the protections of a security policy, including the IP/Geo firewall.
    pub fn get_ip_geo_protection(
        &self,
        req: crate::model::GetIpGeoProtectionRequest,
    ) -> super::builder::appsec::GetIpGeoProtection {
        super::builder::appsec::GetIpGeoProtection::new(self.inner.clone()).with_request(req)
    }

    /// Enables or disables the IP/Geo firewall of a security policy.
    pub fn update_ip_geo_protection(
        &self,
        req: crate::model::UpdateIpGeoProtectionRequest,
    ) -> super::builder::appsec::UpdateIpGeoProtection {
        super::builder::appsec::UpdateIpGeoProtection::new(self.inner.clone()).with_request(req)
    }

    /// Lists the reputation profiles of a security policy and their actions.
    pub fn get_reputation_profile_actions(
        &self,
        req: crate::model::GetReputationProfileActionsRequest,
    ) -> super::builder::appsec::GetReputationProfileActions {
        super::builder::appsec::GetReputationProfileActions::new(self.inner.clone())
            .with_request(req)
    }

    /// Returns the action of a reputation profile.
    pub fn get_reputation_profile_action(
        &self,
        req: crate::model::GetReputationProfileActionRequest,
    ) -> super::builder::appsec::GetReputationProfileAction {
        super::builder::appsec::GetReputationProfileAction::new(self.inner.clone())
            .with_request(req)
    }

    /// Changes the action of a reputation profile.
    pub fn update_reputation_profile_action(
        &self,
        req: crate::model::UpdateReputationProfileActionRequest,
    ) -> super::builder::appsec::UpdateReputationProfileAction {
        super::builder::appsec::UpdateReputationProfileAction::new(self.inner.clone())
            .with_request(req)
    }

    /// Returns the protection status of the hostnames in the account.
    ///
    /// This operation does not validate its request. Any field set in the request
    /// narrows down the returned hostnames.
    pub fn get_api_hostname_coverage(
        &self,
        req: crate::model::GetApiHostnameCoverageRequest,
    ) -> super::builder::appsec::GetApiHostnameCoverage {
        super::builder::appsec::GetApiHostnameCoverage::new(self.inner.clone()).with_request(req)
    }
}
