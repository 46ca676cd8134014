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


use gax::validation::{self, Errors};
use serde::{Deserialize, Serialize};

// All the security policy resources are nested under a configuration version.
fn policy_errors(config_id: i64, version: i64, policy_id: &str) -> Errors {
    Errors::new()
        .field("ConfigID", validation::required(&config_id))
        .field("Version", validation::required(&version))
        .field("PolicyID", validation::path_segment(policy_id))
}

/// The condition and exception details of a rule or attack group.
///
/// Conditions limit when the rule (or group) applies, exceptions list the
/// request elements excluded from evaluation.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RuleConditionException {
    pub conditions: Option<Vec<RuleCondition>>,
    pub exception: Option<RuleException>,
}

/// A single condition in a [RuleConditionException].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RuleCondition {
    /// The condition type, e.g. `extensionMatch` or `requestHeaderMatch`.
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub extensions: Option<Vec<String>>,
    pub filenames: Option<Vec<String>>,
    pub hosts: Option<Vec<String>>,
    pub ips: Option<Vec<String>>,
    pub methods: Option<Vec<String>>,
    pub paths: Option<Vec<String>>,
    pub header: Option<String>,
    pub case_sensitive: Option<bool>,
    pub name: Option<String>,
    pub name_case: Option<bool>,
    pub positive_match: Option<bool>,
    pub value: Option<String>,
    pub wildcard: Option<bool>,
    pub value_case: Option<bool>,
    pub value_wildcard: Option<bool>,
    pub use_headers: Option<bool>,
}

/// The request elements excluded from a rule or attack group.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RuleException {
    pub header_cookie_or_param_values: Option<Vec<String>>,
    pub specific_header_cookie_or_param_names: Option<Vec<SpecificHeaderCookieOrParamNames>>,
    pub specific_header_cookie_or_param_prefix: Option<SpecificHeaderCookieOrParamPrefix>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SpecificHeaderCookieOrParamNames {
    pub names: Vec<String>,
    pub selector: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SpecificHeaderCookieOrParamPrefix {
    pub prefix: String,
    pub selector: String,
}

// The body shared by the `action-condition-exception` updates.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ActionConditionException<'a> {
    pub action: &'a str,
    pub condition_exception: Option<&'a serde_json::Value>,
}

impl<'a> ActionConditionException<'a> {
    pub(crate) fn new(action: &'a str, condition_exception: &'a Option<serde_json::Value>) -> Self {
        Self {
            action,
            condition_exception: condition_exception.as_ref().filter(|v| !v.is_null()),
        }
    }
}

/// The request message for [Appsec::get_eval_rules][crate::client::Appsec::get_eval_rules].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetEvalRulesRequest {
    /// The security configuration.
    pub config_id: i64,
    /// The version of the security configuration.
    pub version: i64,
    /// The security policy.
    pub policy_id: String,
    /// If not zero, only the rule with this id is returned.
    pub rule_id: i64,
}

impl GetEvalRulesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [config_id][crate::model::GetEvalRulesRequest::config_id].
    pub fn set_config_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }

    /// Sets the value of [version][crate::model::GetEvalRulesRequest::version].
    pub fn set_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [policy_id][crate::model::GetEvalRulesRequest::policy_id].
    pub fn set_policy_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_id = v.into();
        self
    }

    /// Sets the value of [rule_id][crate::model::GetEvalRulesRequest::rule_id].
    pub fn set_rule_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.rule_id = v.into();
        self
    }

    /// Checks the required fields.
    pub fn validate(&self) -> Result<(), Errors> {
        policy_errors(self.config_id, self.version, &self.policy_id).into_result()
    }
}

/// The response message for [Appsec::get_eval_rules][crate::client::Appsec::get_eval_rules].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetEvalRulesResponse {
    #[serde(rename = "evalRuleActions", skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<EvalRuleAction>,
}

/// The action of a rule in evaluation mode.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EvalRuleAction {
    pub id: i64,
    pub action: String,
    pub condition_exception: Option<RuleConditionException>,
}

/// The request message for [Appsec::get_eval_rule][crate::client::Appsec::get_eval_rule].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetEvalRuleRequest {
    pub config_id: i64,
    pub version: i64,
    pub policy_id: String,
    pub rule_id: i64,
}

impl GetEvalRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [config_id][crate::model::GetEvalRuleRequest::config_id].
    pub fn set_config_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }

    /// Sets the value of [version][crate::model::GetEvalRuleRequest::version].
    pub fn set_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [policy_id][crate::model::GetEvalRuleRequest::policy_id].
    pub fn set_policy_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_id = v.into();
        self
    }

    /// Sets the value of [rule_id][crate::model::GetEvalRuleRequest::rule_id].
    pub fn set_rule_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.rule_id = v.into();
        self
    }

    /// Checks the required fields.
    pub fn validate(&self) -> Result<(), Errors> {
        policy_errors(self.config_id, self.version, &self.policy_id)
            .field("RuleID", validation::required(&self.rule_id))
            .into_result()
    }
}

/// The response message for [Appsec::get_eval_rule][crate::client::Appsec::get_eval_rule].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetEvalRuleResponse {
    pub action: String,
    pub condition_exception: Option<RuleConditionException>,
}

impl GetEvalRuleResponse {
    /// Returns true if the rule has no conditions or exceptions.
    pub fn is_empty_condition_exception(&self) -> bool {
        self.condition_exception.is_none()
    }
}

/// The request message for [Appsec::update_eval_rule][crate::client::Appsec::update_eval_rule].
///
/// The condition exception is sent as-is, omit it (or set it to `null`) to
/// keep only the action.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateEvalRuleRequest {
    pub config_id: i64,
    pub version: i64,
    pub policy_id: String,
    pub rule_id: i64,
    pub action: String,
    pub condition_exception: Option<serde_json::Value>,
}

impl UpdateEvalRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [config_id][crate::model::UpdateEvalRuleRequest::config_id].
    pub fn set_config_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }

    /// Sets the value of [version][crate::model::UpdateEvalRuleRequest::version].
    pub fn set_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [policy_id][crate::model::UpdateEvalRuleRequest::policy_id].
    pub fn set_policy_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_id = v.into();
        self
    }

    /// Sets the value of [rule_id][crate::model::UpdateEvalRuleRequest::rule_id].
    pub fn set_rule_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.rule_id = v.into();
        self
    }

    /// Sets the value of [action][crate::model::UpdateEvalRuleRequest::action].
    pub fn set_action<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.action = v.into();
        self
    }

    /// Sets the value of [condition_exception][crate::model::UpdateEvalRuleRequest::condition_exception].
    pub fn set_condition_exception<T: std::convert::Into<serde_json::Value>>(
        mut self,
        v: T,
    ) -> Self {
        self.condition_exception = std::option::Option::Some(v.into());
        self
    }

    /// Checks the required fields.
    pub fn validate(&self) -> Result<(), Errors> {
        policy_errors(self.config_id, self.version, &self.policy_id)
            .field("RuleID", validation::required(&self.rule_id))
            .into_result()
    }
}

/// The response message for [Appsec::update_eval_rule][crate::client::Appsec::update_eval_rule].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateEvalRuleResponse {
    pub action: String,
    pub condition_exception: Option<RuleConditionException>,
}

/// The request message for [Appsec::get_eval_groups][crate::client::Appsec::get_eval_groups].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetEvalGroupsRequest {
    pub config_id: i64,
    pub version: i64,
    pub policy_id: String,
    /// If not empty, only the attack group with this name is returned.
    pub group: String,
}

impl GetEvalGroupsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [config_id][crate::model::GetEvalGroupsRequest::config_id].
    pub fn set_config_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }

    /// Sets the value of [version][crate::model::GetEvalGroupsRequest::version].
    pub fn set_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [policy_id][crate::model::GetEvalGroupsRequest::policy_id].
    pub fn set_policy_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_id = v.into();
        self
    }

    /// Sets the value of [group][crate::model::GetEvalGroupsRequest::group].
    pub fn set_group<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.group = v.into();
        self
    }

    /// Checks the required fields.
    pub fn validate(&self) -> Result<(), Errors> {
        policy_errors(self.config_id, self.version, &self.policy_id).into_result()
    }
}

/// The response message for [Appsec::get_eval_groups][crate::client::Appsec::get_eval_groups].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetEvalGroupsResponse {
    #[serde(rename = "attackGroupActions", skip_serializing_if = "Vec::is_empty")]
    pub attack_groups: Vec<EvalGroupAction>,
}

/// The action of an attack group in evaluation mode.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EvalGroupAction {
    pub group: String,
    pub action: String,
    pub condition_exception: Option<RuleConditionException>,
}

/// The request message for [Appsec::get_eval_group][crate::client::Appsec::get_eval_group].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetEvalGroupRequest {
    pub config_id: i64,
    pub version: i64,
    pub policy_id: String,
    pub group: String,
}

impl GetEvalGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [config_id][crate::model::GetEvalGroupRequest::config_id].
    pub fn set_config_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }

    /// Sets the value of [version][crate::model::GetEvalGroupRequest::version].
    pub fn set_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [policy_id][crate::model::GetEvalGroupRequest::policy_id].
    pub fn set_policy_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_id = v.into();
        self
    }

    /// Sets the value of [group][crate::model::GetEvalGroupRequest::group].
    pub fn set_group<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.group = v.into();
        self
    }

    /// Checks the required fields.
    pub fn validate(&self) -> Result<(), Errors> {
        policy_errors(self.config_id, self.version, &self.policy_id)
            .field("Group", validation::path_segment(&self.group))
            .into_result()
    }
}

/// The response message for [Appsec::get_eval_group][crate::client::Appsec::get_eval_group].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetEvalGroupResponse {
    pub action: String,
    pub condition_exception: Option<RuleConditionException>,
}

/// The request message for [Appsec::update_eval_group][crate::client::Appsec::update_eval_group].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateEvalGroupRequest {
    pub config_id: i64,
    pub version: i64,
    pub policy_id: String,
    pub group: String,
    pub action: String,
    pub condition_exception: Option<serde_json::Value>,
}

impl UpdateEvalGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [config_id][crate::model::UpdateEvalGroupRequest::config_id].
    pub fn set_config_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }

    /// Sets the value of [version][crate::model::UpdateEvalGroupRequest::version].
    pub fn set_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [policy_id][crate::model::UpdateEvalGroupRequest::policy_id].
    pub fn set_policy_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_id = v.into();
        self
    }

    /// Sets the value of [group][crate::model::UpdateEvalGroupRequest::group].
    pub fn set_group<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.group = v.into();
        self
    }

    /// Sets the value of [action][crate::model::UpdateEvalGroupRequest::action].
    pub fn set_action<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.action = v.into();
        self
    }

    /// Sets the value of [condition_exception][crate::model::UpdateEvalGroupRequest::condition_exception].
    pub fn set_condition_exception<T: std::convert::Into<serde_json::Value>>(
        mut self,
        v: T,
    ) -> Self {
        self.condition_exception = std::option::Option::Some(v.into());
        self
    }

    /// Checks the required fields.
    pub fn validate(&self) -> Result<(), Errors> {
        policy_errors(self.config_id, self.version, &self.policy_id)
            .field("Group", validation::path_segment(&self.group))
            .into_result()
    }
}

/// The response message for [Appsec::update_eval_group][crate::client::Appsec::update_eval_group].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateEvalGroupResponse {
    pub action: String,
    pub condition_exception: Option<RuleConditionException>,
}

/// The protections of a security policy, and whether each is enabled.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProtectionsResponse {
    pub apply_api_constraints: bool,
    pub apply_application_layer_controls: bool,
    pub apply_botman_controls: bool,
    pub apply_network_layer_controls: bool,
    pub apply_rate_controls: bool,
    pub apply_reputation_controls: bool,
    pub apply_slow_post_controls: bool,
}

pub type GetIpGeoProtectionsResponse = ProtectionsResponse;
pub type GetIpGeoProtectionResponse = ProtectionsResponse;
pub type UpdateIpGeoProtectionResponse = ProtectionsResponse;

/// The request message for [Appsec::get_ip_geo_protections][crate::client::Appsec::get_ip_geo_protections].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetIpGeoProtectionsRequest {
    pub config_id: i64,
    pub version: i64,
    pub policy_id: String,
}

impl GetIpGeoProtectionsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [config_id][crate::model::GetIpGeoProtectionsRequest::config_id].
    pub fn set_config_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }

    /// Sets the value of [version][crate::model::GetIpGeoProtectionsRequest::version].
    pub fn set_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [policy_id][crate::model::GetIpGeoProtectionsRequest::policy_id].
    pub fn set_policy_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_id = v.into();
        self
    }

    /// Checks the required fields.
    pub fn validate(&self) -> Result<(), Errors> {
        policy_errors(self.config_id, self.version, &self.policy_id).into_result()
    }
}

/// The request message for [Appsec::get_ip_geo_protection][crate::client::Appsec::get_ip_geo_protection].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetIpGeoProtectionRequest {
    pub config_id: i64,
    pub version: i64,
    pub policy_id: String,
}

impl GetIpGeoProtectionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [config_id][crate::model::GetIpGeoProtectionRequest::config_id].
    pub fn set_config_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }

    /// Sets the value of [version][crate::model::GetIpGeoProtectionRequest::version].
    pub fn set_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [policy_id][crate::model::GetIpGeoProtectionRequest::policy_id].
    pub fn set_policy_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_id = v.into();
        self
    }

    /// Checks the required fields.
    pub fn validate(&self) -> Result<(), Errors> {
        policy_errors(self.config_id, self.version, &self.policy_id).into_result()
    }
}

/// The request message for [Appsec::update_ip_geo_protection][crate::client::Appsec::update_ip_geo_protection].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateIpGeoProtectionRequest {
    #[serde(skip)]
    pub config_id: i64,
    #[serde(skip)]
    pub version: i64,
    #[serde(skip)]
    pub policy_id: String,
    /// Enables (or disables) the IP/Geo firewall of the policy.
    pub apply_network_layer_controls: bool,
}

impl UpdateIpGeoProtectionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [config_id][crate::model::UpdateIpGeoProtectionRequest::config_id].
    pub fn set_config_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }

    /// Sets the value of [version][crate::model::UpdateIpGeoProtectionRequest::version].
    pub fn set_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [policy_id][crate::model::UpdateIpGeoProtectionRequest::policy_id].
    pub fn set_policy_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_id = v.into();
        self
    }

    /// Sets the value of [apply_network_layer_controls][crate::model::UpdateIpGeoProtectionRequest::apply_network_layer_controls].
    pub fn set_apply_network_layer_controls(mut self, v: bool) -> Self {
        self.apply_network_layer_controls = v;
        self
    }

    /// Checks the required fields.
    pub fn validate(&self) -> Result<(), Errors> {
        policy_errors(self.config_id, self.version, &self.policy_id).into_result()
    }
}

/// The request message for [Appsec::get_reputation_profile_actions][crate::client::Appsec::get_reputation_profile_actions].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetReputationProfileActionsRequest {
    pub config_id: i64,
    pub version: i64,
    pub policy_id: String,
}

impl GetReputationProfileActionsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [config_id][crate::model::GetReputationProfileActionsRequest::config_id].
    pub fn set_config_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }

    /// Sets the value of [version][crate::model::GetReputationProfileActionsRequest::version].
    pub fn set_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [policy_id][crate::model::GetReputationProfileActionsRequest::policy_id].
    pub fn set_policy_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_id = v.into();
        self
    }

    /// Checks the required fields.
    pub fn validate(&self) -> Result<(), Errors> {
        policy_errors(self.config_id, self.version, &self.policy_id).into_result()
    }
}

/// The response message for [Appsec::get_reputation_profile_actions][crate::client::Appsec::get_reputation_profile_actions].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetReputationProfileActionsResponse {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reputation_profiles: Vec<ReputationProfileAction>,
}

/// The action taken when a reputation profile matches.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ReputationProfileAction {
    pub id: i64,
    pub action: String,
}

/// The request message for [Appsec::get_reputation_profile_action][crate::client::Appsec::get_reputation_profile_action].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetReputationProfileActionRequest {
    pub config_id: i64,
    pub version: i64,
    pub policy_id: String,
    pub reputation_profile_id: i64,
}

impl GetReputationProfileActionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [config_id][crate::model::GetReputationProfileActionRequest::config_id].
    pub fn set_config_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }

    /// Sets the value of [version][crate::model::GetReputationProfileActionRequest::version].
    pub fn set_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [policy_id][crate::model::GetReputationProfileActionRequest::policy_id].
    pub fn set_policy_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_id = v.into();
        self
    }

    /// Sets the value of [reputation_profile_id][crate::model::GetReputationProfileActionRequest::reputation_profile_id].
    pub fn set_reputation_profile_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.reputation_profile_id = v.into();
        self
    }

    /// Checks the required fields.
    pub fn validate(&self) -> Result<(), Errors> {
        policy_errors(self.config_id, self.version, &self.policy_id)
            .field(
                "ReputationProfileID",
                validation::required(&self.reputation_profile_id),
            )
            .into_result()
    }
}

/// The response message for [Appsec::get_reputation_profile_action][crate::client::Appsec::get_reputation_profile_action].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetReputationProfileActionResponse {
    pub action: String,
}

/// The request message for [Appsec::update_reputation_profile_action][crate::client::Appsec::update_reputation_profile_action].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateReputationProfileActionRequest {
    #[serde(skip)]
    pub config_id: i64,
    #[serde(skip)]
    pub version: i64,
    #[serde(skip)]
    pub policy_id: String,
    #[serde(skip)]
    pub reputation_profile_id: i64,
    /// One of `alert`, `deny`, `none`, or a custom deny action id.
    pub action: String,
}

impl UpdateReputationProfileActionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [config_id][crate::model::UpdateReputationProfileActionRequest::config_id].
    pub fn set_config_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }

    /// Sets the value of [version][crate::model::UpdateReputationProfileActionRequest::version].
    pub fn set_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [policy_id][crate::model::UpdateReputationProfileActionRequest::policy_id].
    pub fn set_policy_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_id = v.into();
        self
    }

    /// Sets the value of [reputation_profile_id][crate::model::UpdateReputationProfileActionRequest::reputation_profile_id].
    pub fn set_reputation_profile_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.reputation_profile_id = v.into();
        self
    }

    /// Sets the value of [action][crate::model::UpdateReputationProfileActionRequest::action].
    pub fn set_action<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.action = v.into();
        self
    }

    /// Checks the required fields.
    pub fn validate(&self) -> Result<(), Errors> {
        policy_errors(self.config_id, self.version, &self.policy_id)
            .field(
                "ReputationProfileID",
                validation::required(&self.reputation_profile_id),
            )
            .into_result()
    }
}

/// The response message for [Appsec::update_reputation_profile_action][crate::client::Appsec::update_reputation_profile_action].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateReputationProfileActionResponse {
    pub action: String,
}

/// The request message for [Appsec::get_api_hostname_coverage][crate::client::Appsec::get_api_hostname_coverage].
///
/// The service always returns the coverage of every hostname. The fields in
/// this request, when set, narrow down the results returned by the client.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetApiHostnameCoverageRequest {
    pub config_id: i64,
    pub version: i64,
    pub hostname: String,
}

impl GetApiHostnameCoverageRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [config_id][crate::model::GetApiHostnameCoverageRequest::config_id].
    pub fn set_config_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }

    /// Sets the value of [version][crate::model::GetApiHostnameCoverageRequest::version].
    pub fn set_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [hostname][crate::model::GetApiHostnameCoverageRequest::hostname].
    pub fn set_hostname<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.hostname = v.into();
        self
    }

    pub(crate) fn matches(&self, coverage: &HostnameCoverage) -> bool {
        let configuration = coverage.configuration.as_ref();
        (self.config_id == 0 || configuration.is_some_and(|c| c.id == self.config_id))
            && (self.version == 0 || configuration.is_some_and(|c| c.version == self.version))
            && (self.hostname.is_empty() || coverage.hostname == self.hostname)
    }
}

/// The response message for [Appsec::get_api_hostname_coverage][crate::client::Appsec::get_api_hostname_coverage].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetApiHostnameCoverageResponse {
    pub hostname_coverage: Vec<HostnameCoverage>,
}

/// The protection status of a hostname.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HostnameCoverage {
    /// The security configuration protecting the hostname, if any.
    pub configuration: Option<CoverageConfiguration>,
    /// One of `covered` or `not_covered`.
    pub status: String,
    pub has_match_target: bool,
    pub hostname: String,
    pub policy_names: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CoverageConfiguration {
    pub id: i64,
    pub name: String,
    pub version: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    #[test]
    fn policy_validation() {
        let err = GetEvalRulesRequest::new().validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "ConfigID: cannot be blank; PolicyID: cannot be blank; Version: cannot be blank."
        );
        let req = GetEvalRulesRequest::new()
            .set_config_id(43253)
            .set_version(15)
            .set_policy_id("AAAA_81230");
        assert_eq!(req.validate(), Ok(()));
    }

    #[test_case("."; "current")]
    #[test_case(".."; "parent")]
    fn dot_segments_are_rejected(segment: &str) {
        let err = GetEvalRulesRequest::new()
            .set_config_id(43253)
            .set_version(15)
            .set_policy_id(segment)
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "PolicyID: cannot be a relative path segment.");

        let err = GetEvalGroupRequest::new()
            .set_config_id(43253)
            .set_version(15)
            .set_policy_id("AAAA_81230")
            .set_group(segment)
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "Group: cannot be a relative path segment.");
    }

    #[test_case(GetEvalRuleRequest::new().validate(), "RuleID")]
    #[test_case(UpdateEvalRuleRequest::new().validate(), "RuleID")]
    #[test_case(GetEvalGroupRequest::new().validate(), "Group")]
    #[test_case(UpdateEvalGroupRequest::new().validate(), "Group")]
    #[test_case(GetReputationProfileActionRequest::new().validate(), "ReputationProfileID")]
    #[test_case(UpdateReputationProfileActionRequest::new().validate(), "ReputationProfileID")]
    fn resource_id_validation(got: Result<(), Errors>, field: &str) {
        let err = got.unwrap_err();
        assert!(err.contains(field), "{err:?}");
        assert!(err.contains("ConfigID"), "{err:?}");
        assert_eq!(err.len(), 4, "{err:?}");
    }

    #[test]
    fn condition_exception_roundtrip() -> TestResult {
        let input = json!({
            "conditions": [{
                "type": "extensionMatch",
                "extensions": ["jpg", "png"],
                "positiveMatch": true,
            }],
            "exception": {
                "headerCookieOrParamValues": ["abc"],
                "specificHeaderCookieOrParamNames": [{"names": ["session"], "selector": "REQUEST_COOKIES"}],
            }
        });
        let got = serde_json::from_value::<RuleConditionException>(input.clone())?;
        let conditions = got.conditions.as_deref().unwrap_or_default();
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].r#type.as_deref(), Some("extensionMatch"));
        assert_eq!(conditions[0].positive_match, Some(true));
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn is_empty_condition_exception() -> TestResult {
        let got = serde_json::from_value::<GetEvalRuleResponse>(json!({"action": "alert"}))?;
        assert!(got.is_empty_condition_exception(), "{got:?}");
        let got = serde_json::from_value::<GetEvalRuleResponse>(json!({
            "action": "alert",
            "conditionException": {"exception": {"headerCookieOrParamValues": ["x"]}},
        }))?;
        assert!(!got.is_empty_condition_exception(), "{got:?}");
        Ok(())
    }

    #[test_case(None, json!({"action": "deny"}))]
    #[test_case(Some(serde_json::Value::Null), json!({"action": "deny"}))]
    #[test_case(Some(json!({"conditions": []})), json!({"action": "deny", "conditionException": {"conditions": []}}))]
    fn action_condition_exception_body(
        input: Option<serde_json::Value>,
        want: serde_json::Value,
    ) -> TestResult {
        let body = ActionConditionException::new("deny", &input);
        assert_eq!(serde_json::to_value(&body)?, want);
        Ok(())
    }

    #[test]
    fn update_ip_geo_protection_body() -> TestResult {
        let req = UpdateIpGeoProtectionRequest::new()
            .set_config_id(43253)
            .set_version(15)
            .set_policy_id("AAAA_81230")
            .set_apply_network_layer_controls(true);
        assert_eq!(
            serde_json::to_value(&req)?,
            json!({"applyNetworkLayerControls": true})
        );
        Ok(())
    }

    #[test]
    fn hostname_coverage_filter() -> TestResult {
        let coverage = serde_json::from_value::<HostnameCoverage>(json!({
            "configuration": {"id": 43253, "name": "site", "version": 15},
            "status": "covered",
            "hasMatchTarget": true,
            "hostname": "www.example.com",
            "policyNames": ["AAAA_81230"],
        }))?;
        let uncovered = serde_json::from_value::<HostnameCoverage>(json!({
            "status": "not_covered",
            "hostname": "api.example.com",
        }))?;
        let all = GetApiHostnameCoverageRequest::new();
        assert!(all.matches(&coverage));
        assert!(all.matches(&uncovered));

        let by_config = GetApiHostnameCoverageRequest::new().set_config_id(43253);
        assert!(by_config.matches(&coverage));
        assert!(!by_config.matches(&uncovered));

        let by_host = GetApiHostnameCoverageRequest::new().set_hostname("api.example.com");
        assert!(!by_host.matches(&coverage));
        assert!(by_host.matches(&uncovered));
        Ok(())
    }
}
