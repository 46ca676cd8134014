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

/// The media type of [Cps::list_enrollments][crate::client::Cps::list_enrollments] responses.
pub const ENROLLMENTS_MEDIA_TYPE: &str = "application/vnd.akamai.cps.enrollments.v11+json";
/// The media type of [Cps::get_enrollment][crate::client::Cps::get_enrollment] responses.
pub const ENROLLMENT_MEDIA_TYPE: &str = "application/vnd.akamai.cps.enrollment.v11+json";
/// The media type of [Cps::remove_enrollment][crate::client::Cps::remove_enrollment] responses.
pub const ENROLLMENT_STATUS_MEDIA_TYPE: &str =
    "application/vnd.akamai.cps.enrollment-status.v1+json";
/// The media type of [Cps::get_change_status][crate::client::Cps::get_change_status] responses.
pub const CHANGE_MEDIA_TYPE: &str = "application/vnd.akamai.cps.change.v2+json";
/// The media type of [Cps::get_change_lets_encrypt_challenges][crate::client::Cps::get_change_lets_encrypt_challenges] responses.
pub const DV_CHALLENGES_MEDIA_TYPE: &str = "application/vnd.akamai.cps.dv-challenges.v2+json";
/// The media type of [Cps::get_change_pre_verification_warnings][crate::client::Cps::get_change_pre_verification_warnings] responses.
pub const WARNINGS_MEDIA_TYPE: &str = "application/vnd.akamai.cps.warnings.v1+json";
/// The media type of the acknowledgements sent to the service.
pub const ACKNOWLEDGEMENT_MEDIA_TYPE: &str = "application/vnd.akamai.cps.acknowledgement.v1+json";
/// The media type of the responses to acknowledgements.
pub const CHANGE_ID_MEDIA_TYPE: &str = "application/vnd.akamai.cps.change-id.v1+json";

/// Accepts the input requested by a change.
pub const ACKNOWLEDGE: &str = "acknowledge";
/// Rejects the input requested by a change, the change is cancelled.
pub const DENY: &str = "deny";

// Extracts the trailing numeric id from a location such as
// `/cps/v2/enrollments/10002/changes/10003`.
fn id_from_location(location: &str) -> Option<i64> {
    location.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}

fn change_errors(enrollment_id: i64, change_id: i64) -> Errors {
    Errors::new()
        .field("EnrollmentID", validation::required(&enrollment_id))
        .field("ChangeID", validation::required(&change_id))
}

/// A certificate enrollment.
///
/// The enrollment holds the information needed to request, validate, and
/// deploy a certificate: the contacts, the certificate signing request
/// details, and the network deployment settings.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Enrollment {
    pub admin_contact: Option<Contact>,
    pub auto_renewal_start_time: Option<String>,
    pub certificate_chain_type: Option<String>,
    /// One of `san`, `single`, `wildcard`, `wildcard-san` or `third-party`.
    pub certificate_type: String,
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub change_management: bool,
    pub csr: Option<Csr>,
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub enable_multi_stacked_certificates: bool,
    /// The path of the enrollment, e.g. `/cps/v2/enrollments/10002`.
    pub location: Option<String>,
    pub max_allowed_san_names: Option<i64>,
    pub max_allowed_wildcard_san_names: Option<i64>,
    pub network_configuration: Option<NetworkConfiguration>,
    pub org: Option<Org>,
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub pending_changes: Vec<PendingChange>,
    /// The certificate authority, e.g. `lets-encrypt`.
    pub ra: String,
    pub signature_algorithm: Option<String>,
    pub tech_contact: Option<Contact>,
    pub third_party: Option<ThirdParty>,
    /// One of `dv`, `ev`, `ov` or `third-party`.
    pub validation_type: String,
}

impl Enrollment {
    /// The enrollment id, extracted from its [location][Enrollment::location].
    ///
    /// # Example
    /// ```
    /// # use edgegrid_cps_v2::model::Enrollment;
    /// let enrollment = Enrollment::new().set_location("/cps/v2/enrollments/10002");
    /// assert_eq!(enrollment.id(), Some(10002));
    /// ```
    pub fn id(&self) -> Option<i64> {
        self.location.as_deref().and_then(id_from_location)
    }

    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [admin_contact][crate::model::Enrollment::admin_contact].
    pub fn set_admin_contact<T: std::convert::Into<crate::model::Contact>>(mut self, v: T) -> Self {
        self.admin_contact = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [certificate_type][crate::model::Enrollment::certificate_type].
    pub fn set_certificate_type<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.certificate_type = v.into();
        self
    }

    /// Sets the value of [change_management][crate::model::Enrollment::change_management].
    pub fn set_change_management<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.change_management = v.into();
        self
    }

    /// Sets the value of [csr][crate::model::Enrollment::csr].
    pub fn set_csr<T: std::convert::Into<crate::model::Csr>>(mut self, v: T) -> Self {
        self.csr = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [location][crate::model::Enrollment::location].
    pub fn set_location<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.location = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [network_configuration][crate::model::Enrollment::network_configuration].
    pub fn set_network_configuration<T: std::convert::Into<crate::model::NetworkConfiguration>>(
        mut self,
        v: T,
    ) -> Self {
        self.network_configuration = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [org][crate::model::Enrollment::org].
    pub fn set_org<T: std::convert::Into<crate::model::Org>>(mut self, v: T) -> Self {
        self.org = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [ra][crate::model::Enrollment::ra].
    pub fn set_ra<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.ra = v.into();
        self
    }

    /// Sets the value of [signature_algorithm][crate::model::Enrollment::signature_algorithm].
    pub fn set_signature_algorithm<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.signature_algorithm = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [tech_contact][crate::model::Enrollment::tech_contact].
    pub fn set_tech_contact<T: std::convert::Into<crate::model::Contact>>(mut self, v: T) -> Self {
        self.tech_contact = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [validation_type][crate::model::Enrollment::validation_type].
    pub fn set_validation_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.validation_type = v.into();
        self
    }
}

/// A contact person for an [Enrollment].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Contact {
    pub address_line_one: Option<String>,
    pub address_line_two: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub organization_name: Option<String>,
    pub phone: Option<String>,
    pub postal_code: Option<String>,
    pub region: Option<String>,
    pub title: Option<String>,
}

impl Contact {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [email][crate::model::Contact::email].
    pub fn set_email<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.email = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [first_name][crate::model::Contact::first_name].
    pub fn set_first_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.first_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [last_name][crate::model::Contact::last_name].
    pub fn set_last_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.last_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [organization_name][crate::model::Contact::organization_name].
    pub fn set_organization_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.organization_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [phone][crate::model::Contact::phone].
    pub fn set_phone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.phone = std::option::Option::Some(v.into());
        self
    }
}

/// The certificate signing request details.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Csr {
    /// The common name of the certificate.
    pub cn: String,
    pub c: Option<String>,
    pub l: Option<String>,
    pub o: Option<String>,
    pub ou: Option<String>,
    pub st: Option<String>,
    #[serde(rename = "preferredTrustChain")]
    pub preferred_trust_chain: Option<String>,
    /// Subject alternative names.
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub sans: Vec<String>,
}

impl Csr {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cn][crate::model::Csr::cn].
    pub fn set_cn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.cn = v.into();
        self
    }

    /// Sets the value of [c][crate::model::Csr::c].
    pub fn set_c<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.c = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [o][crate::model::Csr::o].
    pub fn set_o<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.o = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [sans][crate::model::Csr::sans].
    pub fn set_sans<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.sans = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Where and how the certificate is deployed.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NetworkConfiguration {
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub disallowed_tls_versions: Vec<String>,
    pub dns_name_settings: Option<DnsNameSettings>,
    /// One of `core`, `china+core` or `russia+core`.
    pub geography: String,
    pub must_have_ciphers: Option<String>,
    /// One of `on`, `off` or `not-set`.
    pub ocsp_stapling: Option<String>,
    pub preferred_ciphers: Option<String>,
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub quic_enabled: bool,
    /// One of `standard-tls` or `enhanced-tls`.
    pub secure_network: String,
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub sni_only: bool,
}

impl NetworkConfiguration {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [disallowed_tls_versions][crate::model::NetworkConfiguration::disallowed_tls_versions].
    pub fn set_disallowed_tls_versions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.disallowed_tls_versions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [dns_name_settings][crate::model::NetworkConfiguration::dns_name_settings].
    pub fn set_dns_name_settings<T: std::convert::Into<crate::model::DnsNameSettings>>(
        mut self,
        v: T,
    ) -> Self {
        self.dns_name_settings = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [geography][crate::model::NetworkConfiguration::geography].
    pub fn set_geography<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.geography = v.into();
        self
    }

    /// Sets the value of [secure_network][crate::model::NetworkConfiguration::secure_network].
    pub fn set_secure_network<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.secure_network = v.into();
        self
    }

    /// Sets the value of [sni_only][crate::model::NetworkConfiguration::sni_only].
    pub fn set_sni_only<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.sni_only = v.into();
        self
    }
}

/// The DNS names deployed with the certificate.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DnsNameSettings {
    #[serde(rename = "cloneDNSNames")]
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub clone_dns_names: bool,
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub dns_names: Vec<String>,
}

impl DnsNameSettings {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [clone_dns_names][crate::model::DnsNameSettings::clone_dns_names].
    pub fn set_clone_dns_names<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.clone_dns_names = v.into();
        self
    }

    /// Sets the value of [dns_names][crate::model::DnsNameSettings::dns_names].
    pub fn set_dns_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.dns_names = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The organization requesting the certificate.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Org {
    pub address_line_one: Option<String>,
    pub address_line_two: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub postal_code: Option<String>,
    pub region: Option<String>,
}

/// A change in progress for an [Enrollment].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PendingChange {
    pub change_type: String,
    /// The path of the change, e.g. `/cps/v2/enrollments/10002/changes/10003`.
    pub location: String,
}

impl PendingChange {
    /// The change id, extracted from its [location][PendingChange::location].
    pub fn id(&self) -> Option<i64> {
        id_from_location(&self.location)
    }
}

/// Settings for third-party certificates.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ThirdParty {
    pub exclude_sans: bool,
}

/// The request message for [Cps::list_enrollments][crate::client::Cps::list_enrollments].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListEnrollmentsRequest {
    pub contract_id: String,
}

impl ListEnrollmentsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [contract_id][crate::model::ListEnrollmentsRequest::contract_id].
    pub fn set_contract_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.contract_id = v.into();
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        Errors::new()
            .field("ContractID", validation::required_str(&self.contract_id))
            .into_result()
    }
}

/// The response message for [Cps::list_enrollments][crate::client::Cps::list_enrollments].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListEnrollmentsResponse {
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub enrollments: Vec<Enrollment>,
}

/// The request message for [Cps::get_enrollment][crate::client::Cps::get_enrollment].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetEnrollmentRequest {
    pub enrollment_id: i64,
}

impl GetEnrollmentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enrollment_id][crate::model::GetEnrollmentRequest::enrollment_id].
    pub fn set_enrollment_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.enrollment_id = v.into();
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        Errors::new()
            .field("EnrollmentID", validation::required(&self.enrollment_id))
            .into_result()
    }
}

/// The request message for [Cps::remove_enrollment][crate::client::Cps::remove_enrollment].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RemoveEnrollmentRequest {
    pub enrollment_id: i64,
    /// Cancel any pending changes of the enrollment.
    ///
    /// The service rejects the request if the enrollment has pending changes
    /// and this is not set.
    pub allow_cancel_pending_changes: Option<bool>,
    /// The latest date to remove the certificate from the network.
    pub deploy_not_after: Option<String>,
    /// The earliest date to remove the certificate from the network.
    pub deploy_not_before: Option<String>,
}

impl RemoveEnrollmentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enrollment_id][crate::model::RemoveEnrollmentRequest::enrollment_id].
    pub fn set_enrollment_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.enrollment_id = v.into();
        self
    }

    /// Sets the value of [allow_cancel_pending_changes][crate::model::RemoveEnrollmentRequest::allow_cancel_pending_changes].
    pub fn set_allow_cancel_pending_changes<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.allow_cancel_pending_changes = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [deploy_not_after][crate::model::RemoveEnrollmentRequest::deploy_not_after].
    pub fn set_deploy_not_after<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.deploy_not_after = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [deploy_not_before][crate::model::RemoveEnrollmentRequest::deploy_not_before].
    pub fn set_deploy_not_before<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.deploy_not_before = std::option::Option::Some(v.into());
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        Errors::new()
            .field("EnrollmentID", validation::required(&self.enrollment_id))
            .into_result()
    }
}

/// The response message for [Cps::remove_enrollment][crate::client::Cps::remove_enrollment].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RemoveEnrollmentResponse {
    /// The path of the removed enrollment.
    pub enrollment: String,
    /// The paths of the changes created to remove the enrollment.
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub changes: Vec<String>,
}

impl RemoveEnrollmentResponse {
    /// The ids of the changes created to remove the enrollment.
    pub fn change_ids(&self) -> Vec<i64> {
        self.changes
            .iter()
            .filter_map(|c| id_from_location(c))
            .collect()
    }
}

/// The request message for [Cps::get_change_status][crate::client::Cps::get_change_status].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetChangeStatusRequest {
    pub enrollment_id: i64,
    pub change_id: i64,
}

impl GetChangeStatusRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enrollment_id][crate::model::GetChangeStatusRequest::enrollment_id].
    pub fn set_enrollment_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.enrollment_id = v.into();
        self
    }

    /// Sets the value of [change_id][crate::model::GetChangeStatusRequest::change_id].
    pub fn set_change_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.change_id = v.into();
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        change_errors(self.enrollment_id, self.change_id).into_result()
    }
}

/// The status of a change to an enrollment.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Change {
    /// The inputs the change is waiting for, if any.
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub allowed_input: Vec<AllowedInput>,
    pub status_info: Option<StatusInfo>,
}

impl Change {
    /// Returns true if the change cannot proceed without more input.
    pub fn requires_input(&self) -> bool {
        self.allowed_input.iter().any(|i| i.required_to_proceed)
    }
}

/// An input accepted by a [Change].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AllowedInput {
    /// The path to retrieve the input information.
    pub info: String,
    pub required_to_proceed: bool,
    /// The input type, e.g. `lets-encrypt-challenges`.
    pub r#type: String,
    /// The path to send the input.
    pub update: String,
}

/// The state of a [Change].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StatusInfo {
    pub deployment_schedule: Option<DeploymentSchedule>,
    pub description: Option<String>,
    pub error: Option<StatusInfoError>,
    pub state: String,
    pub status: String,
}

/// When a change is deployed.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeploymentSchedule {
    pub not_after: Option<String>,
    pub not_before: Option<String>,
}

/// The error that stopped a [Change].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StatusInfoError {
    pub code: Option<String>,
    pub description: Option<String>,
    pub timestamp: Option<String>,
}

/// The request message for [Cps::get_change_lets_encrypt_challenges][crate::client::Cps::get_change_lets_encrypt_challenges].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetChangeLetsEncryptChallengesRequest {
    pub enrollment_id: i64,
    pub change_id: i64,
}

impl GetChangeLetsEncryptChallengesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enrollment_id][crate::model::GetChangeLetsEncryptChallengesRequest::enrollment_id].
    pub fn set_enrollment_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.enrollment_id = v.into();
        self
    }

    /// Sets the value of [change_id][crate::model::GetChangeLetsEncryptChallengesRequest::change_id].
    pub fn set_change_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.change_id = v.into();
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        change_errors(self.enrollment_id, self.change_id).into_result()
    }
}

/// The domain validation challenges of a change.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DvChallenges {
    /// One entry per domain in the certificate.
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub dv: Vec<Dv>,
}

impl DvChallenges {
    /// The domains that are not validated yet.
    pub fn pending_domains(&self) -> impl Iterator<Item = &str> {
        self.dv
            .iter()
            .filter(|d| d.validation_status.as_deref() != Some("VALIDATED"))
            .map(|d| d.domain.as_str())
    }
}

/// The validation state of one domain.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Dv {
    /// The challenges the service accepts to validate the domain.
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub challenges: Vec<Challenge>,
    pub domain: String,
    pub error: Option<String>,
    pub expires: Option<String>,
    pub request_timestamp: Option<String>,
    pub status: String,
    pub validated_timestamp: Option<String>,
    pub validation_status: Option<String>,
}

/// One way to prove control over a domain.
///
/// For `http-01` challenges serve `response_body` at `full_path`. For
/// `dns-01` challenges publish `response_body` as a TXT record named
/// `full_path`.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Challenge {
    pub error: Option<String>,
    pub full_path: String,
    pub redirect_full_path: Option<String>,
    pub response_body: String,
    pub status: String,
    pub token: String,
    /// One of `http-01` or `dns-01`.
    pub r#type: String,
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub validation_records: Vec<ValidationRecord>,
}

/// A host contacted while validating a [Challenge].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ValidationRecord {
    pub hostname: String,
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub ip: Vec<String>,
    pub port: String,
}

/// The request message for [Cps::acknowledge_dv_challenges][crate::client::Cps::acknowledge_dv_challenges].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AcknowledgeDvChallengesRequest {
    pub enrollment_id: i64,
    pub change_id: i64,
    /// Either [ACKNOWLEDGE] or [DENY].
    pub acknowledgement: String,
}

impl AcknowledgeDvChallengesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enrollment_id][crate::model::AcknowledgeDvChallengesRequest::enrollment_id].
    pub fn set_enrollment_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.enrollment_id = v.into();
        self
    }

    /// Sets the value of [change_id][crate::model::AcknowledgeDvChallengesRequest::change_id].
    pub fn set_change_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.change_id = v.into();
        self
    }

    /// Sets the value of [acknowledgement][crate::model::AcknowledgeDvChallengesRequest::acknowledgement].
    pub fn set_acknowledgement<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.acknowledgement = v.into();
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        change_errors(self.enrollment_id, self.change_id)
            .field("Acknowledgement", validation::one_of(&self.acknowledgement, &[ACKNOWLEDGE, DENY]))
            .into_result()
    }
}

/// The request message for [Cps::get_change_pre_verification_warnings][crate::client::Cps::get_change_pre_verification_warnings].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetChangePreVerificationWarningsRequest {
    pub enrollment_id: i64,
    pub change_id: i64,
}

impl GetChangePreVerificationWarningsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enrollment_id][crate::model::GetChangePreVerificationWarningsRequest::enrollment_id].
    pub fn set_enrollment_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.enrollment_id = v.into();
        self
    }

    /// Sets the value of [change_id][crate::model::GetChangePreVerificationWarningsRequest::change_id].
    pub fn set_change_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.change_id = v.into();
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        change_errors(self.enrollment_id, self.change_id).into_result()
    }
}

/// The warnings found before the service requests a certificate.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PreVerificationWarnings {
    /// The warnings, one per line.
    pub warnings: String,
}

impl PreVerificationWarnings {
    /// Iterates over the non-empty warning lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.warnings.lines().map(str::trim).filter(|l| !l.is_empty())
    }
}

/// The request message for [Cps::acknowledge_pre_verification_warnings][crate::client::Cps::acknowledge_pre_verification_warnings].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AcknowledgePreVerificationWarningsRequest {
    pub enrollment_id: i64,
    pub change_id: i64,
    /// Either [ACKNOWLEDGE] or [DENY].
    pub acknowledgement: String,
}

impl AcknowledgePreVerificationWarningsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enrollment_id][crate::model::AcknowledgePreVerificationWarningsRequest::enrollment_id].
    pub fn set_enrollment_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.enrollment_id = v.into();
        self
    }

    /// Sets the value of [change_id][crate::model::AcknowledgePreVerificationWarningsRequest::change_id].
    pub fn set_change_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.change_id = v.into();
        self
    }

    /// Sets the value of [acknowledgement][crate::model::AcknowledgePreVerificationWarningsRequest::acknowledgement].
    pub fn set_acknowledgement<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.acknowledgement = v.into();
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        change_errors(self.enrollment_id, self.change_id)
            .field("Acknowledgement", validation::one_of(&self.acknowledgement, &[ACKNOWLEDGE, DENY]))
            .into_result()
    }
}

/// The body sent to acknowledge the input requested by a change.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Acknowledgement {
    /// Either [ACKNOWLEDGE] or [DENY].
    pub acknowledgement: String,
}

impl Acknowledgement {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [acknowledgement][crate::model::Acknowledgement::acknowledgement].
    pub fn set_acknowledgement<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.acknowledgement = v.into();
        self
    }
}

/// The response to an acknowledgement.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AcknowledgementResponse {
    /// The path of the acknowledged change.
    pub change: String,
}

impl AcknowledgementResponse {
    /// The change id, extracted from its [location][AcknowledgementResponse::change].
    pub fn change_id(&self) -> Option<i64> {
        id_from_location(&self.change)
    }
}
