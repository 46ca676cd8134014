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

/// A set of records with the same name and type.
///
/// # Example
/// ```
/// # use edgegrid_configdns_v2::model::RecordSet;
/// let record_set = RecordSet::new()
///     .set_name("www.example.com")
///     .set_type("A")
///     .set_ttl(300)
///     .set_rdata(["10.0.0.2", "10.0.0.3"]);
/// assert!(record_set.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RecordSet {
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: String,
    /// The time to live, in seconds.
    pub ttl: i64,
    /// The record data, one entry per record.
    pub rdata: Vec<String>,
}

impl RecordSet {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::RecordSet::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [type][crate::model::RecordSet::r#type].
    pub fn set_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [ttl][crate::model::RecordSet::ttl].
    pub fn set_ttl<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.ttl = v.into();
        self
    }

    /// Sets the value of [rdata][crate::model::RecordSet::rdata].
    pub fn set_rdata<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.rdata = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        Errors::new()
            .field("Name", validation::path_segment(&self.name))
            .field("Type", validation::path_segment(&self.r#type))
            .field("TTL", validation::in_range(Some(self.ttl), 1, i64::MAX))
            .field("Rdata", validation::required(&self.rdata))
            .into_result()
    }
}

/// The request message for [ConfigDns::get_record_list][crate::client::ConfigDns::get_record_list].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetRecordListRequest {
    /// The zone, e.g. `example.com`.
    pub zone: String,
    /// The fully qualified record name, e.g. `www.example.com`.
    pub name: String,
    /// The record type, e.g. `A` or `CNAME`.
    pub record_type: String,
}

impl GetRecordListRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone][crate::model::GetRecordListRequest::zone].
    pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone = v.into();
        self
    }

    /// Sets the value of [name][crate::model::GetRecordListRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [record_type][crate::model::GetRecordListRequest::record_type].
    pub fn set_record_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.record_type = v.into();
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        Errors::new()
            .field("Zone", validation::path_segment(&self.zone))
            .field("RecordType", validation::required_str(&self.record_type))
            .into_result()
    }
}

/// The response message for [ConfigDns::get_record_list][crate::client::ConfigDns::get_record_list].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RecordSetResponse {
    pub metadata: RecordSetMetadata,
    pub recordsets: Vec<RecordSet>,
}

/// Describes the record sets in a [RecordSetResponse].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RecordSetMetadata {
    pub zone: Option<String>,
    pub types: Option<Vec<String>>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub show_all: bool,
    pub total_elements: i64,
}

/// The request message for [ConfigDns::get_record_list_ip][crate::client::ConfigDns::get_record_list_ip].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetRecordListIpRequest {
    /// The zone, e.g. `example.com`.
    pub zone: String,
    /// The fully qualified record name, e.g. `www.example.com`.
    pub name: String,
    /// The record type, e.g. `A` or `CNAME`.
    pub record_type: String,
}

impl GetRecordListIpRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone][crate::model::GetRecordListIpRequest::zone].
    pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone = v.into();
        self
    }

    /// Sets the value of [name][crate::model::GetRecordListIpRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [record_type][crate::model::GetRecordListIpRequest::record_type].
    pub fn set_record_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.record_type = v.into();
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        Errors::new()
            .field("Zone", validation::path_segment(&self.zone))
            .field("Name", validation::required_str(&self.name))
            .field("RecordType", validation::required_str(&self.record_type))
            .into_result()
    }
}

impl std::convert::From<GetRecordListIpRequest> for GetRecordListRequest {
    fn from(value: GetRecordListIpRequest) -> Self {
        Self {
            zone: value.zone,
            name: value.name,
            record_type: value.record_type,
        }
    }
}

/// The response message for [ConfigDns::get_record_list_ip][crate::client::ConfigDns::get_record_list_ip].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetRecordListIpResponse {
    /// The record data of all the record sets with the requested name.
    pub rdata: Vec<String>,
}

/// The request message for [ConfigDns::get_record_set][crate::client::ConfigDns::get_record_set].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetRecordSetRequest {
    /// The zone, e.g. `example.com`.
    pub zone: String,
    /// The fully qualified record name, e.g. `www.example.com`.
    pub name: String,
    /// The record type, e.g. `A` or `CNAME`.
    pub record_type: String,
}

impl GetRecordSetRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone][crate::model::GetRecordSetRequest::zone].
    pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone = v.into();
        self
    }

    /// Sets the value of [name][crate::model::GetRecordSetRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [record_type][crate::model::GetRecordSetRequest::record_type].
    pub fn set_record_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.record_type = v.into();
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        Errors::new()
            .field("Zone", validation::path_segment(&self.zone))
            .field("Name", validation::path_segment(&self.name))
            .field("RecordType", validation::path_segment(&self.record_type))
            .into_result()
    }
}

/// The request message for [ConfigDns::create_record_set][crate::client::ConfigDns::create_record_set].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateRecordSetRequest {
    /// The zone, e.g. `example.com`.
    pub zone: String,
    /// The record set name and type determine the request path.
    pub record_set: Option<RecordSet>,
}

impl CreateRecordSetRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone][crate::model::CreateRecordSetRequest::zone].
    pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone = v.into();
        self
    }

    /// Sets the value of [record_set][crate::model::CreateRecordSetRequest::record_set].
    pub fn set_record_set<T: std::convert::Into<crate::model::RecordSet>>(mut self, v: T) -> Self {
        self.record_set = std::option::Option::Some(v.into());
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        let errors = Errors::new().field("Zone", validation::path_segment(&self.zone));
        let errors = match &self.record_set {
            None => errors.field("RecordSet", validation::required_some(&self.record_set)),
            Some(r) => errors.nested("RecordSet", r.validate()),
        };
        errors.into_result()
    }
}

/// The request message for [ConfigDns::update_record_set][crate::client::ConfigDns::update_record_set].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateRecordSetRequest {
    /// The zone, e.g. `example.com`.
    pub zone: String,
    /// The record set name and type determine the request path.
    pub record_set: Option<RecordSet>,
}

impl UpdateRecordSetRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone][crate::model::UpdateRecordSetRequest::zone].
    pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone = v.into();
        self
    }

    /// Sets the value of [record_set][crate::model::UpdateRecordSetRequest::record_set].
    pub fn set_record_set<T: std::convert::Into<crate::model::RecordSet>>(mut self, v: T) -> Self {
        self.record_set = std::option::Option::Some(v.into());
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        let errors = Errors::new().field("Zone", validation::path_segment(&self.zone));
        let errors = match &self.record_set {
            None => errors.field("RecordSet", validation::required_some(&self.record_set)),
            Some(r) => errors.nested("RecordSet", r.validate()),
        };
        errors.into_result()
    }
}

/// The request message for [ConfigDns::delete_record_set][crate::client::ConfigDns::delete_record_set].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteRecordSetRequest {
    /// The zone, e.g. `example.com`.
    pub zone: String,
    /// The fully qualified record name, e.g. `www.example.com`.
    pub name: String,
    /// The record type, e.g. `A` or `CNAME`.
    pub record_type: String,
}

impl DeleteRecordSetRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone][crate::model::DeleteRecordSetRequest::zone].
    pub fn set_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone = v.into();
        self
    }

    /// Sets the value of [name][crate::model::DeleteRecordSetRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [record_type][crate::model::DeleteRecordSetRequest::record_type].
    pub fn set_record_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.record_type = v.into();
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        Errors::new()
            .field("Zone", validation::path_segment(&self.zone))
            .field("Name", validation::path_segment(&self.name))
            .field("RecordType", validation::path_segment(&self.record_type))
            .into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    fn record_set() -> RecordSet {
        RecordSet::new()
            .set_name("www.example.com")
            .set_type("A")
            .set_ttl(300)
            .set_rdata(["10.0.0.2"])
    }

    #[test_case(record_set(), ""; "valid")]
    #[test_case(record_set().set_name(""), "Name: cannot be blank."; "name")]
    #[test_case(record_set().set_type(""), "Type: cannot be blank."; "type")]
    #[test_case(record_set().set_name(".."), "Name: cannot be a relative path segment."; "parent name")]
    #[test_case(record_set().set_type("."), "Type: cannot be a relative path segment."; "current type")]
    #[test_case(record_set().set_ttl(0), "TTL: must be no less than 1."; "zero ttl")]
    #[test_case(record_set().set_ttl(-30), "TTL: must be no less than 1."; "negative ttl")]
    #[test_case(record_set().set_rdata(Vec::<String>::new()), "Rdata: cannot be blank."; "rdata")]
    fn record_set_validation(input: RecordSet, want: &str) {
        let got = input.validate().err().map(|e| e.to_string()).unwrap_or_default();
        assert_eq!(got, want);
    }

    #[test]
    fn zone_dot_segments() {
        let errors = GetRecordSetRequest::new()
            .set_zone("..")
            .set_name("www.example.com")
            .set_record_type("A")
            .validate()
            .unwrap_err();
        assert_eq!(errors.to_string(), "Zone: cannot be a relative path segment.");

        let errors = DeleteRecordSetRequest::new()
            .set_zone("example.com")
            .set_name(".")
            .set_record_type("A")
            .validate()
            .unwrap_err();
        assert_eq!(errors.to_string(), "Name: cannot be a relative path segment.");

        let errors = GetRecordListRequest::new()
            .set_zone(".")
            .set_record_type("A")
            .validate()
            .unwrap_err();
        assert_eq!(errors.to_string(), "Zone: cannot be a relative path segment.");
    }

    #[test]
    fn record_set_json() -> anyhow::Result<()> {
        let got = serde_json::to_value(record_set())?;
        assert_eq!(
            got,
            json!({"name": "www.example.com", "type": "A", "ttl": 300, "rdata": ["10.0.0.2"]})
        );
        Ok(())
    }

    #[test]
    fn change_requests_require_record_set() {
        let errors = CreateRecordSetRequest::new().validate().unwrap_err();
        assert_eq!(
            errors.to_string(),
            "RecordSet: cannot be blank; Zone: cannot be blank."
        );

        let errors = UpdateRecordSetRequest::new()
            .set_zone("example.com")
            .set_record_set(record_set().set_ttl(0))
            .validate()
            .unwrap_err();
        assert_eq!(errors.to_string(), "RecordSet: (TTL: must be no less than 1.).");
    }

    #[test]
    fn lookups() {
        let errors = GetRecordListRequest::new().validate().unwrap_err();
        assert_eq!(
            errors.to_string(),
            "RecordType: cannot be blank; Zone: cannot be blank."
        );

        let errors = GetRecordListIpRequest::new()
            .set_zone("example.com")
            .set_record_type("A")
            .validate()
            .unwrap_err();
        assert_eq!(errors.to_string(), "Name: cannot be blank.");

        let request = GetRecordListIpRequest::new()
            .set_zone("example.com")
            .set_name("www.example.com")
            .set_record_type("A");
        let list = GetRecordListRequest::from(request);
        assert_eq!(list.zone, "example.com");
        assert_eq!(list.name, "www.example.com");
        assert_eq!(list.record_type, "A");
    }

    #[test]
    fn record_set_response() -> anyhow::Result<()> {
        let got: RecordSetResponse = serde_json::from_value(json!({
            "metadata": {
                "zone": "example.com",
                "types": ["A"],
                "page": 1,
                "pageSize": 25,
                "totalElements": 2
            },
            "recordsets": [
                {"name": "www.example.com", "type": "A", "ttl": 300, "rdata": ["10.0.0.2", "10.0.0.3"]},
                {"name": "mail.example.com", "type": "A", "ttl": 300, "rdata": ["192.168.0.1"]}
            ]
        }))?;
        assert_eq!(got.metadata.total_elements, 2);
        assert_eq!(got.metadata.page_size, Some(25));
        assert!(!got.metadata.show_all, "{got:?}");
        assert_eq!(got.recordsets[1].rdata, vec!["192.168.0.1"]);
        Ok(())
    }
}
