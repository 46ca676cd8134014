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

/// An EdgeWorker identifier.
///
/// The identifier groups all the versions and activations of an EdgeWorker.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EdgeWorkerId {
    pub edge_worker_id: i64,
    pub name: String,
    pub account_id: String,
    pub group_id: i64,
    /// Determines the resource limits of the EdgeWorker.
    pub resource_tier_id: i64,
    pub created_by: String,
    pub created_time: String,
    pub last_modified_by: String,
    pub last_modified_time: String,
}

/// The request message for [EdgeWorkers::list_edge_worker_ids][crate::client::EdgeWorkers::list_edge_worker_ids].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListEdgeWorkerIdsRequest {
    /// If set, only list the EdgeWorkers in this group.
    pub group_id: Option<i64>,
    /// If set, only list the EdgeWorkers with this resource tier.
    pub resource_tier_id: Option<i64>,
}

impl ListEdgeWorkerIdsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [group_id][crate::model::ListEdgeWorkerIdsRequest::group_id].
    pub fn set_group_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [resource_tier_id][crate::model::ListEdgeWorkerIdsRequest::resource_tier_id].
    pub fn set_resource_tier_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.resource_tier_id = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [EdgeWorkers::list_edge_worker_ids][crate::client::EdgeWorkers::list_edge_worker_ids].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListEdgeWorkerIdsResponse {
    pub edge_worker_ids: Vec<EdgeWorkerId>,
}

/// The request message for [EdgeWorkers::get_edge_worker_id][crate::client::EdgeWorkers::get_edge_worker_id].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetEdgeWorkerIdRequest {
    pub edge_worker_id: i64,
}

impl GetEdgeWorkerIdRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [edge_worker_id][crate::model::GetEdgeWorkerIdRequest::edge_worker_id].
    pub fn set_edge_worker_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edge_worker_id = v.into();
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        Errors::new()
            .field("EdgeWorkerID", validation::required(&self.edge_worker_id))
            .into_result()
    }
}

/// The request message for [EdgeWorkers::create_edge_worker_id][crate::client::EdgeWorkers::create_edge_worker_id].
///
/// The request is sent as the body of the call.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateEdgeWorkerIdRequest {
    pub group_id: i64,
    pub name: String,
    pub resource_tier_id: i64,
}

impl CreateEdgeWorkerIdRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [group_id][crate::model::CreateEdgeWorkerIdRequest::group_id].
    pub fn set_group_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.group_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::CreateEdgeWorkerIdRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [resource_tier_id][crate::model::CreateEdgeWorkerIdRequest::resource_tier_id].
    pub fn set_resource_tier_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.resource_tier_id = v.into();
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        Errors::new()
            .field("GroupID", validation::required(&self.group_id))
            .field("Name", validation::required_str(&self.name))
            .field("ResourceTierID", validation::required(&self.resource_tier_id))
            .into_result()
    }
}

/// The request message for [EdgeWorkers::delete_edge_worker_id][crate::client::EdgeWorkers::delete_edge_worker_id].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteEdgeWorkerIdRequest {
    pub edge_worker_id: i64,
}

impl DeleteEdgeWorkerIdRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [edge_worker_id][crate::model::DeleteEdgeWorkerIdRequest::edge_worker_id].
    pub fn set_edge_worker_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edge_worker_id = v.into();
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        Errors::new()
            .field("EdgeWorkerID", validation::required(&self.edge_worker_id))
            .into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    fn create_request() -> CreateEdgeWorkerIdRequest {
        CreateEdgeWorkerIdRequest::new()
            .set_group_id(72297)
            .set_name("redirector")
            .set_resource_tier_id(200)
    }

    #[test]
    fn create_body() -> anyhow::Result<()> {
        let request = CreateEdgeWorkerIdRequest::new()
            .set_group_id(72297)
            .set_name("redirector")
            .set_resource_tier_id(200);
        assert_eq!(request.validate(), Ok(()));
        assert_eq!(
            serde_json::to_value(&request)?,
            json!({"groupId": 72297, "name": "redirector", "resourceTierId": 200})
        );
        Ok(())
    }

    #[test_case(create_request(), ""; "valid")]
    #[test_case(create_request().set_group_id(0), "GroupID: cannot be blank."; "group")]
    #[test_case(create_request().set_name(""), "Name: cannot be blank."; "name")]
    #[test_case(create_request().set_resource_tier_id(0), "ResourceTierID: cannot be blank."; "tier")]
    fn create_validation(input: CreateEdgeWorkerIdRequest, want: &str) {
        let got = input.validate().err().map(|e| e.to_string()).unwrap_or_default();
        assert_eq!(got, want);
    }

    #[test]
    fn validation() {
        let errors = CreateEdgeWorkerIdRequest::new().validate().unwrap_err();
        assert_eq!(
            errors.to_string(),
            "GroupID: cannot be blank; Name: cannot be blank; ResourceTierID: cannot be blank."
        );
        let errors = GetEdgeWorkerIdRequest::new().validate().unwrap_err();
        assert_eq!(errors.to_string(), "EdgeWorkerID: cannot be blank.");
        assert!(DeleteEdgeWorkerIdRequest::new().set_edge_worker_id(42).validate().is_ok());
    }

    #[test]
    fn edge_worker_id() -> anyhow::Result<()> {
        let got: EdgeWorkerId = serde_json::from_value(json!({
            "edgeWorkerId": 42,
            "name": "redirector",
            "accountId": "B-M-1KQK3WU",
            "groupId": 72297,
            "resourceTierId": 200,
            "createdBy": "jsmith",
            "createdTime": "2021-09-01T12:00:00Z",
        }))?;
        assert_eq!(got.edge_worker_id, 42);
        assert_eq!(got.resource_tier_id, 200);
        assert_eq!(got.last_modified_by, "");
        Ok(())
    }
}
