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

use crate::Result;
use crate::errors::ZoneError;
use crate::model;
use gax::error::Error;
use gax::options::RequestOptions;
use gax::options::internal::set_path_template;
use gax::response::Response;
use gaxi::http::{NoBody, ReqwestClient};
use gaxi::path_parameter::encode;
use gaxi::query_parameter::QueryParameter;
use http::{Method, StatusCode};

/// Implements [ConfigDns](super::stub::ConfigDns) using a [ReqwestClient].
#[derive(Clone, Debug)]
pub struct ConfigDns {
    inner: ReqwestClient,
}

impl ConfigDns {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config).await?;
        Ok(Self { inner })
    }
}

fn record_set_path(zone: &str, name: &str, record_type: &str) -> String {
    format!(
        "/config-dns/v2/zones/{}/names/{}/types/{}",
        encode(zone),
        encode(name),
        encode(record_type)
    )
}

const RECORD_SET_TEMPLATE: &str = "/config-dns/v2/zones/{zone}/names/{name}/types/{type}";

impl super::stub::ConfigDns for ConfigDns {
    async fn get_record_list(
        &self,
        req: model::GetRecordListRequest,
        options: RequestOptions,
    ) -> Result<Response<model::RecordSetResponse>> {
        tracing::debug!("GetRecordList");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(options, "/config-dns/v2/zones/{zone}/recordsets");
        let path = format!("/config-dns/v2/zones/{}/recordsets", encode(&req.zone));
        let builder = self.inner.builder(Method::GET, path);
        let builder = req.record_type.as_str().add(builder, "types");
        let builder = true.add(builder, "showAll");
        self.inner
            .execute(builder, None::<NoBody>, &[StatusCode::OK], options)
            .await
            .map_err(|e| match e.http_status_code() {
                Some(404) => Error::other(ZoneError::new(&req.zone, &req.name)),
                _ => e,
            })
    }

    async fn get_record_list_ip(
        &self,
        req: model::GetRecordListIpRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetRecordListIpResponse>> {
        tracing::debug!("GetRecordListIP");
        req.validate().map_err(Error::validation)?;
        let name = req.name.clone();
        let response = super::stub::ConfigDns::get_record_list(self, req.into(), options).await?;
        Ok(response.map(|body| {
            let mut result = model::GetRecordListIpResponse::default();
            result.rdata = body
                .recordsets
                .into_iter()
                .filter(|r| r.name == name)
                .flat_map(|r| r.rdata)
                .collect();
            result
        }))
    }

    async fn get_record_set(
        &self,
        req: model::GetRecordSetRequest,
        options: RequestOptions,
    ) -> Result<Response<model::RecordSet>> {
        tracing::debug!("GetRecordSet");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(options, RECORD_SET_TEMPLATE);
        let path = record_set_path(&req.zone, &req.name, &req.record_type);
        let builder = self.inner.builder(Method::GET, path);
        self.inner
            .execute(builder, None::<NoBody>, &[StatusCode::OK], options)
            .await
    }

    async fn create_record_set(
        &self,
        req: model::CreateRecordSetRequest,
        options: RequestOptions,
    ) -> Result<Response<model::RecordSet>> {
        tracing::debug!("CreateRecordSet");
        req.validate().map_err(Error::validation)?;
        self.change(Method::POST, StatusCode::CREATED, req.zone, req.record_set, options)
            .await
    }

    async fn update_record_set(
        &self,
        req: model::UpdateRecordSetRequest,
        options: RequestOptions,
    ) -> Result<Response<model::RecordSet>> {
        tracing::debug!("UpdateRecordSet");
        req.validate().map_err(Error::validation)?;
        self.change(Method::PUT, StatusCode::OK, req.zone, req.record_set, options)
            .await
    }

    async fn delete_record_set(
        &self,
        req: model::DeleteRecordSetRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        tracing::debug!("DeleteRecordSet");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(options, RECORD_SET_TEMPLATE);
        let path = record_set_path(&req.zone, &req.name, &req.record_type);
        let builder = self.inner.builder(Method::DELETE, path);
        self.inner
            .execute(builder, None::<NoBody>, &[StatusCode::NO_CONTENT], options)
            .await
    }
}

impl ConfigDns {
    // Creates and updates send the record set to the same path.
    async fn change(
        &self,
        method: Method,
        accepted: StatusCode,
        zone: String,
        record_set: Option<model::RecordSet>,
        options: RequestOptions,
    ) -> Result<Response<model::RecordSet>> {
        let record_set = record_set.unwrap_or_default();
        let options = set_path_template(options, RECORD_SET_TEMPLATE);
        let path = record_set_path(&zone, &record_set.name, &record_set.r#type);
        let builder = self.inner.builder(method, path);
        self.inner
            .execute(builder, Some(&record_set), &[accepted], options)
            .await
    }
}
