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
use crate::model;
use gax::options::RequestOptions;
use gax::response::Response;

/// A dyn-compatible, crate-private version of [super::ConfigDns].
#[async_trait::async_trait]
pub trait ConfigDns: std::fmt::Debug + Send + Sync {
    async fn get_record_list(
        &self,
        req: model::GetRecordListRequest,
        options: RequestOptions,
    ) -> Result<Response<model::RecordSetResponse>>;

    async fn get_record_list_ip(
        &self,
        req: model::GetRecordListIpRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetRecordListIpResponse>>;

    async fn get_record_set(
        &self,
        req: model::GetRecordSetRequest,
        options: RequestOptions,
    ) -> Result<Response<model::RecordSet>>;

    async fn create_record_set(
        &self,
        req: model::CreateRecordSetRequest,
        options: RequestOptions,
    ) -> Result<Response<model::RecordSet>>;

    async fn update_record_set(
        &self,
        req: model::UpdateRecordSetRequest,
        options: RequestOptions,
    ) -> Result<Response<model::RecordSet>>;

    async fn delete_record_set(
        &self,
        req: model::DeleteRecordSetRequest,
        options: RequestOptions,
    ) -> Result<Response<()>>;
}

/// All implementations of [super::ConfigDns] also implement [ConfigDns].
#[async_trait::async_trait]
impl<T: super::ConfigDns> ConfigDns for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn get_record_list(
        &self,
        req: model::GetRecordListRequest,
        options: RequestOptions,
    ) -> Result<Response<model::RecordSetResponse>> {
        T::get_record_list(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_record_list_ip(
        &self,
        req: model::GetRecordListIpRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetRecordListIpResponse>> {
        T::get_record_list_ip(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_record_set(
        &self,
        req: model::GetRecordSetRequest,
        options: RequestOptions,
    ) -> Result<Response<model::RecordSet>> {
        T::get_record_set(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_record_set(
        &self,
        req: model::CreateRecordSetRequest,
        options: RequestOptions,
    ) -> Result<Response<model::RecordSet>> {
        T::create_record_set(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_record_set(
        &self,
        req: model::UpdateRecordSetRequest,
        options: RequestOptions,
    ) -> Result<Response<model::RecordSet>> {
        T::update_record_set(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_record_set(
        &self,
        req: model::DeleteRecordSetRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        T::delete_record_set(self, req, options).await
    }
}
