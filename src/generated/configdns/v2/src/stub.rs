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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! responses. The traits in this module are the extension points to do so.

use crate::Result;
use crate::model;
use gax::options::RequestOptions;
use gax::response::Response;
use gaxi::unimplemented::unimplemented_stub;

pub(crate) mod dynamic;

/// Defines the trait used to implement [crate::client::ConfigDns].
///
/// Application developers may need to implement this trait to mock
/// `ConfigDns`. In other use-cases, application developers only
/// use `ConfigDns` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new operations routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just panic.
pub trait ConfigDns: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::ConfigDns::get_record_list].
    fn get_record_list(
        &self,
        _req: model::GetRecordListRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::RecordSetResponse>>> + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::ConfigDns::get_record_list_ip].
    fn get_record_list_ip(
        &self,
        _req: model::GetRecordListIpRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = Result<Response<model::GetRecordListIpResponse>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::ConfigDns::get_record_set].
    fn get_record_set(
        &self,
        _req: model::GetRecordSetRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::RecordSet>>> + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::ConfigDns::create_record_set].
    fn create_record_set(
        &self,
        _req: model::CreateRecordSetRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::RecordSet>>> + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::ConfigDns::update_record_set].
    fn update_record_set(
        &self,
        _req: model::UpdateRecordSetRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::RecordSet>>> + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::ConfigDns::delete_record_set].
    fn delete_record_set(
        &self,
        _req: model::DeleteRecordSetRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<()>>> + Send {
        unimplemented_stub()
    }
}
