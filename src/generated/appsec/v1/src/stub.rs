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

/// Defines the trait used to implement [crate::client::Appsec].
///
/// Application developers may need to implement this trait to mock
/// `Appsec`. In other use-cases, application developers only
/// use `Appsec` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new operations routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just panic.
pub trait Appsec: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::Appsec::get_eval_rules].
    fn get_eval_rules(
        &self,
        _req: model::GetEvalRulesRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::GetEvalRulesResponse>>> + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Appsec::get_eval_rule].
    fn get_eval_rule(
        &self,
        _req: model::GetEvalRuleRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::GetEvalRuleResponse>>> + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Appsec::update_eval_rule].
    fn update_eval_rule(
        &self,
        _req: model::UpdateEvalRuleRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::UpdateEvalRuleResponse>>> + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Appsec::get_eval_groups].
    fn get_eval_groups(
        &self,
        _req: model::GetEvalGroupsRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::GetEvalGroupsResponse>>> + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Appsec::get_eval_group].
    fn get_eval_group(
        &self,
        _req: model::GetEvalGroupRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::GetEvalGroupResponse>>> + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Appsec::update_eval_group].
    fn update_eval_group(
        &self,
        _req: model::UpdateEvalGroupRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = Result<Response<model::UpdateEvalGroupResponse>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Appsec::get_ip_geo_protections].
    fn get_ip_geo_protections(
        &self,
        _req: model::GetIpGeoProtectionsRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = Result<Response<model::GetIpGeoProtectionsResponse>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Appsec::get_ip_geo_protection].
    fn get_ip_geo_protection(
        &self,
        _req: model::GetIpGeoProtectionRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = Result<Response<model::GetIpGeoProtectionResponse>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Appsec::update_ip_geo_protection].
    fn update_ip_geo_protection(
        &self,
        _req: model::UpdateIpGeoProtectionRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = Result<Response<model::UpdateIpGeoProtectionResponse>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Appsec::get_reputation_profile_actions].
    fn get_reputation_profile_actions(
        &self,
        _req: model::GetReputationProfileActionsRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = Result<Response<model::GetReputationProfileActionsResponse>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Appsec::get_reputation_profile_action].
    fn get_reputation_profile_action(
        &self,
        _req: model::GetReputationProfileActionRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = Result<Response<model::GetReputationProfileActionResponse>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Appsec::update_reputation_profile_action].
    fn update_reputation_profile_action(
        &self,
        _req: model::UpdateReputationProfileActionRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = Result<Response<model::UpdateReputationProfileActionResponse>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Appsec::get_api_hostname_coverage].
    fn get_api_hostname_coverage(
        &self,
        _req: model::GetApiHostnameCoverageRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = Result<Response<model::GetApiHostnameCoverageResponse>>,
    > + Send {
        unimplemented_stub()
    }
}
