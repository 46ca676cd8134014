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

/// Defines the trait used to implement [crate::client::Cps].
///
/// Application developers may need to implement this trait to mock
/// `Cps`. In other use-cases, application developers only
/// use `Cps` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new operations routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just panic.
pub trait Cps: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::Cps::list_enrollments].
    fn list_enrollments(
        &self,
        _req: model::ListEnrollmentsRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = Result<Response<model::ListEnrollmentsResponse>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Cps::get_enrollment].
    fn get_enrollment(
        &self,
        _req: model::GetEnrollmentRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::Enrollment>>> + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Cps::remove_enrollment].
    fn remove_enrollment(
        &self,
        _req: model::RemoveEnrollmentRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = Result<Response<model::RemoveEnrollmentResponse>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Cps::get_change_status].
    fn get_change_status(
        &self,
        _req: model::GetChangeStatusRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::Change>>> + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Cps::get_change_lets_encrypt_challenges].
    fn get_change_lets_encrypt_challenges(
        &self,
        _req: model::GetChangeLetsEncryptChallengesRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::DvChallenges>>> + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Cps::acknowledge_dv_challenges].
    fn acknowledge_dv_challenges(
        &self,
        _req: model::AcknowledgeDvChallengesRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = Result<Response<model::AcknowledgementResponse>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Cps::get_change_pre_verification_warnings].
    fn get_change_pre_verification_warnings(
        &self,
        _req: model::GetChangePreVerificationWarningsRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = Result<Response<model::PreVerificationWarnings>>,
    > + Send {
        unimplemented_stub()
    }

    /// Implements [crate::client::Cps::acknowledge_pre_verification_warnings].
    fn acknowledge_pre_verification_warnings(
        &self,
        _req: model::AcknowledgePreVerificationWarningsRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<
        Output = Result<Response<model::AcknowledgementResponse>>,
    > + Send {
        unimplemented_stub()
    }
}
