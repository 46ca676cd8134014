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

/// A dyn-compatible, crate-private version of [super::Cps].
#[async_trait::async_trait]
pub trait Cps: std::fmt::Debug + Send + Sync {
    async fn list_enrollments(
        &self,
        req: model::ListEnrollmentsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ListEnrollmentsResponse>>;

    async fn get_enrollment(
        &self,
        req: model::GetEnrollmentRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Enrollment>>;

    async fn remove_enrollment(
        &self,
        req: model::RemoveEnrollmentRequest,
        options: RequestOptions,
    ) -> Result<Response<model::RemoveEnrollmentResponse>>;

    async fn get_change_status(
        &self,
        req: model::GetChangeStatusRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Change>>;

    async fn get_change_lets_encrypt_challenges(
        &self,
        req: model::GetChangeLetsEncryptChallengesRequest,
        options: RequestOptions,
    ) -> Result<Response<model::DvChallenges>>;

    async fn acknowledge_dv_challenges(
        &self,
        req: model::AcknowledgeDvChallengesRequest,
        options: RequestOptions,
    ) -> Result<Response<model::AcknowledgementResponse>>;

    async fn get_change_pre_verification_warnings(
        &self,
        req: model::GetChangePreVerificationWarningsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PreVerificationWarnings>>;

    async fn acknowledge_pre_verification_warnings(
        &self,
        req: model::AcknowledgePreVerificationWarningsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::AcknowledgementResponse>>;
}

/// All implementations of [super::Cps] also implement [Cps].
#[async_trait::async_trait]
impl<T: super::Cps> Cps for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_enrollments(
        &self,
        req: model::ListEnrollmentsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ListEnrollmentsResponse>> {
        T::list_enrollments(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_enrollment(
        &self,
        req: model::GetEnrollmentRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Enrollment>> {
        T::get_enrollment(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn remove_enrollment(
        &self,
        req: model::RemoveEnrollmentRequest,
        options: RequestOptions,
    ) -> Result<Response<model::RemoveEnrollmentResponse>> {
        T::remove_enrollment(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_change_status(
        &self,
        req: model::GetChangeStatusRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Change>> {
        T::get_change_status(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_change_lets_encrypt_challenges(
        &self,
        req: model::GetChangeLetsEncryptChallengesRequest,
        options: RequestOptions,
    ) -> Result<Response<model::DvChallenges>> {
        T::get_change_lets_encrypt_challenges(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn acknowledge_dv_challenges(
        &self,
        req: model::AcknowledgeDvChallengesRequest,
        options: RequestOptions,
    ) -> Result<Response<model::AcknowledgementResponse>> {
        T::acknowledge_dv_challenges(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_change_pre_verification_warnings(
        &self,
        req: model::GetChangePreVerificationWarningsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PreVerificationWarnings>> {
        T::get_change_pre_verification_warnings(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn acknowledge_pre_verification_warnings(
        &self,
        req: model::AcknowledgePreVerificationWarningsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::AcknowledgementResponse>> {
        T::acknowledge_pre_verification_warnings(self, req, options).await
    }
}
