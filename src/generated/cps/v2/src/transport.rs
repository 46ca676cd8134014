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
use gax::error::Error;
use gax::options::RequestOptions;
use gax::options::internal::{set_default_header, set_path_template};
use gax::response::Response;
use gaxi::http::{NoBody, ReqwestClient};
use gaxi::query_parameter::QueryParameter;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderValue, Method, StatusCode};

/// Implements [Cps](super::stub::Cps) using a [ReqwestClient].
#[derive(Clone, Debug)]
pub struct Cps {
    inner: ReqwestClient,
}

impl Cps {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config).await?;
        Ok(Self { inner })
    }
}

const ENROLLMENTS_PATH: &str = "/cps/v2/enrollments";
const ENROLLMENT_TEMPLATE: &str = "/cps/v2/enrollments/{enrollmentId}";
const CHANGE_TEMPLATE: &str = "/cps/v2/enrollments/{enrollmentId}/changes/{changeId}";

fn accept(options: RequestOptions, media_type: &'static str) -> RequestOptions {
    set_default_header(options, ACCEPT, HeaderValue::from_static(media_type))
}

fn content_type(options: RequestOptions, media_type: &'static str) -> RequestOptions {
    set_default_header(options, CONTENT_TYPE, HeaderValue::from_static(media_type))
}

fn change_path(enrollment_id: i64, change_id: i64, suffix: &str) -> String {
    format!("{ENROLLMENTS_PATH}/{enrollment_id}/changes/{change_id}{suffix}")
}

const DV_CHALLENGES_INFO: &str = "/input/info/lets-encrypt-challenges";
const DV_CHALLENGES_UPDATE: &str = "/input/update/lets-encrypt-challenges-completed";
const WARNINGS_INFO: &str = "/input/info/pre-verification-warnings";
const WARNINGS_UPDATE: &str = "/input/update/pre-verification-warnings-ack";

// Keep in sync with the suffixes above.
const DV_CHALLENGES_INFO_TEMPLATE: &str =
    "/cps/v2/enrollments/{enrollmentId}/changes/{changeId}/input/info/lets-encrypt-challenges";
const DV_CHALLENGES_UPDATE_TEMPLATE: &str = "/cps/v2/enrollments/{enrollmentId}/changes/{changeId}/input/update/lets-encrypt-challenges-completed";
const WARNINGS_INFO_TEMPLATE: &str =
    "/cps/v2/enrollments/{enrollmentId}/changes/{changeId}/input/info/pre-verification-warnings";
const WARNINGS_UPDATE_TEMPLATE: &str =
    "/cps/v2/enrollments/{enrollmentId}/changes/{changeId}/input/update/pre-verification-warnings-ack";

impl super::stub::Cps for Cps {
    async fn list_enrollments(
        &self,
        req: model::ListEnrollmentsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ListEnrollmentsResponse>> {
        tracing::debug!("ListEnrollments");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(options, ENROLLMENTS_PATH);
        let options = accept(options, model::ENROLLMENTS_MEDIA_TYPE);
        let builder = self.inner.builder(Method::GET, ENROLLMENTS_PATH.to_string());
        let builder = req.contract_id.add(builder, "contractId");
        self.inner
            .execute(builder, None::<NoBody>, &[StatusCode::OK], options)
            .await
    }

    async fn get_enrollment(
        &self,
        req: model::GetEnrollmentRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Enrollment>> {
        tracing::debug!("GetEnrollment");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(options, ENROLLMENT_TEMPLATE);
        let options = accept(options, model::ENROLLMENT_MEDIA_TYPE);
        let path = format!("{ENROLLMENTS_PATH}/{}", req.enrollment_id);
        let builder = self.inner.builder(Method::GET, path);
        self.inner
            .execute(builder, None::<NoBody>, &[StatusCode::OK], options)
            .await
    }

    async fn remove_enrollment(
        &self,
        req: model::RemoveEnrollmentRequest,
        options: RequestOptions,
    ) -> Result<Response<model::RemoveEnrollmentResponse>> {
        tracing::debug!("RemoveEnrollment");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(options, ENROLLMENT_TEMPLATE);
        let options = accept(options, model::ENROLLMENT_STATUS_MEDIA_TYPE);
        let path = format!("{ENROLLMENTS_PATH}/{}", req.enrollment_id);
        let builder = self.inner.builder(Method::DELETE, path);
        let builder = req
            .allow_cancel_pending_changes
            .add(builder, "allow-cancel-pending-changes");
        let builder = req.deploy_not_after.add(builder, "deploy-not-after");
        let builder = req.deploy_not_before.add(builder, "deploy-not-before");
        self.inner
            .execute(
                builder,
                None::<NoBody>,
                &[StatusCode::OK, StatusCode::ACCEPTED],
                options,
            )
            .await
    }

    async fn get_change_status(
        &self,
        req: model::GetChangeStatusRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Change>> {
        tracing::debug!("GetChangeStatus");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(options, CHANGE_TEMPLATE);
        let options = accept(options, model::CHANGE_MEDIA_TYPE);
        let path = change_path(req.enrollment_id, req.change_id, "");
        let builder = self.inner.builder(Method::GET, path);
        self.inner
            .execute(builder, None::<NoBody>, &[StatusCode::OK], options)
            .await
    }

    async fn get_change_lets_encrypt_challenges(
        &self,
        req: model::GetChangeLetsEncryptChallengesRequest,
        options: RequestOptions,
    ) -> Result<Response<model::DvChallenges>> {
        tracing::debug!("GetChangeLetsEncryptChallenges");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(options, DV_CHALLENGES_INFO_TEMPLATE);
        let options = accept(options, model::DV_CHALLENGES_MEDIA_TYPE);
        let path = change_path(req.enrollment_id, req.change_id, DV_CHALLENGES_INFO);
        let builder = self.inner.builder(Method::GET, path);
        self.inner
            .execute(builder, None::<NoBody>, &[StatusCode::OK], options)
            .await
    }

    async fn acknowledge_dv_challenges(
        &self,
        req: model::AcknowledgeDvChallengesRequest,
        options: RequestOptions,
    ) -> Result<Response<model::AcknowledgementResponse>> {
        tracing::debug!("AcknowledgeDVChallenges");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(options, DV_CHALLENGES_UPDATE_TEMPLATE);
        let options = accept(options, model::CHANGE_ID_MEDIA_TYPE);
        let options = content_type(options, model::ACKNOWLEDGEMENT_MEDIA_TYPE);
        let path = change_path(req.enrollment_id, req.change_id, DV_CHALLENGES_UPDATE);
        let builder = self.inner.builder(Method::POST, path);
        let body = model::Acknowledgement::new().set_acknowledgement(req.acknowledgement);
        self.inner
            .execute(builder, Some(body), &[StatusCode::OK], options)
            .await
    }

    async fn get_change_pre_verification_warnings(
        &self,
        req: model::GetChangePreVerificationWarningsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PreVerificationWarnings>> {
        tracing::debug!("GetChangePreVerificationWarnings");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(options, WARNINGS_INFO_TEMPLATE);
        let options = accept(options, model::WARNINGS_MEDIA_TYPE);
        let path = change_path(req.enrollment_id, req.change_id, WARNINGS_INFO);
        let builder = self.inner.builder(Method::GET, path);
        self.inner
            .execute(builder, None::<NoBody>, &[StatusCode::OK], options)
            .await
    }

    async fn acknowledge_pre_verification_warnings(
        &self,
        req: model::AcknowledgePreVerificationWarningsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::AcknowledgementResponse>> {
        tracing::debug!("AcknowledgePreVerificationWarnings");
        req.validate().map_err(Error::validation)?;
        let options = set_path_template(options, WARNINGS_UPDATE_TEMPLATE);
        let options = accept(options, model::CHANGE_ID_MEDIA_TYPE);
        let options = content_type(options, model::ACKNOWLEDGEMENT_MEDIA_TYPE);
        let path = change_path(req.enrollment_id, req.change_id, WARNINGS_UPDATE);
        let builder = self.inner.builder(Method::POST, path);
        let body = model::Acknowledgement::new().set_acknowledgement(req.acknowledgement);
        self.inner
            .execute(builder, Some(body), &[StatusCode::OK], options)
            .await
    }
}
