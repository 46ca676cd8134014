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


#[cfg(test)]
mod tests {
    use edgegrid_cps_v2::client::Cps;
    use edgegrid_cps_v2::model::*;
    use gax::options::RequestOptions;
    use gax::response::Response;

    mockall::mock! {
        #[derive(Debug)]
        Cps {}
        impl edgegrid_cps_v2::stub::Cps for Cps {
            async fn remove_enrollment(&self, req: RemoveEnrollmentRequest, options: RequestOptions) -> gax::Result<Response<RemoveEnrollmentResponse>>;
            async fn get_change_status(&self, req: GetChangeStatusRequest, options: RequestOptions) -> gax::Result<Response<Change>>;
            async fn get_change_lets_encrypt_challenges(&self, req: GetChangeLetsEncryptChallengesRequest, options: RequestOptions) -> gax::Result<Response<DvChallenges>>;
            async fn acknowledge_dv_challenges(&self, req: AcknowledgeDvChallengesRequest, options: RequestOptions) -> gax::Result<Response<AcknowledgementResponse>>;
        }
    }

    // Removing an enrollment and polling the change it creates.
    #[tokio::test]
    async fn remove_and_track() -> anyhow::Result<()> {
        let mut mock = MockCps::new();
        mock.expect_remove_enrollment()
            .withf(|r, _| r.enrollment_id == 10002 && r.allow_cancel_pending_changes == Some(true))
            .return_once(|_, _| {
                let mut response = RemoveEnrollmentResponse::default();
                response.enrollment = "/cps/v2/enrollments/10002".to_string();
                response.changes = vec!["/cps/v2/enrollments/10002/changes/10004".to_string()];
                Ok(Response::from(response))
            });
        mock.expect_get_change_status()
            .withf(|r, _| r.enrollment_id == 10002 && r.change_id == 10004)
            .return_once(|_, _| {
                let mut status = StatusInfo::default();
                status.state = "running".to_string();
                let mut change = Change::default();
                change.status_info = Some(status);
                Ok(Response::from(change))
            });

        let client = Cps::from_stub(mock);
        let removed = client
            .remove_enrollment(
                RemoveEnrollmentRequest::new()
                    .set_enrollment_id(10002)
                    .set_allow_cancel_pending_changes(true),
            )
            .send()
            .await?;
        let change_id = removed.change_ids()[0];
        let change = client
            .get_change_status(
                GetChangeStatusRequest::new()
                    .set_enrollment_id(10002)
                    .set_change_id(change_id),
            )
            .send()
            .await?;
        assert_eq!(
            change.status_info.map(|s| s.state),
            Some("running".to_string())
        );
        Ok(())
    }

    // A change waiting for domain validation, answered with its challenges.
    #[tokio::test]
    async fn answer_dv_challenges() -> anyhow::Result<()> {
        let mut mock = MockCps::new();
        mock.expect_get_change_lets_encrypt_challenges()
            .withf(|r, _| r.enrollment_id == 10002 && r.change_id == 10004)
            .return_once(|_, _| {
                let mut dv = Dv::default();
                dv.domain = "www.example.com".to_string();
                dv.status = "pending".to_string();
                let mut challenges = DvChallenges::default();
                challenges.dv = vec![dv];
                Ok(Response::from(challenges))
            });
        mock.expect_acknowledge_dv_challenges()
            .withf(|r, _| r.change_id == 10004 && r.acknowledgement == ACKNOWLEDGE)
            .return_once(|_, _| {
                let mut response = AcknowledgementResponse::default();
                response.change = "/cps/v2/enrollments/10002/changes/10004".to_string();
                Ok(Response::from(response))
            });

        let client = Cps::from_stub(mock);
        let challenges = client
            .get_change_lets_encrypt_challenges(
                GetChangeLetsEncryptChallengesRequest::new()
                    .set_enrollment_id(10002)
                    .set_change_id(10004),
            )
            .send()
            .await?;
        assert_eq!(challenges.pending_domains().count(), 1);
        let response = client
            .acknowledge_dv_challenges(
                AcknowledgeDvChallengesRequest::new()
                    .set_enrollment_id(10002)
                    .set_change_id(10004)
                    .set_acknowledgement(ACKNOWLEDGE),
            )
            .send()
            .await?;
        assert_eq!(response.change_id(), Some(10004));
        Ok(())
    }
}
