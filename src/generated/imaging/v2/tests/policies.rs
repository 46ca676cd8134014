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
    use edgegrid_imaging_v2::client::Policies;
    use edgegrid_imaging_v2::model::*;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result = anyhow::Result<()>;

    const CONTRACT_ID: &str = "3-WNKXX1";
    const POLICY_SET_ID: &str = "570f9090-5dbe-11ec-8a0a-71665789c1d8";

    async fn test_client(server: &Server) -> anyhow::Result<Policies> {
        let client = Policies::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn list_policies() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/imaging/v2/network/staging/policies/"),
                request::headers(contains(("contract", CONTRACT_ID))),
                request::headers(contains(("policy-set", POLICY_SET_ID))),
            ])
            .respond_with(json_encoded(json!({
                "itemKind": "POLICY",
                "totalItems": 2,
                "items": [
                    {
                        "id": ".auto",
                        "version": 1,
                        "video": false,
                        "output": {"perceptualQuality": "mediumHigh"},
                    },
                    {
                        "id": "clips",
                        "version": 4,
                        "video": true,
                        "rolloutDuration": 3600,
                    },
                ],
            }))),
        );

        let client = test_client(&server).await?;
        let response = client
            .list_policies(
                ListPoliciesRequest::new()
                    .set_network(NETWORK_STAGING)
                    .set_contract_id(CONTRACT_ID)
                    .set_policy_set_id(POLICY_SET_ID),
            )
            .send()
            .await?;
        assert_eq!(response.item_kind, "POLICY");
        assert_eq!(response.total_items, 2);
        let image = response.items[0].image().expect("first item is an image policy");
        assert_eq!(
            image.output,
            Some(OutputImage::new().set_perceptual_quality("mediumHigh".to_string()))
        );
        let video = response.items[1].video().expect("second item is a video policy");
        assert_eq!(video.rollout_duration, Some(3600));
        Ok(())
    }

    #[tokio::test]
    async fn get_policy_video() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/imaging/v2/network/production/policies/clips"),
                request::headers(contains(("contract", CONTRACT_ID))),
            ])
            .respond_with(json_encoded(json!({
                "id": "clips",
                "version": 4,
                "previousVersion": 3,
                "video": true,
                "user": "jsmith",
            }))),
        );

        let client = test_client(&server).await?;
        let policy = client
            .get_policy(
                GetPolicyRequest::new()
                    .set_policy_id("clips")
                    .set_network(NETWORK_PRODUCTION)
                    .set_contract_id(CONTRACT_ID)
                    .set_policy_set_id(POLICY_SET_ID),
            )
            .send()
            .await?;
        let video = policy.video().expect("expected a video policy");
        assert_eq!(video.previous_version, 3);
        assert_eq!(video.user, "jsmith");
        Ok(())
    }

    #[tokio::test]
    async fn get_policy_without_discriminator() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/imaging/v2/network/staging/policies/clips",
            ))
            .respond_with(json_encoded(json!({"id": "clips"}))),
        );

        let client = test_client(&server).await?;
        let err = client
            .get_policy(
                GetPolicyRequest::new()
                    .set_policy_id("clips")
                    .set_network(NETWORK_STAGING)
                    .set_contract_id(CONTRACT_ID)
                    .set_policy_set_id(POLICY_SET_ID),
            )
            .send()
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn upsert_policy_created() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/imaging/v2/network/staging/policies/thumbnails"),
                request::headers(contains(("policy-set", POLICY_SET_ID))),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({
                    "rolloutDuration": 3600,
                    "breakpoints": {"widths": [320, 640]},
                    "transformations": [
                        {"transformation": "Resize", "width": {"var": "width"}, "aspect": "fit"},
                    ],
                    "variables": [
                        {"name": "width", "type": "number", "defaultValue": "320"},
                    ],
                })))),
            ])
            .respond_with(
                status_code(201)
                    .insert_header("content-type", "application/json")
                    .body(
                        json!({
                            "id": "thumbnails",
                            "description": "Policy thumbnails updated.",
                            "operationPerformed": "UPDATED",
                        })
                        .to_string(),
                    ),
            ),
        );

        let client = test_client(&server).await?;
        let input = PolicyInputImage::new()
            .set_rollout_duration(3600)
            .set_breakpoints(Breakpoints::new().set_widths([320, 640]))
            .set_transformations([Transformation::Resize(
                Resize::new()
                    .set_width(IntegerVariableInline::var("width"))
                    .set_aspect("fit".to_string()),
            )])
            .set_variables([Variable::new()
                .set_name("width")
                .set_type("number")
                .set_default_value("320")]);
        let response = client
            .upsert_policy(
                UpsertPolicyRequest::new()
                    .set_policy_id("thumbnails")
                    .set_network(NETWORK_STAGING)
                    .set_contract_id(CONTRACT_ID)
                    .set_policy_set_id(POLICY_SET_ID)
                    .set_policy(input),
            )
            .send()
            .await?;
        assert_eq!(response.id, "thumbnails");
        assert_eq!(response.operation_performed, "UPDATED");
        Ok(())
    }

    #[tokio::test]
    async fn delete_policy() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "DELETE",
                "/imaging/v2/network/staging/policies/thumbnails",
            ))
            .respond_with(json_encoded(json!({
                "id": "thumbnails",
                "description": "Policy thumbnails deleted.",
                "operationPerformed": "DELETED",
            }))),
        );

        let client = test_client(&server).await?;
        let response = client
            .delete_policy(
                DeletePolicyRequest::new()
                    .set_policy_id("thumbnails")
                    .set_network(NETWORK_STAGING)
                    .set_contract_id(CONTRACT_ID)
                    .set_policy_set_id(POLICY_SET_ID),
            )
            .send()
            .await?;
        assert_eq!(response.operation_performed, "DELETED");
        Ok(())
    }

    #[tokio::test]
    async fn get_policy_history() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/imaging/v2/network/production/policies/history/thumbnails",
            ))
            .respond_with(json_encoded(json!({
                "itemKind": "POLICY_HISTORY",
                "totalItems": 2,
                "items": [
                    {"id": "thumbnails", "action": "UPSERT", "version": 2, "user": "jsmith"},
                    {"id": "thumbnails", "action": "UPSERT", "version": 1, "user": "jsmith"},
                ],
            }))),
        );

        let client = test_client(&server).await?;
        let response = client
            .get_policy_history(
                GetPolicyHistoryRequest::new()
                    .set_policy_id("thumbnails")
                    .set_network(NETWORK_PRODUCTION)
                    .set_contract_id(CONTRACT_ID)
                    .set_policy_set_id(POLICY_SET_ID),
            )
            .send()
            .await?;
        let versions = response.items.iter().map(|i| i.version).collect::<Vec<_>>();
        assert_eq!(versions, vec![2, 1]);
        Ok(())
    }

    #[tokio::test]
    async fn rollback_policy() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "PUT",
                "/imaging/v2/network/staging/policies/rollback/thumbnails",
            ))
            .respond_with(json_encoded(json!({
                "id": "thumbnails",
                "description": "Policy thumbnails rolled back.",
                "operationPerformed": "UPDATED",
            }))),
        );

        let client = test_client(&server).await?;
        let response = client
            .rollback_policy(
                RollbackPolicyRequest::new()
                    .set_policy_id("thumbnails")
                    .set_network(NETWORK_STAGING)
                    .set_contract_id(CONTRACT_ID)
                    .set_policy_set_id(POLICY_SET_ID),
            )
            .send()
            .await?;
        assert_eq!(response.description, "Policy thumbnails rolled back.");
        Ok(())
    }

    #[tokio::test]
    async fn rollback_policy_not_found() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "PUT",
                "/imaging/v2/network/staging/policies/rollback/thumbnails",
            ))
            .respond_with(
                status_code(404)
                    .insert_header("content-type", "application/problem+json")
                    .body(
                        json!({
                            "type": "https://problems.luna.akamaiapis.net/image-policy-manager/IVM_1004",
                            "title": "Not Found",
                            "detail": "Policy thumbnails has no previous version.",
                            "status": 404,
                        })
                        .to_string(),
                    ),
            ),
        );

        let client = test_client(&server).await?;
        let err = client
            .rollback_policy(
                RollbackPolicyRequest::new()
                    .set_policy_id("thumbnails")
                    .set_network(NETWORK_STAGING)
                    .set_contract_id(CONTRACT_ID)
                    .set_policy_set_id(POLICY_SET_ID),
            )
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404));
        let api_error = err.api_error().expect("expected a service error");
        assert_eq!(api_error.title, "Not Found");
        assert_eq!(api_error.detail, "Policy thumbnails has no previous version.");
        Ok(())
    }

    #[tokio::test]
    async fn invalid_network_sends_nothing() -> Result {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client
            .delete_policy(
                DeletePolicyRequest::new()
                    .set_policy_id("thumbnails")
                    .set_network("qa")
                    .set_contract_id(CONTRACT_ID)
                    .set_policy_set_id(POLICY_SET_ID),
            )
            .send()
            .await
            .unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        assert!(
            err.to_string()
                .contains("Network: has to be 'staging', 'production'"),
            "{err}"
        );
        Ok(())
    }
}
