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
    use edgegrid_appsec_v1::client::Appsec;
    use edgegrid_appsec_v1::model::*;
    use gax::options::RequestOptionsBuilder;
    use http::{HeaderName, HeaderValue};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result = anyhow::Result<()>;

    const POLICY_PATH: &str = "/appsec/v1/configs/43253/versions/15/security-policies/AAAA_81230";

    async fn test_client(server: &Server) -> anyhow::Result<Appsec> {
        let client = Appsec::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;
        Ok(client)
    }

    fn eval_rules_body() -> serde_json::Value {
        json!({
            "evalRuleActions": [
                {"id": 699989, "action": "alert"},
                {
                    "id": 950002,
                    "action": "deny",
                    "conditionException": {
                        "exception": {"headerCookieOrParamValues": ["abc"]}
                    }
                },
            ]
        })
    }

    #[tokio::test]
    async fn get_eval_rules() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("{POLICY_PATH}/eval-rules")),
                request::query(url_decoded(contains(("includeConditionException", "true")))),
            ])
            .respond_with(json_encoded(eval_rules_body())),
        );

        let client = test_client(&server).await?;
        let response = client
            .get_eval_rules(
                GetEvalRulesRequest::new()
                    .set_config_id(43253)
                    .set_version(15)
                    .set_policy_id("AAAA_81230"),
            )
            .send()
            .await?;
        let ids = response.rules.iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![699989, 950002]);
        assert!(response.rules[1].condition_exception.is_some(), "{response:?}");
        Ok(())
    }

    #[tokio::test]
    async fn get_eval_rules_filtered() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                format!("{POLICY_PATH}/eval-rules"),
            ))
            .respond_with(json_encoded(eval_rules_body())),
        );

        let client = test_client(&server).await?;
        let response = client
            .get_eval_rules(
                GetEvalRulesRequest::new()
                    .set_config_id(43253)
                    .set_version(15)
                    .set_policy_id("AAAA_81230")
                    .set_rule_id(950002),
            )
            .send()
            .await?;
        assert_eq!(response.rules.len(), 1, "{response:?}");
        assert_eq!(response.rules[0].action, "deny");
        Ok(())
    }

    #[tokio::test]
    async fn get_eval_rule() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("{POLICY_PATH}/eval-rules/699989")),
                request::query(url_decoded(contains(("includeConditionException", "true")))),
            ])
            .respond_with(json_encoded(json!({"action": "alert"}))),
        );

        let client = test_client(&server).await?;
        let rule = client
            .get_eval_rule(
                GetEvalRuleRequest::new()
                    .set_config_id(43253)
                    .set_version(15)
                    .set_policy_id("AAAA_81230")
                    .set_rule_id(699989),
            )
            .send()
            .await?;
        assert_eq!(rule.action, "alert");
        assert!(rule.is_empty_condition_exception(), "{rule:?}");
        Ok(())
    }

    #[tokio::test]
    async fn update_eval_rule() -> Result {
        let exception = json!({
            "conditions": [{"type": "extensionMatch", "extensions": ["jpg"], "positiveMatch": true}]
        });
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "PUT",
                    format!("{POLICY_PATH}/eval-rules/699989/action-condition-exception")
                ),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({
                    "action": "deny",
                    "conditionException": exception.clone(),
                })))),
            ])
            .respond_with(
                status_code(201)
                    .insert_header("content-type", "application/json")
                    .body(json!({"action": "deny", "conditionException": exception.clone()}).to_string()),
            ),
        );

        let client = test_client(&server).await?;
        let updated = client
            .update_eval_rule(
                UpdateEvalRuleRequest::new()
                    .set_config_id(43253)
                    .set_version(15)
                    .set_policy_id("AAAA_81230")
                    .set_rule_id(699989)
                    .set_action("deny")
                    .set_condition_exception(exception.clone()),
            )
            .send()
            .await?;
        assert_eq!(updated.action, "deny");
        assert_eq!(
            serde_json::to_value(updated.condition_exception)?,
            exception
        );
        Ok(())
    }

    #[tokio::test]
    async fn get_eval_groups_filtered() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("{POLICY_PATH}/eval-groups")),
                request::query(url_decoded(contains(("includeConditionException", "true")))),
            ])
            .respond_with(json_encoded(json!({
                "attackGroupActions": [
                    {"group": "SQL", "action": "deny"},
                    {"group": "XSS", "action": "alert"},
                ]
            }))),
        );

        let client = test_client(&server).await?;
        let response = client
            .get_eval_groups(
                GetEvalGroupsRequest::new()
                    .set_config_id(43253)
                    .set_version(15)
                    .set_policy_id("AAAA_81230")
                    .set_group("XSS"),
            )
            .send()
            .await?;
        assert_eq!(response.attack_groups.len(), 1, "{response:?}");
        assert_eq!(response.attack_groups[0].action, "alert");
        Ok(())
    }

    #[tokio::test]
    async fn update_eval_group() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "PUT",
                    format!("{POLICY_PATH}/eval-groups/SQL/action-condition-exception")
                ),
                request::body(json_decoded(eq(json!({"action": "none"})))),
            ])
            .respond_with(json_encoded(json!({"action": "none"}))),
        );

        let client = test_client(&server).await?;
        let updated = client
            .update_eval_group(
                UpdateEvalGroupRequest::new()
                    .set_config_id(43253)
                    .set_version(15)
                    .set_policy_id("AAAA_81230")
                    .set_group("SQL")
                    .set_action("none"),
            )
            .send()
            .await?;
        assert_eq!(updated.action, "none");
        assert!(updated.condition_exception.is_none(), "{updated:?}");
        Ok(())
    }

    #[tokio::test]
    async fn ip_geo_protection() -> Result {
        let protections = json!({
            "applyApiConstraints": false,
            "applyApplicationLayerControls": true,
            "applyBotmanControls": false,
            "applyNetworkLayerControls": true,
            "applyRateControls": true,
            "applyReputationControls": true,
            "applySlowPostControls": true,
        });
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                format!("{POLICY_PATH}/protections"),
            ))
            .times(2)
            .respond_with(json_encoded(protections.clone())),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", format!("{POLICY_PATH}/protections")),
                request::body(json_decoded(eq(json!({"applyNetworkLayerControls": true})))),
            ])
            .respond_with(json_encoded(protections.clone())),
        );

        let client = test_client(&server).await?;
        let list = client
            .get_ip_geo_protections(
                GetIpGeoProtectionsRequest::new()
                    .set_config_id(43253)
                    .set_version(15)
                    .set_policy_id("AAAA_81230"),
            )
            .send()
            .await?;
        let single = client
            .get_ip_geo_protection(
                GetIpGeoProtectionRequest::new()
                    .set_config_id(43253)
                    .set_version(15)
                    .set_policy_id("AAAA_81230"),
            )
            .send()
            .await?;
        assert_eq!(list, single);
        assert!(single.apply_network_layer_controls, "{single:?}");
        assert!(!single.apply_botman_controls, "{single:?}");

        let updated = client
            .update_ip_geo_protection(
                UpdateIpGeoProtectionRequest::new()
                    .set_config_id(43253)
                    .set_version(15)
                    .set_policy_id("AAAA_81230")
                    .set_apply_network_layer_controls(true),
            )
            .send()
            .await?;
        assert_eq!(serde_json::to_value(updated)?, protections);
        Ok(())
    }

    #[tokio::test]
    async fn reputation_profile_actions() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                format!("{POLICY_PATH}/reputation-profiles"),
            ))
            .respond_with(json_encoded(json!({
                "reputationProfiles": [
                    {"id": 134644, "action": "alert"},
                    {"id": 134645, "action": "none"},
                ]
            }))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                format!("{POLICY_PATH}/reputation-profiles/134644"),
            ))
            .respond_with(json_encoded(json!({"action": "alert"}))),
        );

        let client = test_client(&server).await?;
        let list = client
            .get_reputation_profile_actions(
                GetReputationProfileActionsRequest::new()
                    .set_config_id(43253)
                    .set_version(15)
                    .set_policy_id("AAAA_81230"),
            )
            .send()
            .await?;
        let ids = list
            .reputation_profiles
            .iter()
            .map(|p| p.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![134644, 134645]);

        let action = client
            .get_reputation_profile_action(
                GetReputationProfileActionRequest::new()
                    .set_config_id(43253)
                    .set_version(15)
                    .set_policy_id("AAAA_81230")
                    .set_reputation_profile_id(134644),
            )
            .send()
            .await?;
        assert_eq!(action.action, "alert");
        Ok(())
    }

    #[tokio::test]
    async fn update_reputation_profile_action_with_content_type() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", format!("{POLICY_PATH}/reputation-profiles/134644")),
                request::headers(contains(("content-type", "application/json;charset=UTF-8"))),
                request::body(json_decoded(eq(json!({"action": "deny"})))),
            ])
            .respond_with(
                status_code(201)
                    .insert_header("content-type", "application/json")
                    .body(r#"{"action": "deny"}"#),
            ),
        );

        let client = test_client(&server).await?;
        let updated = client
            .update_reputation_profile_action(
                UpdateReputationProfileActionRequest::new()
                    .set_config_id(43253)
                    .set_version(15)
                    .set_policy_id("AAAA_81230")
                    .set_reputation_profile_id(134644)
                    .set_action("deny"),
            )
            .with_header(
                HeaderName::from_static("content-type"),
                HeaderValue::from_static("application/json;charset=UTF-8"),
            )
            .send()
            .await?;
        assert_eq!(updated.action, "deny");
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                format!("{POLICY_PATH}/reputation-profiles/134644"),
            ))
            .respond_with(
                status_code(500)
                    .insert_header("content-type", "application/problem+json")
                    .body(
                        json!({
                            "type": "internal_error",
                            "title": "Internal Server Error",
                            "detail": "Error fetching data",
                        })
                        .to_string(),
                    ),
            ),
        );

        let client = test_client(&server).await?;
        let err = client
            .get_reputation_profile_action(
                GetReputationProfileActionRequest::new()
                    .set_config_id(43253)
                    .set_version(15)
                    .set_policy_id("AAAA_81230")
                    .set_reputation_profile_id(134644),
            )
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(500));
        let want = gax::error::api_error::ApiError::default()
            .set_type("internal_error")
            .set_title("Internal Server Error")
            .set_detail("Error fetching data")
            .set_status_code(500);
        assert_eq!(err.api_error(), Some(&want));
        Ok(())
    }

    #[tokio::test]
    async fn validation_error_sends_nothing() -> Result {
        // The server has no expectations, any request fails the test.
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client
            .get_eval_rule(
                GetEvalRuleRequest::new()
                    .set_config_id(43253)
                    .set_policy_id("AAAA_81230"),
            )
            .send()
            .await
            .unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        let msg = err.to_string();
        assert!(msg.contains("RuleID: cannot be blank"), "{msg}");
        assert!(msg.contains("Version: cannot be blank"), "{msg}");
        Ok(())
    }

    #[tokio::test]
    async fn api_hostname_coverage() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/appsec/v1/hostname-coverage"))
                .times(2)
                .respond_with(json_encoded(json!({
                    "hostnameCoverage": [
                        {
                            "configuration": {"id": 43253, "name": "site", "version": 15},
                            "status": "covered",
                            "hasMatchTarget": true,
                            "hostname": "www.example.com",
                            "policyNames": ["AAAA_81230"],
                        },
                        {
                            "status": "not_covered",
                            "hasMatchTarget": false,
                            "hostname": "api.example.com",
                            "policyNames": [],
                        },
                    ]
                }))),
        );

        let client = test_client(&server).await?;
        let all = client
            .get_api_hostname_coverage(GetApiHostnameCoverageRequest::new())
            .send()
            .await?;
        assert_eq!(all.hostname_coverage.len(), 2, "{all:?}");

        let one = client
            .get_api_hostname_coverage(
                GetApiHostnameCoverageRequest::new().set_hostname("www.example.com"),
            )
            .send()
            .await?;
        assert_eq!(one.hostname_coverage.len(), 1, "{one:?}");
        let configuration = one.hostname_coverage[0].configuration.clone();
        assert_eq!(configuration.map(|c| c.name).as_deref(), Some("site"));
        Ok(())
    }
}
