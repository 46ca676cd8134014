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

//! Verify the request pipeline in `ReqwestClient`: the default headers, the
//! request signature, the per-request options, and the status handling.

#[cfg(test)]
mod tests {
    use auth::credentials::{Credentials, CredentialsProvider, SigningRequest};
    use auth::errors::CredentialsError;
    use edgegrid_gax_internal::http::{NoBody, ReqwestClient};
    use edgegrid_gax_internal::options::ClientConfig;
    use gax::options::RequestOptions;
    use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::{Value, json};
    use std::time::Duration;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
    type AuthResult<T> = std::result::Result<T, CredentialsError>;

    mockall::mock! {
        #[derive(Debug)]
        Credentials {}

        impl CredentialsProvider for Credentials {
            async fn headers(&self, request: SigningRequest) -> AuthResult<HeaderMap>;
            async fn host(&self) -> Option<String>;
        }
    }

    fn test_config() -> ClientConfig {
        let mut config = ClientConfig::default();
        config.cred = Some(auth::credentials::anonymous::Builder::new().build());
        config
    }

    fn endpoint(server: &Server) -> String {
        format!("http://{}", server.addr())
    }

    async fn test_client(server: &Server) -> Result<ReqwestClient> {
        let mut config = test_config();
        config.endpoint = Some(endpoint(server));
        Ok(ReqwestClient::new(config).await?)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn signs_request() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/appsec/v1/configs"),
                request::headers(contains(("authorization", "EG1-HMAC-SHA256 test-only"))),
                request::body(json_decoded(eq(json!({"name": "test"})))),
            ])
            .respond_with(status_code(201).body(r#"{"configId": 123}"#)),
        );

        let want_url = format!("{}/appsec/v1/configs", endpoint(&server));
        let mut mock = MockCredentials::new();
        mock.expect_headers()
            .withf(move |r| {
                *r.method() == http::Method::POST
                    && r.url().as_str() == want_url
                    && r.body().as_ref() == br#"{"name":"test"}"#
                    && r.headers().get("content-type")
                        == Some(&HeaderValue::from_static("application/json"))
            })
            .return_once(|_| {
                let mut headers = HeaderMap::new();
                headers.insert(
                    http::header::AUTHORIZATION,
                    HeaderValue::from_static("EG1-HMAC-SHA256 test-only"),
                );
                Ok(headers)
            });
        let mut config = ClientConfig::default();
        config.cred = Some(Credentials::from(mock));
        config.endpoint = Some(endpoint(&server));
        let client = ReqwestClient::new(config).await?;

        let builder = client.builder(reqwest::Method::POST, "/appsec/v1/configs".into());
        let response = client
            .execute::<Value, Value>(
                builder,
                Some(json!({"name": "test"})),
                &[StatusCode::CREATED],
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.into_body(), json!({"configId": 123}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn signing_error() -> Result<()> {
        let server = Server::run();
        let mut mock = MockCredentials::new();
        mock.expect_headers()
            .return_once(|_| Err(CredentialsError::from_msg(false, "test-only")));
        let mut config = ClientConfig::default();
        config.cred = Some(Credentials::from(mock));
        config.endpoint = Some(endpoint(&server));
        let client = ReqwestClient::new(config).await?;

        let builder = client.builder(reqwest::Method::GET, "/unused".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, &[StatusCode::OK], RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_authentication(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn default_headers() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/config-dns/v2/zones"),
                request::headers(contains(("content-type", "application/json"))),
                request::headers(contains((
                    "user-agent",
                    matches("^edgegrid-rust/[0-9]+\\.[0-9]+\\.[0-9]+$")
                ))),
            ])
            .respond_with(json_encoded(json!({"zones": []}))),
        );
        let client = test_client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/config-dns/v2/zones".into());
        let response = client
            .execute::<NoBody, Value>(builder, None, &[StatusCode::OK], RequestOptions::default())
            .await?;
        assert_eq!(response.into_body(), json!({"zones": []}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn user_agent_prefix() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/ua"),
                request::headers(contains(("user-agent", matches("^from-options edgegrid-rust/")))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/ua"),
                request::headers(contains(("user-agent", matches("^from-config edgegrid-rust/")))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({}))),
        );
        let mut config = test_config();
        config.endpoint = Some(endpoint(&server));
        config.user_agent = Some("from-config".into());
        let client = ReqwestClient::new(config).await?;

        let mut options = RequestOptions::default();
        options.set_user_agent("from-options");
        let builder = client.builder(reqwest::Method::GET, "/ua".into());
        client
            .execute::<NoBody, Value>(builder, None, &[StatusCode::OK], options)
            .await?;
        let builder = client.builder(reqwest::Method::GET, "/ua".into());
        client
            .execute::<NoBody, Value>(builder, None, &[StatusCode::OK], RequestOptions::default())
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn option_headers_replace_defaults() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/cps/v2/enrollments"),
                request::headers(contains((
                    "accept",
                    "application/vnd.akamai.cps.enrollments.v11+json"
                ))),
                request::headers(contains(("content-type", "application/merge-patch+json"))),
                request::headers(not(contains(("content-type", "application/json")))),
                request::headers(contains(("account-switch-key", "1-ABCD"))),
            ])
            .respond_with(json_encoded(json!({"enrollments": []}))),
        );
        let client = test_client(&server).await?;
        let mut options = RequestOptions::default();
        options.insert_header(
            http::header::ACCEPT,
            HeaderValue::from_static("application/vnd.akamai.cps.enrollments.v11+json"),
        );
        options.insert_header(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/merge-patch+json"),
        );
        options.insert_header(
            HeaderName::from_static("account-switch-key"),
            HeaderValue::from_static("1-ABCD"),
        );
        let builder = client.builder(reqwest::Method::GET, "/cps/v2/enrollments".into());
        client
            .execute::<NoBody, Value>(builder, None, &[StatusCode::OK], options)
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn query_parameters() -> Result<()> {
        use edgegrid_gax_internal::query_parameter::QueryParameter;
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/config-dns/v2/zones/example.com/recordsets"),
                request::query(url_decoded(contains(("types", "A,AAAA")))),
                request::query(url_decoded(contains(("showAll", "true")))),
            ])
            .respond_with(json_encoded(json!({"recordsets": []}))),
        );
        let client = test_client(&server).await?;
        let builder = client.builder(
            reqwest::Method::GET,
            "/config-dns/v2/zones/example.com/recordsets".into(),
        );
        let types = ["A", "AAAA"];
        let builder = types.as_slice().add(builder, "types");
        let builder = true.add(builder, "showAll");
        client
            .execute::<NoBody, Value>(builder, None, &[StatusCode::OK], RequestOptions::default())
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn unexpected_status_is_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("PUT", "/imaging/v2/network/staging/policies/p1"))
                .respond_with(json_encoded(json!({"operationPerformed": "UPDATED"}))),
        );
        let client = test_client(&server).await?;
        let builder = client.builder(
            reqwest::Method::PUT,
            "/imaging/v2/network/staging/policies/p1".into(),
        );
        let err = client
            .execute::<Value, Value>(
                builder,
                Some(json!({})),
                &[StatusCode::CREATED],
                RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(200), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn service_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/appsec/v1/configs/1"))
                .respond_with(
                    status_code(403)
                        .insert_header("content-type", "application/problem+json")
                        .body(
                            json!({
                                "type": "https://problems.luna.akamaiapis.net/-/pep-authn/deny",
                                "title": "Not authorized",
                                "detail": "The signature does not match",
                                "instance": "https://akab.luna.akamaiapis.net/appsec/v1/configs/1",
                                "status": 403,
                                "method": "GET",
                            })
                            .to_string(),
                        ),
                ),
        );
        let client = test_client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/appsec/v1/configs/1".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, &[StatusCode::OK], RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(403));
        let details = err.api_error().expect("problem details are decoded");
        assert_eq!(details.title, "Not authorized");
        assert_eq!(details.detail, "The signature does not match");
        assert_eq!(details.extension("method"), Some(&json!("GET")));
        assert!(err.http_headers().is_some(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn no_content() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/config-dns/v2/zones/z/names/n/types/A"))
                .respond_with(status_code(204)),
        );
        let client = test_client(&server).await?;
        let builder = client.builder(
            reqwest::Method::DELETE,
            "/config-dns/v2/zones/z/names/n/types/A".into(),
        );
        let response = client
            .execute::<NoBody, Value>(
                builder,
                None,
                &[StatusCode::NO_CONTENT],
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(response.into_body(), Value::Null);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn attempt_timeout() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/slow"))
                .times(..)
                .respond_with(delay_and_then(
                    Duration::from_secs(5),
                    json_encoded(json!({})),
                )),
        );
        let client = test_client(&server).await?;
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_millis(50));
        let builder = client.builder(reqwest::Method::GET, "/slow".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, &[StatusCode::OK], options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn endpoint_from_credentials() -> Result<()> {
        let mut mock = MockCredentials::new();
        mock.expect_host()
            .return_const(Some("akab-test.luna.akamaiapis.net".to_string()));
        let mut config = ClientConfig::default();
        config.cred = Some(Credentials::from(mock));
        let client = ReqwestClient::new(config).await?;
        let request = client
            .builder(reqwest::Method::GET, "/appsec/v1/configs".into())
            .build()?;
        assert_eq!(
            request.url().as_str(),
            "https://akab-test.luna.akamaiapis.net/appsec/v1/configs"
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn endpoint_missing() -> Result<()> {
        let err = ReqwestClient::new(test_config()).await.unwrap_err();
        assert!(err.is_endpoint(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn endpoint_trailing_slash() -> Result<()> {
        let mut config = test_config();
        config.endpoint = Some("https://akab-test.luna.akamaiapis.net/".into());
        let client = ReqwestClient::new(config).await?;
        let request = client
            .builder(reqwest::Method::GET, "/imaging/v2/network/production/policies/".into())
            .build()?;
        assert_eq!(
            request.url().as_str(),
            "https://akab-test.luna.akamaiapis.net/imaging/v2/network/production/policies/"
        );
        Ok(())
    }
}
