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
    use auth::credentials::edgegrid::Builder as EdgeGridBuilder;
    use edgegrid_gax_internal::http::{NoBody, ReqwestClient};
    use edgegrid_gax_internal::options::ClientConfig;
    use gax::options::RequestOptions;
    use http::StatusCode;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            let buffer = self.0.lock().expect("capture buffer is not poisoned");
            String::from_utf8_lossy(&buffer).to_string()
        }
    }

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            let mut buffer = self.0.lock().expect("capture buffer is not poisoned");
            buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Capture;
        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn credentials() -> Result<auth::credentials::Credentials> {
        let credentials = EdgeGridBuilder::new()
            .with_host("akab-test.luna.akamaiapis.net")
            .with_client_token("akab-client-token")
            .with_client_secret("test-secret")
            .with_access_token("akab-access-token")
            .build()?;
        Ok(credentials)
    }

    async fn client(server: &Server, tracing: bool) -> Result<ReqwestClient> {
        let mut config = ClientConfig::default();
        config.tracing = tracing;
        config.endpoint = Some(format!("http://{}", server.addr()));
        config.cred = Some(credentials()?);
        Ok(ReqwestClient::new(config).await?)
    }

    fn capture() -> (Capture, tracing::subscriber::DefaultGuard) {
        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(capture.clone())
            .with_ansi(false)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (capture, guard)
    }

    async fn run(tracing: bool) -> Result<String> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/edgeworkers/v1/ids"))
                .respond_with(json_encoded(json!({"edgeWorkerIds": []}))),
        );
        let (capture, _guard) = capture();

        let client = client(&server, tracing).await?;
        let builder = client.builder(reqwest::Method::GET, "/edgeworkers/v1/ids".into());
        let options = gax::options::internal::set_path_template(
            RequestOptions::default(),
            "/edgeworkers/v1/ids",
        );
        client
            .execute::<NoBody, Value>(builder, None, &[StatusCode::OK], options)
            .await?;
        Ok(capture.contents())
    }

    #[tokio::test]
    async fn tracing_on() -> Result<()> {
        let logs = run(true).await?;
        assert!(logs.contains("sending request"), "{logs}");
        assert!(logs.contains("edgegrid.request"), "{logs}");
        assert!(logs.contains("/edgeworkers/v1/ids"), "{logs}");
        assert!(!logs.contains("akab-client-token"), "{logs}");
        assert!(!logs.contains("EG1-HMAC-SHA256"), "{logs}");
        Ok(())
    }

    #[tokio::test]
    async fn tracing_dumps_request_and_response() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/edgeworkers/v1/ids"),
                request::body(json_decoded(eq(json!({"name": "redirector-request"})))),
            ])
            .respond_with(
                status_code(201)
                    .insert_header("x-trace-id", "trace-abc")
                    .insert_header("content-type", "application/json")
                    .body(json!({"edgeWorkerId": 42, "name": "redirector-response"}).to_string()),
            ),
        );
        let (capture, _guard) = capture();

        let client = client(&server, true).await?;
        let builder = client.builder(reqwest::Method::POST, "/edgeworkers/v1/ids".into());
        let options = gax::options::internal::set_path_template(
            RequestOptions::default(),
            "/edgeworkers/v1/ids",
        );
        let response = client
            .execute::<Value, Value>(
                builder,
                Some(json!({"name": "redirector-request"})),
                &[StatusCode::CREATED],
                options,
            )
            .await?;
        assert_eq!(response.body()["edgeWorkerId"], json!(42));

        let logs = capture.contents();
        assert!(logs.contains("redirector-request"), "{logs}");
        assert!(logs.contains("redirector-response"), "{logs}");
        assert!(logs.contains("trace-abc"), "{logs}");
        assert!(logs.contains("status=201"), "{logs}");
        assert!(logs.contains("http.request.method=\"POST\""), "{logs}");
        assert!(!logs.contains("test-secret"), "{logs}");
        Ok(())
    }

    #[tokio::test]
    async fn tracing_dumps_error_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/edgeworkers/v1/ids"))
                .respond_with(status_code(404).body(
                    json!({"title": "Not Found", "detail": "missing-edgeworker-id"}).to_string(),
                )),
        );
        let (capture, _guard) = capture();

        let client = client(&server, true).await?;
        let builder = client.builder(reqwest::Method::GET, "/edgeworkers/v1/ids".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, &[StatusCode::OK], RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404));

        let logs = capture.contents();
        assert!(logs.contains("missing-edgeworker-id"), "{logs}");
        assert!(logs.contains("request failed"), "{logs}");
        Ok(())
    }

    #[tokio::test]
    async fn tracing_off() -> Result<()> {
        let logs = run(false).await?;
        assert!(!logs.contains("sending request"), "{logs}");
        Ok(())
    }
}
