// Copyright 2024 Google LLC
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

use auth::credentials::{Credentials, SigningRequest};
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use gax::error::api_error::ApiError;
use gax::options::RequestOptions;
use gax::response::{Parts, Response};
use http::{HeaderMap, StatusCode};
use reqwest::header::{CONTENT_TYPE, HeaderValue, USER_AGENT};
use tracing::Instrument;

const DEFAULT_USER_AGENT: &str = concat!("edgegrid-rust/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    user_agent: Option<String>,
    tracing: bool,
}

impl ReqwestClient {
    /// Creates a client from the configuration.
    ///
    /// Without an explicit endpoint, requests go to `https://{host}`, where
    /// `host` comes from the credentials.
    pub async fn new(config: crate::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let tracing = crate::tracing_enabled(&config);
        let cred = Self::make_credentials(&config)?;
        let endpoint = match config.endpoint {
            Some(e) => e,
            None => match cred.host().await {
                Some(host) => format!("https://{host}"),
                None => {
                    return Err(BuilderError::endpoint(
                        "no endpoint configured and the credentials do not define a host",
                    ));
                }
            },
        };
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        Ok(Self {
            inner,
            cred,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            user_agent: config.user_agent,
            tracing,
        })
    }

    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
    }

    /// Sends a request and decodes the response.
    ///
    /// Responses with a status code in `accepted` are decoded as `O`, all
    /// other responses are returned as errors.
    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        accepted: &[StatusCode],
        options: RequestOptions,
    ) -> Result<Response<O>> {
        if !self.tracing {
            return self.request_attempt(builder, body, accepted, &options).await;
        }
        let span = tracing::info_span!(
            "edgegrid.request",
            http.request.method = tracing::field::Empty,
            url.template = gax::options::internal::path_template(&options),
            http.response.status_code = tracing::field::Empty,
        );
        let response = self
            .request_attempt(builder, body, accepted, &options)
            .instrument(span.clone())
            .await;
        match &response {
            Ok(r) => {
                span.record("http.response.status_code", r.status().as_u16());
            }
            Err(e) => {
                if let Some(code) = e.http_status_code() {
                    span.record("http.response.status_code", code);
                }
                tracing::debug!(parent: &span, error = %e, "request failed");
            }
        }
        response
    }

    fn make_credentials(
        config: &crate::options::ClientConfig,
    ) -> gax::client_builder::Result<Credentials> {
        if let Some(c) = config.cred.clone() {
            return Ok(c);
        }
        auth::credentials::Builder::default()
            .build()
            .map_err(BuilderError::cred)
    }

    async fn request_attempt<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        accepted: &[StatusCode],
        options: &RequestOptions,
    ) -> Result<Response<O>> {
        if let Some(body) = body {
            let payload = serde_json::to_vec(&body).map_err(Error::ser)?;
            builder = builder.body(payload);
        }
        let mut request = builder.build().map_err(Error::ser)?;

        let headers = request.headers_mut();
        for (name, value) in options.headers() {
            headers.insert(name.clone(), value.clone());
        }
        if !headers.contains_key(USER_AGENT) {
            headers.insert(USER_AGENT, self.user_agent(options)?);
        }
        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        if let Some(timeout) = options.attempt_timeout() {
            *request.timeout_mut() = Some(*timeout);
        }

        let payload = request
            .body()
            .and_then(reqwest::Body::as_bytes)
            .map(bytes::Bytes::copy_from_slice)
            .unwrap_or_default();
        let signing = SigningRequest::new(request.method().clone(), request.url().clone())
            .set_headers(request.headers().clone())
            .set_body(payload.clone());
        let auth_headers = self
            .cred
            .headers(signing)
            .await
            .map_err(Error::authentication)?;
        request.headers_mut().extend(auth_headers);

        if self.tracing {
            tracing::Span::current().record("http.request.method", request.method().as_str());
            // The authorization header is marked as sensitive, and its value
            // is not included in the `Debug` output.
            tracing::debug!(
                method = %request.method(),
                url = %request.url(),
                headers = ?request.headers(),
                body = %String::from_utf8_lossy(&payload),
                "sending request"
            );
        }

        let response = self
            .inner
            .execute(request)
            .await
            .map_err(Self::map_send_error)?;
        let (status, headers, body) = collect(response).await?;
        if self.tracing {
            tracing::debug!(
                status = status.as_u16(),
                headers = ?headers,
                body = %String::from_utf8_lossy(&body),
                "received response"
            );
        }
        if !accepted.contains(&status) {
            return Err(decode_error(status, headers, body));
        }
        decode_response(status, headers, body)
    }

    fn user_agent(&self, options: &RequestOptions) -> Result<HeaderValue> {
        let prefix = options.user_agent().as_ref().or(self.user_agent.as_ref());
        let value = match prefix {
            Some(p) => format!("{p} {DEFAULT_USER_AGENT}"),
            None => DEFAULT_USER_AGENT.to_string(),
        };
        HeaderValue::from_str(&value).map_err(Error::ser)
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

/// A request body for operations that do not send one.
#[derive(serde::Serialize)]
pub struct NoBody;

/// Converts an unexpected response into an error.
///
/// The body is decoded as the problem details shared by all EdgeGrid APIs. The
/// status code in the error always matches the HTTP response. If the body is
/// not a JSON object the error includes the raw payload instead.
pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let (status, headers, body) = collect(response).await?;
    Err(decode_error(status, headers, body))
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    let (status, headers, body) = collect(response).await?;
    decode_response(status, headers, body)
}

async fn collect(response: reqwest::Response) -> Result<(StatusCode, HeaderMap, bytes::Bytes)> {
    let status = response.status();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();
    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();
    Ok((status, parts.headers, body))
}

fn decode_error(status: StatusCode, headers: HeaderMap, body: bytes::Bytes) -> Error {
    let status_code = status.as_u16();
    match ApiError::try_from(&body) {
        Ok(api_error) => Error::service_with_http_metadata(
            api_error.set_status_code(status_code),
            Some(headers),
            Some(body),
        ),
        Err(e) => {
            tracing::warn!(status_code, error = %e, "cannot decode the error response body");
            Error::http(status_code, headers, body)
        }
    }
}

fn decode_response<O: serde::de::DeserializeOwned + Default>(
    status: StatusCode,
    headers: HeaderMap,
    body: bytes::Bytes,
) -> Result<Response<O>> {
    // Some operations (e.g. 204 No Content) return no body at all.
    let response = match body {
        content if content.is_empty() && status == StatusCode::NO_CONTENT => O::default(),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser)?,
    };
    Ok(Response::from_parts(
        Parts::new().set_status(status).set_headers(headers),
        response,
    ))
}
