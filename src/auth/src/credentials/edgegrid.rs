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

//! [EdgeGrid] credentials.
//!
//! These credentials sign each request with the `EG1-HMAC-SHA256` algorithm.
//! The signature covers:
//!
//! - the request method, scheme, host, path, and query,
//! - the headers listed in [Builder::with_headers_to_sign],
//! - for `POST` requests, a SHA-256 hash of (a prefix of) the body,
//! - a timestamp and a random nonce.
//!
//! Most applications load these credentials from an `.edgerc` file, see
//! [super::edgerc], or from the environment, see [super::env]. Use this
//! builder when the credentials come from some other source.
//!
//! # Example
//! ```
//! # use edgegrid_auth::credentials::edgegrid::Builder;
//! let credentials = Builder::new()
//!     .with_host("akab-xxxx.luna.akamaiapis.net")
//!     .with_client_token("akab-client-token")
//!     .with_client_secret("client-secret")
//!     .with_access_token("akab-access-token")
//!     .build()?;
//! # Ok::<(), edgegrid_auth::build_errors::Error>(())
//! ```
//!
//! [EdgeGrid]: https://techdocs.akamai.com/developer/docs/authenticate-with-edgegrid

use crate::build_errors::Error as BuildError;
use crate::credentials::dynamic::CredentialsProvider;
use crate::credentials::{Credentials, SigningRequest};
use crate::errors::{non_transient, non_transient_from_str};
use crate::{BuildResult, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use http::{HeaderMap, HeaderValue};
use sha2::{Digest, Sha256};
use std::sync::Arc;

/// The default number of body bytes covered by the content hash.
pub const DEFAULT_MAX_BODY: usize = 131072;

const ALGORITHM: &str = "EG1-HMAC-SHA256";
const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H:%M:%S+0000";

type HmacSha256 = Hmac<Sha256>;

/// A builder for EdgeGrid credentials.
#[derive(Clone, Default)]
pub struct Builder {
    host: Option<String>,
    client_token: Option<String>,
    client_secret: Option<String>,
    access_token: Option<String>,
    max_body: Option<usize>,
    headers_to_sign: Vec<String>,
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("host", &self.host)
            .field("client_token", &self.client_token)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "[censored]"))
            .field("access_token", &self.access_token.as_ref().map(|_| "[censored]"))
            .field("max_body", &self.max_body)
            .field("headers_to_sign", &self.headers_to_sign)
            .finish()
    }
}

impl Builder {
    /// Creates a new builder, all the required fields are unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API host, e.g. `akab-xxxx.luna.akamaiapis.net`.
    ///
    /// A leading `https://` and a trailing `/` are removed.
    pub fn with_host<V: Into<String>>(mut self, v: V) -> Self {
        self.host = Some(v.into());
        self
    }

    pub fn with_client_token<V: Into<String>>(mut self, v: V) -> Self {
        self.client_token = Some(v.into());
        self
    }

    pub fn with_client_secret<V: Into<String>>(mut self, v: V) -> Self {
        self.client_secret = Some(v.into());
        self
    }

    pub fn with_access_token<V: Into<String>>(mut self, v: V) -> Self {
        self.access_token = Some(v.into());
        self
    }

    /// The maximum number of body bytes included in the content hash.
    ///
    /// Defaults to [DEFAULT_MAX_BODY].
    pub fn with_max_body(mut self, v: usize) -> Self {
        self.max_body = Some(v);
        self
    }

    /// The names of the headers covered by the signature, in order.
    ///
    /// Defaults to no headers.
    pub fn with_headers_to_sign<I, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.headers_to_sign = v.into_iter().map(Into::into).collect();
        self
    }

    /// Returns a [Credentials] instance with the configured settings.
    ///
    /// # Errors
    ///
    /// Returns a [BuildError] if any of the host, client token, client secret,
    /// or access token are missing or empty.
    pub fn build(self) -> BuildResult<Credentials> {
        Ok(Credentials {
            inner: Arc::new(self.build_signer()?),
        })
    }

    fn build_signer(self) -> BuildResult<EdgeGridCredentials> {
        fn required(v: Option<String>, name: &'static str) -> BuildResult<String> {
            v.filter(|s| !s.is_empty())
                .ok_or_else(|| BuildError::missing_field(name))
        }
        let host = required(self.host, "host")?;
        let host = host.strip_prefix("https://").unwrap_or(&host);
        let host = host.trim_end_matches('/').to_string();
        if host.is_empty() {
            return Err(BuildError::missing_field("host"));
        }
        Ok(EdgeGridCredentials {
            host,
            client_token: required(self.client_token, "client_token")?,
            client_secret: required(self.client_secret, "client_secret")?,
            access_token: required(self.access_token, "access_token")?,
            max_body: self.max_body.unwrap_or(DEFAULT_MAX_BODY),
            headers_to_sign: self.headers_to_sign,
        })
    }
}

struct EdgeGridCredentials {
    host: String,
    client_token: String,
    client_secret: String,
    access_token: String,
    max_body: usize,
    headers_to_sign: Vec<String>,
}

impl std::fmt::Debug for EdgeGridCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgeGridCredentials")
            .field("host", &self.host)
            .field("client_token", &self.client_token)
            .field("client_secret", &"[censored]")
            .field("access_token", &"[censored]")
            .field("max_body", &self.max_body)
            .field("headers_to_sign", &self.headers_to_sign)
            .finish()
    }
}

impl EdgeGridCredentials {
    /// Computes the `Authorization` header value for a fixed timestamp and
    /// nonce.
    fn authorization(
        &self,
        request: &SigningRequest,
        timestamp: &str,
        nonce: &str,
    ) -> Result<String> {
        let prefix = format!(
            "{ALGORITHM} client_token={};access_token={};timestamp={timestamp};nonce={nonce};",
            self.client_token, self.access_token
        );
        let url = request.url();
        let host = match (url.host_str(), url.port()) {
            (Some(h), Some(p)) => format!("{h}:{p}"),
            (Some(h), None) => h.to_string(),
            (None, _) => {
                return Err(non_transient_from_str(format!(
                    "the request URL ({url}) has no host"
                )));
            }
        };
        let path = match url.query() {
            Some(q) => format!("{}?{q}", url.path()),
            None => url.path().to_string(),
        };
        let data = [
            request.method().as_str(),
            url.scheme(),
            host.as_str(),
            path.as_str(),
            self.canonical_headers(request.headers()).as_str(),
            self.content_hash(request).as_str(),
            prefix.as_str(),
        ]
        .join("\t");

        let signing_key = hmac_base64(self.client_secret.as_bytes(), timestamp)?;
        let signature = hmac_base64(signing_key.as_bytes(), &data)?;
        Ok(format!("{prefix}signature={signature}"))
    }

    fn canonical_headers(&self, headers: &HeaderMap) -> String {
        self.headers_to_sign
            .iter()
            .filter_map(|name| {
                let value = headers.get(name.as_str())?.to_str().ok()?;
                let value = value.split_whitespace().collect::<Vec<_>>().join(" ");
                Some(format!("{}:{value}", name.to_lowercase()))
            })
            .collect::<Vec<_>>()
            .join("\t")
    }

    fn content_hash(&self, request: &SigningRequest) -> String {
        if *request.method() != http::Method::POST || request.body().is_empty() {
            return String::new();
        }
        let body = request.body();
        let end = body.len().min(self.max_body);
        if end < body.len() {
            tracing::debug!(
                len = body.len(),
                max_body = self.max_body,
                "the content hash only covers a prefix of the request body"
            );
        }
        STANDARD.encode(Sha256::digest(&body[..end]))
    }
}

fn hmac_base64(key: &[u8], data: &str) -> Result<String> {
    let mut mac =
        HmacSha256::new_from_slice(key).map_err(|e| non_transient_from_str(e.to_string()))?;
    mac.update(data.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

#[async_trait::async_trait]
impl CredentialsProvider for EdgeGridCredentials {
    async fn headers(&self, request: SigningRequest) -> Result<HeaderMap> {
        let timestamp = chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string();
        let nonce = uuid::Uuid::new_v4().to_string();
        let authorization = self.authorization(&request, &timestamp, &nonce)?;
        let mut value = HeaderValue::from_str(&authorization).map_err(non_transient)?;
        value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(http::header::AUTHORIZATION, value);
        Ok(headers)
    }

    async fn host(&self) -> Option<String> {
        Some(self.host.clone())
    }
}
