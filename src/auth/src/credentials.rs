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

pub mod anonymous;
pub mod edgegrid;
pub mod edgerc;
pub mod env;

use crate::BuildResult;
use crate::Result;
use http::HeaderMap;
use std::future::Future;
use std::sync::Arc;

/// The environment variable holding the default `.edgerc` section.
pub(crate) const SECTION_VAR: &str = "AKAMAI_EDGERC_SECTION";

/// The section used when none is configured.
pub const DEFAULT_SECTION: &str = "default";

/// An implementation of [crate::credentials::CredentialsProvider].
///
/// Represents EdgeGrid [Credentials]. Use these credentials to sign requests
/// sent to EdgeGrid APIs.
///
/// EdgeGrid credentials are long-lived, they are never sent over the wire.
/// Instead, each request carries an `Authorization` header with an HMAC
/// signature computed from the request contents, a timestamp, and a nonce.
/// The service recomputes the signature and rejects requests where they do
/// not match, or where the timestamp is too old.
///
/// Because the signature covers the request body and some of the headers, the
/// headers must be computed for each request, after the request is fully
/// formed.
///
/// [Credentials]: https://techdocs.akamai.com/developer/docs/set-up-authentication-credentials
#[derive(Clone, Debug)]
pub struct Credentials {
    // Credentials are shared across threads and cloned into each client, hence
    // `Arc` and not `Rc` or `Box`.
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: crate::credentials::CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Computes the headers to authenticate `request`.
    pub async fn headers(&self, request: SigningRequest) -> Result<HeaderMap> {
        self.inner.headers(request).await
    }

    /// The API host associated with these credentials, if any.
    pub async fn host(&self) -> Option<String> {
        self.inner.host().await
    }
}

/// The components of a request covered by the signature.
///
/// The client libraries create one of these for each request, after all the
/// headers and the body are known.
#[derive(Clone, Debug, PartialEq)]
pub struct SigningRequest {
    method: http::Method,
    url: url::Url,
    headers: HeaderMap,
    body: bytes::Bytes,
}

impl SigningRequest {
    /// Creates a request with the given method and URL, no headers, and an
    /// empty body.
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: bytes::Bytes::new(),
        }
    }

    /// Sets the request headers.
    pub fn set_headers(mut self, v: HeaderMap) -> Self {
        self.headers = v;
        self
    }

    /// Sets the request body.
    pub fn set_body<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.body = v.into();
        self
    }

    pub fn method(&self) -> &http::Method {
        &self.method
    }

    pub fn url(&self) -> &url::Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &bytes::Bytes {
        &self.body
    }
}

/// Computes the authentication headers for EdgeGrid requests.
///
/// # Notes
///
/// Application developers who directly use the Auth SDK can use this trait,
/// along with [crate::credentials::Credentials::from()] to mock the
/// credentials. Application developers who use the client libraries directly
/// should not need this functionality.
pub trait CredentialsProvider: std::fmt::Debug {
    /// Asynchronously constructs the auth headers for `request`.
    fn headers(&self, request: SigningRequest) -> impl Future<Output = Result<HeaderMap>> + Send;

    /// The API host associated with the credentials, if any.
    ///
    /// The clients send requests to `https://{host}` unless the application
    /// overrides the endpoint.
    fn host(&self) -> impl Future<Output = Option<String>> + Send;
}

pub(crate) mod dynamic {
    use super::{HeaderMap, Result, SigningRequest};

    /// A dyn-compatible, crate-private version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        async fn headers(&self, request: SigningRequest) -> Result<HeaderMap>;

        async fn host(&self) -> Option<String> {
            None
        }
    }

    /// The public CredentialsProvider implements the dyn-compatible CredentialsProvider.
    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self, request: SigningRequest) -> Result<HeaderMap> {
            T::headers(self, request).await
        }

        async fn host(&self) -> Option<String> {
            T::host(self).await
        }
    }
}

/// A builder for the default credentials.
///
/// The default credentials are loaded from the first source that is
/// configured:
///
/// 1. The environment, if `AKAMAI_HOST` (or `AKAMAI_{SECTION}_HOST`) is set.
///    See [env::Builder].
/// 2. The `.edgerc` file, at `$AKAMAI_EDGERC` or `$HOME/.edgerc`. See
///    [edgerc::Builder].
///
/// The section defaults to the value of `$AKAMAI_EDGERC_SECTION`, or
/// `default` if that is not set.
///
/// # Example
/// ```no_run
/// # use edgegrid_auth::credentials::Builder;
/// let credentials = Builder::default().with_section("papi").build()?;
/// # Ok::<(), edgegrid_auth::build_errors::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    section: Option<String>,
    path: Option<std::path::PathBuf>,
}

impl Builder {
    /// Selects the section of the `.edgerc` file, or the environment prefix.
    pub fn with_section<V: Into<String>>(mut self, v: V) -> Self {
        self.section = Some(v.into());
        self
    }

    /// Overrides the location of the `.edgerc` file.
    pub fn with_path<V: Into<std::path::PathBuf>>(mut self, v: V) -> Self {
        self.path = Some(v.into());
        self
    }

    /// Returns a [Credentials] instance from the first configured source.
    pub fn build(self) -> BuildResult<Credentials> {
        let section = self
            .section
            .or_else(|| std::env::var(SECTION_VAR).ok())
            .unwrap_or_else(|| DEFAULT_SECTION.to_string());
        let env = env::Builder::new().with_section(&section);
        if env.is_configured() {
            tracing::debug!(section, "loading EdgeGrid credentials from the environment");
            return env.build();
        }
        let mut edgerc = edgerc::Builder::new().with_section(&section);
        if let Some(path) = self.path {
            edgerc = edgerc.with_path(path);
        }
        tracing::debug!(section, "loading EdgeGrid credentials from the .edgerc file");
        edgerc.build()
    }
}
