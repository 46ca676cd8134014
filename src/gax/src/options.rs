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

//! Per request options.
//!
//! While the client library defaults are intended to work for most
//! applications, it is sometimes necessary to change the behavior of a single
//! call. Applications sometimes change the timeout for a specific call, add
//! headers required by an account switch key, or replace the default
//! `Content-Type`.
//!
//! # Example
//! ```
//! # use edgegrid_gax::options::RequestOptions;
//! use http::{HeaderName, HeaderValue};
//! let mut options = RequestOptions::default();
//! options.insert_header(
//!     HeaderName::from_static("content-type"),
//!     HeaderValue::from_static("application/merge-patch+json"),
//! );
//! options.set_attempt_timeout(std::time::Duration::from_secs(30));
//! ```

use http::{HeaderMap, HeaderName, HeaderValue};

/// A set of options configuring a single request.
///
/// Headers set here replace any header the client would set by default, that
/// includes `User-Agent`, `Content-Type`, and `Accept`. They never replace
/// the `Authorization` header, which is computed after all other headers are
/// known.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    headers: HeaderMap,
    user_agent: Option<String>,
    attempt_timeout: Option<std::time::Duration>,
    path_template: Option<&'static str>,
}

impl RequestOptions {
    /// Adds (or replaces) a header sent with the request.
    pub fn insert_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    /// Replaces all the extra headers sent with the request.
    pub fn set_headers(&mut self, headers: HeaderMap) {
        self.headers = headers;
    }

    /// The extra headers sent with the request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the per-attempt timeout.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<std::time::Duration> {
        &self.attempt_timeout
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The EdgeGrid client libraries provide a builder for each operation. These
/// builders hold the request parameters, e.g., the security policy targeted by
/// the operation, as well as any options affecting the request, such as
/// additional headers or timeouts.
pub trait RequestOptionsBuilder {
    /// Adds (or replaces) a header sent with the request.
    fn with_header(self, name: HeaderName, value: HeaderValue) -> Self;

    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the per-attempt timeout.
    fn with_attempt_timeout<V: Into<std::time::Duration>>(self, v: V) -> Self;
}

/// Simplify implementation of the [RequestOptionsBuilder] trait in generated
/// code.
///
/// This is an implementation detail, most applications have little need to
/// worry about or use this trait.
pub trait RequestBuilder {
    fn request_options(&mut self) -> &mut RequestOptions;
}

/// Implements the [RequestOptionsBuilder] trait for any [RequestBuilder]
/// implementation.
impl<T> RequestOptionsBuilder for T
where
    T: RequestBuilder,
{
    fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.request_options().insert_header(name, value);
        self
    }

    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }
}

#[doc(hidden)]
pub mod internal {
    //! Helpers used by the generated clients. Not part of the public API.

    use super::RequestOptions;

    /// Records the path template of the operation, used in tracing spans.
    pub fn set_path_template(mut options: RequestOptions, v: &'static str) -> RequestOptions {
        options.path_template = Some(v);
        options
    }

    /// The path template of the operation, if known.
    pub fn path_template(options: &RequestOptions) -> Option<&'static str> {
        options.path_template
    }

    /// Adds a header unless the application already configured one.
    pub fn set_default_header(
        mut options: RequestOptions,
        name: http::HeaderName,
        value: http::HeaderValue,
    ) -> RequestOptions {
        options.headers.entry(name).or_insert(value);
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn request_options() {
        let mut opts = RequestOptions::default();
        assert!(opts.headers().is_empty(), "{opts:?}");
        assert_eq!(opts.user_agent(), &None);
        assert_eq!(opts.attempt_timeout(), &None);

        opts.set_user_agent("test-only");
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));

        let d = Duration::from_secs(123);
        opts.set_attempt_timeout(d);
        assert_eq!(opts.attempt_timeout(), &Some(d));

        opts.insert_header(
            HeaderName::from_static("account-switch-key"),
            HeaderValue::from_static("1-ABCD"),
        );
        assert_eq!(
            opts.headers().get("account-switch-key"),
            Some(&HeaderValue::from_static("1-ABCD"))
        );

        opts.set_headers(HeaderMap::new());
        assert!(opts.headers().is_empty(), "{opts:?}");
    }

    #[derive(Debug, Default)]
    struct TestBuilder {
        request_options: RequestOptions,
    }
    impl RequestBuilder for TestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.request_options
        }
    }

    #[test]
    fn request_options_builder() {
        let builder = TestBuilder::default()
            .with_header(
                HeaderName::from_static("content-type"),
                HeaderValue::from_static("application/json;charset=UTF-8"),
            )
            .with_user_agent("test-only")
            .with_attempt_timeout(Duration::from_secs(5));
        let opts = builder.request_options;
        assert_eq!(
            opts.headers().get("content-type"),
            Some(&HeaderValue::from_static("application/json;charset=UTF-8"))
        );
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));
        assert_eq!(opts.attempt_timeout(), &Some(Duration::from_secs(5)));
    }

    #[test]
    fn path_template() {
        let opts = internal::set_path_template(RequestOptions::default(), "/a/{b}");
        assert_eq!(internal::path_template(&opts), Some("/a/{b}"));
    }

    #[test]
    fn default_header_does_not_override() {
        let mut opts = RequestOptions::default();
        opts.insert_header(
            http::header::ACCEPT,
            HeaderValue::from_static("application/json"),
        );
        let opts = internal::set_default_header(
            opts,
            http::header::ACCEPT,
            HeaderValue::from_static("application/vnd.akamai.cps.enrollments.v11+json"),
        );
        assert_eq!(
            opts.headers().get(http::header::ACCEPT),
            Some(&HeaderValue::from_static("application/json"))
        );

        let opts = internal::set_default_header(
            RequestOptions::default(),
            http::header::ACCEPT,
            HeaderValue::from_static("application/problem+json"),
        );
        assert_eq!(
            opts.headers().get(http::header::ACCEPT),
            Some(&HeaderValue::from_static("application/problem+json"))
        );
    }
}
