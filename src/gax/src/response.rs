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

//! Response types.
//!
//! This module contains types related to EdgeGrid service responses. Notably
//! it contains the `Response` type itself.
//!
//! # Examples
//!
//! Creating a response for mocks
//!
//! ```
//! # use edgegrid_gax::Result;
//! # use edgegrid_gax::response::Response;
//! // A type representing an EdgeGrid resource.
//! struct Resource {
//!   // ...
//! }
//!
//! fn make_mock_response(body: Resource) -> Result<Response<Resource>> {
//!     Ok(Response::from(body))
//! }
//! ```

/// Represents an EdgeGrid service response.
///
/// A response from an EdgeGrid service consists of a body (potentially the
/// unit type), the status code, and the HTTP headers.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body.
    ///
    /// The status code is `200 OK` and the headers are empty.
    ///
    /// # Example
    /// ```
    /// # use edgegrid_gax::response::Response;
    /// let response = Response::from("test".to_string());
    /// assert_eq!(response.status(), http::StatusCode::OK);
    /// ```
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    ///
    /// # Example
    /// ```
    /// # use edgegrid_gax::response::{Parts, Response};
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert(http::header::CONTENT_TYPE, http::HeaderValue::from_static("application/json"));
    /// let response = Response::from_parts(
    ///     Parts::new().set_status(http::StatusCode::CREATED).set_headers(headers), ());
    /// assert!(response.headers().get(http::header::CONTENT_TYPE).is_some());
    /// assert_eq!(response.status(), http::StatusCode::CREATED);
    /// ```
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// Returns the status code of this response.
    pub fn status(&self) -> http::StatusCode {
        self.parts.status
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the body associated with this response.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response returning the metadata, and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Consumes the response returning only its body.
    ///
    /// # Example
    /// ```
    /// # use edgegrid_gax::response::Response;
    /// let response = Response::from("test".to_string());
    /// let body = response.into_body();
    /// assert_eq!(body.as_str(), "test");
    /// ```
    pub fn into_body(self) -> T {
        self.body
    }

    /// Transforms the body, preserving the status and headers.
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            parts: self.parts,
            body: f(self.body),
        }
    }
}

/// Component parts of a response.
///
/// # Example
/// ```
/// # use edgegrid_gax::response::Parts;
/// let mut headers = http::HeaderMap::new();
/// headers.insert(http::header::CONTENT_TYPE, http::HeaderValue::from_static("application/json"));
/// let parts = Parts::new().set_headers(headers.clone());
/// assert_eq!(parts.headers, headers);
/// ```
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP status code.
    pub status: http::StatusCode,

    /// The HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Parts {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status code.
    pub fn set_status(mut self, v: http::StatusCode) -> Self {
        self.status = v;
        self
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, HeaderValue, StatusCode};

    #[test]
    fn response_from() {
        let response = Response::from("abc123".to_string());
        assert!(response.headers().is_empty());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body().as_str(), "abc123");
        let body = response.into_body();
        assert_eq!(body.as_str(), "abc123");
    }

    #[test]
    fn response_from_parts() {
        let mut headers = HeaderMap::new();
        headers.insert("x-akamai-request-id", HeaderValue::from_static("r-1"));
        let parts = Parts::new()
            .set_status(StatusCode::CREATED)
            .set_headers(headers.clone());

        let response = Response::from_parts(parts, 42_u32);
        assert_eq!(response.headers(), &headers);
        assert_eq!(response.status(), StatusCode::CREATED);

        let (parts, body) = response.into_parts();
        assert_eq!(parts.headers, headers);
        assert_eq!(parts.status, StatusCode::CREATED);
        assert_eq!(body, 42);
    }

    #[test]
    fn response_map() {
        let response = Response::from_parts(
            Parts::new().set_status(StatusCode::ACCEPTED),
            vec![1, 2, 3],
        );
        let response = response.map(|v| v.len());
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(response.into_body(), 3);
    }
}
