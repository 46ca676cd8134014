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


use serde::{Deserialize, Serialize};

/// The problem details returned by the EdgeWorkers service.
///
/// The service includes more information than the `{type, title, detail,
/// status}` fields captured by [gax::error::ApiError]. Use [Error::from_error]
/// to recover all of them from a failed call.
///
/// # Example
/// ```
/// # use edgegrid_edgeworkers_v1::errors;
/// fn report(e: &gax::error::Error) {
///     match errors::Error::from_error(e) {
///         Some(details) if details.status == 404 => println!("not found: {}", details.detail),
///         Some(details) => println!("{details}"),
///         None => println!("{e}"),
///     }
/// }
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Error {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub detail: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub instance: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub status: u16,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub method: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub server_ip: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_ip: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub request_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub request_time: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub authz_realm: String,
    /// Always rendered, even when the service omits it.
    pub additional_detail: AdditionalDetail,
}

/// Additional details about an EdgeWorkers [Error].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AdditionalDetail {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub request_id: String,
}

fn is_zero(v: &u16) -> bool {
    *v == 0
}

impl Error {
    /// Extracts the service problem details from a client library error.
    ///
    /// Returns `None` if the error did not come from an HTTP response, for
    /// example, a validation error or a connection failure.
    ///
    /// If the response body is not a valid problem details object the
    /// returned value contains the raw body as its `title`. The `status`
    /// field always holds the HTTP status code when the body omits it.
    pub fn from_error(e: &gax::error::Error) -> Option<Self> {
        let status = e.http_status_code()?;
        let payload = e.http_payload()?;
        let mut error = match serde_json::from_slice::<Self>(payload) {
            Ok(error) => error,
            Err(err) => {
                tracing::warn!(status, error = %err, "could not decode the EdgeWorkers error");
                Self {
                    title: String::from_utf8_lossy(payload).into_owned(),
                    ..Default::default()
                }
            }
        };
        if error.status == 0 {
            error.status = status;
        }
        Some(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        match self.serialize(&mut serializer) {
            Ok(()) => write!(f, "API error: \n{}", String::from_utf8_lossy(&buf)),
            Err(e) => write!(f, "error marshaling API error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

/// Two errors are equal when they have the same status and render the same.
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.status == other.status && self.to_string() == other.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use gax::error::api_error::ApiError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn not_found() -> serde_json::Value {
        json!({
            "type": "/edgeworkers/error-types/edgeworkers-not-found",
            "title": "The given resource could not be found.",
            "detail": "Unable to find the requested EdgeWorker ID",
            "instance": "/edgeworkers/error-instances/fd3d7f4e",
            "status": 404,
            "errorCode": "EW2002",
            "method": "GET",
            "requestId": "1a2b3c",
            "additionalDetail": {"requestId": "1a2b3c"},
        })
    }

    fn service_error(status: u16, body: Bytes) -> gax::error::Error {
        let api_error = ApiError::default().set_status_code(status);
        gax::error::Error::service_with_http_metadata(api_error, None, Some(body))
    }

    #[test]
    fn from_problem_details() -> anyhow::Result<()> {
        let body = Bytes::from(serde_json::to_vec(&not_found())?);
        let got = Error::from_error(&service_error(404, body)).expect("HTTP errors have details");
        assert_eq!(got.status, 404);
        assert_eq!(got.error_code, "EW2002");
        assert_eq!(got.detail, "Unable to find the requested EdgeWorker ID");
        assert_eq!(got.additional_detail.request_id, "1a2b3c");
        Ok(())
    }

    #[test]
    fn from_invalid_body() {
        let body = Bytes::from_static(b"<html>Bad Gateway</html>");
        let e = gax::error::Error::http(502, http::HeaderMap::new(), body);
        let got = Error::from_error(&e).expect("HTTP errors have details");
        assert_eq!(got.title, "<html>Bad Gateway</html>");
        assert_eq!(got.status, 502);
        assert_eq!(got.detail, "");
    }

    #[test]
    fn missing_status_uses_http_status() {
        let body = Bytes::from_static(br#"{"title": "Forbidden"}"#);
        let got = Error::from_error(&service_error(403, body)).expect("HTTP errors have details");
        assert_eq!(got.status, 403);
        assert_eq!(got.title, "Forbidden");
    }

    #[test]
    fn not_an_http_error() {
        let e = gax::error::Error::validation("EdgeWorkerID: cannot be blank.");
        assert!(Error::from_error(&e).is_none(), "{e:?}");
    }

    #[test]
    fn display() {
        let error = Error {
            title: "Not Found".to_string(),
            status: 404,
            ..Default::default()
        };
        assert_eq!(
            error.to_string(),
            "API error: \n{\n\t\"title\": \"Not Found\",\n\t\"status\": 404,\n\t\"additionalDetail\": {}\n}"
        );
    }

    #[test]
    fn display_additional_detail() -> anyhow::Result<()> {
        let mut error = Error {
            title: "Unauthorized".to_string(),
            status: 401,
            ..Default::default()
        };
        error.additional_detail.request_id = "7d9e".to_string();
        let got = error.to_string();
        assert!(
            got.ends_with("\t\"additionalDetail\": {\n\t\t\"requestId\": \"7d9e\"\n\t}\n}"),
            "{got}"
        );

        let absent: Error = serde_json::from_value(json!({"title": "Unauthorized", "status": 401}))?;
        let empty: Error = serde_json::from_value(
            json!({"title": "Unauthorized", "status": 401, "additionalDetail": {}}),
        )?;
        assert_eq!(absent, empty);
        assert!(absent.to_string().contains("\"additionalDetail\": {}"), "{absent}");
        assert_ne!(absent, error);
        Ok(())
    }

    #[test]
    fn equality() -> anyhow::Result<()> {
        let a: Error = serde_json::from_value(not_found())?;
        let mut b = a.clone();
        assert_eq!(a, b);

        b.request_time = "2024-01-01T00:00:00Z".to_string();
        assert_ne!(a, b);

        let mut c = a.clone();
        c.status = 500;
        assert_ne!(a, c);
        Ok(())
    }
}
