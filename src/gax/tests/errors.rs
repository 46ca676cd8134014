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
    use edgegrid_gax::error::api_error::ApiError;
    use edgegrid_gax::error::{CredentialsError, Error};
    use edgegrid_gax::validation::{self, Errors};
    use http::{HeaderMap, HeaderValue};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::error::Error as _;
    use test_case::test_case;

    type Result = anyhow::Result<()>;

    #[test]
    fn service_error_keeps_metadata() -> Result {
        let payload = bytes::Bytes::from(
            json!({
                "type": "https://problems.luna.akamaiapis.net/appsec/error-types/NOT-FOUND",
                "title": "Not Found",
                "detail": "Security policy 'abc_123' not found",
                "status": 404,
                "policyId": "abc_123",
            })
            .to_string(),
        );
        let details = ApiError::try_from(&payload)?;
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", HeaderValue::from_static("r-123"));

        let error = Error::service_with_http_metadata(
            details.clone(),
            Some(headers.clone()),
            Some(payload.clone()),
        );
        assert_eq!(error.api_error(), Some(&details));
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.http_payload(), Some(&payload));
        assert!(!error.is_transport(), "{error:?}");
        assert_eq!(
            details.extension("policyId"),
            Some(&json!("abc_123")),
            "{details:?}"
        );

        let got = error.to_string();
        assert!(got.contains("status 404"), "{got}");
        assert!(got.contains("Security policy 'abc_123' not found"), "{got}");
        Ok(())
    }

    #[test]
    fn http_error_without_problem_details() {
        let payload = bytes::Bytes::from_static(b"<html>Bad Gateway</html>");
        let error = Error::http(502, HeaderMap::new(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(error.api_error().is_none(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(502));
        assert_eq!(error.http_payload(), Some(&payload));
        assert_eq!(
            error.to_string(),
            "the HTTP transport reports a [502] error: <html>Bad Gateway</html>"
        );
    }

    #[test]
    fn io_error() {
        let source = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        let error = Error::io(source);
        assert!(error.is_io(), "{error:?}");
        assert!(error.is_transport(), "{error:?}");
        assert_eq!(error.http_status_code(), None);
        assert!(error.source().is_some(), "{error:?}");
    }

    #[test]
    fn validation_error() {
        let errors = Errors::new()
            .field("ConfigID", validation::required(&0_i64))
            .field("Version", validation::required(&0_i32));
        let error = Error::validation(errors);
        assert!(error.is_validation(), "{error:?}");
        assert_eq!(error.http_status_code(), None);
        assert_eq!(
            error.to_string(),
            "struct validation: ConfigID: cannot be blank; Version: cannot be blank."
        );
        let source = error
            .source()
            .and_then(|e| e.downcast_ref::<Errors>())
            .expect("the source should be the validation errors");
        assert!(source.contains("ConfigID"), "{source:?}");
    }

    #[test_case(true)]
    #[test_case(false)]
    fn authentication_error(transient: bool) {
        let error = Error::authentication(CredentialsError::from_msg(
            transient,
            "missing client_token",
        ));
        assert!(error.is_authentication(), "{error:?}");
        let source = error
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>())
            .expect("the source should be a credentials error");
        assert_eq!(source.is_transient(), transient);
    }

    #[test_case(json!({"title": null, "status": null}), "", 0; "nulls")]
    #[test_case(json!({"title": "Forbidden", "status": 403}), "Forbidden", 403; "complete")]
    #[test_case(json!({}), "", 0; "empty")]
    fn problem_details(input: serde_json::Value, title: &str, status: u16) -> Result {
        let got = serde_json::from_value::<ApiError>(input)?;
        assert_eq!(got.title, title);
        assert_eq!(got.status_code, status);
        Ok(())
    }
}
