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


//! Verify the credential sources through the public API.

#[cfg(test)]
mod tests {
    use edgegrid_auth::credentials::{self, SigningRequest, anonymous, edgegrid};
    use scoped_env::ScopedEnv;
    use std::io::Write;

    type Result = anyhow::Result<()>;

    const EDGERC: &str = r#"
; comments start with a semicolon
# or with a hash
[default]
host = "https://akab-default.luna.akamaiapis.net/"
client_token = akab-default-client-token
client_secret = default-secret
access_token = akab-default-access-token

[ccu]
host = akab-ccu.luna.akamaiapis.net
client_token = akab-ccu-client-token
client_secret = ccu-secret
access_token = akab-ccu-access-token
max_body = 2048
"#;

    fn edgerc() -> anyhow::Result<tempfile::NamedTempFile> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(EDGERC.as_bytes())?;
        file.flush()?;
        Ok(file)
    }

    fn clear_env() -> Vec<ScopedEnv<&'static str>> {
        [
            "AKAMAI_HOST",
            "AKAMAI_CCU_HOST",
            "AKAMAI_EDGERC",
            "AKAMAI_EDGERC_SECTION",
        ]
        .into_iter()
        .map(ScopedEnv::remove)
        .collect()
    }

    async fn authorization(creds: &credentials::Credentials) -> anyhow::Result<String> {
        let request = SigningRequest::new(
            http::Method::GET,
            url::Url::parse("https://akab-test.luna.akamaiapis.net/appsec/v1/configs")?,
        );
        let headers = creds.headers(request).await?;
        let value = headers
            .get(http::header::AUTHORIZATION)
            .map(|v| v.to_str().map(str::to_string))
            .transpose()?;
        Ok(value.unwrap_or_default())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn default_chain_reads_edgerc() -> Result {
        let _env = clear_env();
        let file = edgerc()?;
        let creds = credentials::Builder::default()
            .with_path(file.path())
            .build()?;
        assert_eq!(
            creds.host().await.as_deref(),
            Some("akab-default.luna.akamaiapis.net")
        );
        let value = authorization(&creds).await?;
        assert!(
            value.starts_with("EG1-HMAC-SHA256 client_token=akab-default-client-token;"),
            "{value}"
        );
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn default_chain_section_from_env() -> Result {
        let _env = clear_env();
        let file = edgerc()?;
        let path = file.path().to_string_lossy().to_string();
        let _path = ScopedEnv::set("AKAMAI_EDGERC", path.as_str());
        let _section = ScopedEnv::set("AKAMAI_EDGERC_SECTION", "ccu");
        let creds = credentials::Builder::default().build()?;
        assert_eq!(
            creds.host().await.as_deref(),
            Some("akab-ccu.luna.akamaiapis.net")
        );
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn default_chain_prefers_env() -> Result {
        let _env = clear_env();
        let file = edgerc()?;
        let _host = ScopedEnv::set("AKAMAI_CCU_HOST", "akab-env.luna.akamaiapis.net");
        let _ct = ScopedEnv::set("AKAMAI_CCU_CLIENT_TOKEN", "akab-env-client-token");
        let _cs = ScopedEnv::set("AKAMAI_CCU_CLIENT_SECRET", "env-secret");
        let _at = ScopedEnv::set("AKAMAI_CCU_ACCESS_TOKEN", "akab-env-access-token");
        let creds = credentials::Builder::default()
            .with_section("ccu")
            .with_path(file.path())
            .build()?;
        assert_eq!(
            creds.host().await.as_deref(),
            Some("akab-env.luna.akamaiapis.net")
        );
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn default_chain_missing_section() -> Result {
        let _env = clear_env();
        let file = edgerc()?;
        let err = credentials::Builder::default()
            .with_section("papi")
            .with_path(file.path())
            .build()
            .unwrap_err();
        assert!(err.is_loading(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn explicit_values() -> Result {
        let creds = edgegrid::Builder::new()
            .with_host("akab-test.luna.akamaiapis.net")
            .with_client_token("akab-client-token")
            .with_client_secret("secret")
            .with_access_token("akab-access-token")
            .build()?;
        let value = authorization(&creds).await?;
        assert!(
            value.starts_with(
                "EG1-HMAC-SHA256 client_token=akab-client-token;access_token=akab-access-token;timestamp="
            ),
            "{value}"
        );
        assert!(value.contains(";nonce="), "{value}");
        assert!(value.contains(";signature="), "{value}");
        Ok(())
    }

    #[test]
    fn explicit_values_missing_secret() {
        let err = edgegrid::Builder::new()
            .with_host("akab-test.luna.akamaiapis.net")
            .with_client_token("akab-client-token")
            .with_access_token("akab-access-token")
            .build()
            .unwrap_err();
        assert!(err.is_missing_field(), "{err:?}");
        assert!(err.to_string().contains("client_secret"), "{err}");
    }

    #[tokio::test]
    async fn anonymous_adds_no_headers() -> Result {
        let creds = anonymous::Builder::new().build();
        assert_eq!(authorization(&creds).await?, "");
        assert_eq!(creds.host().await, None);
        Ok(())
    }
}
