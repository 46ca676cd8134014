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

use serde::{Deserialize, Deserializer, Serialize};

/// The problem details returned by EdgeGrid services on failures.
///
/// The `status_code` is always the HTTP status code of the response that
/// carried this payload, even if the payload itself omitted (or misreported)
/// the `status` field. Any field not modeled here is preserved in
/// [extensions][ApiError::extensions].
///
/// Two `ApiError` values compare equal if they have the same status code and
/// render the same message, regardless of their extensions.
///
/// # Example
/// ```
/// # use edgegrid_gax::error::api_error::ApiError;
/// let error = ApiError::default()
///     .set_title("Not Found")
///     .set_type("https://problems.example.com/not-found")
///     .set_detail("the configuration does not exist")
///     .set_status_code(404);
/// assert_eq!(
///     error.to_string(),
///     "Title: Not Found; Type: https://problems.example.com/not-found; Details: the configuration does not exist"
/// );
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ApiError {
    /// A URI identifying the problem type.
    #[serde(
        rename = "type",
        deserialize_with = "nullable",
        skip_serializing_if = "String::is_empty"
    )]
    pub r#type: String,

    /// A short, human-readable summary of the problem.
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// A human-readable explanation of this specific occurrence.
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub detail: String,

    /// A URI identifying this specific occurrence.
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub instance: String,

    /// The HTTP status code.
    #[serde(
        rename = "status",
        deserialize_with = "lenient_status",
        skip_serializing_if = "is_zero"
    )]
    pub status_code: u16,

    /// Any additional members of the problem details object.
    #[serde(flatten)]
    pub extensions: serde_json::Map<String, serde_json::Value>,
}

impl ApiError {
    /// Sets the value of [r#type][ApiError::type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [title][ApiError::title].
    pub fn set_title<T: Into<String>>(mut self, v: T) -> Self {
        self.title = v.into();
        self
    }

    /// Sets the value of [detail][ApiError::detail].
    pub fn set_detail<T: Into<String>>(mut self, v: T) -> Self {
        self.detail = v.into();
        self
    }

    /// Sets the value of [instance][ApiError::instance].
    pub fn set_instance<T: Into<String>>(mut self, v: T) -> Self {
        self.instance = v.into();
        self
    }

    /// Sets the value of [status_code][ApiError::status_code].
    pub fn set_status_code(mut self, v: u16) -> Self {
        self.status_code = v;
        self
    }

    /// Adds (or replaces) an extension member.
    pub fn set_extension<K, V>(mut self, k: K, v: V) -> Self
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.extensions.insert(k.into(), v.into());
        self
    }

    /// Returns the extension member named `k`, if present.
    pub fn extension(&self, k: &str) -> Option<&serde_json::Value> {
        self.extensions.get(k)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Title: {}; Type: {}; Details: {}",
            self.title, self.r#type, self.detail
        )
    }
}

impl PartialEq for ApiError {
    fn eq(&self, other: &Self) -> bool {
        self.status_code == other.status_code && self.to_string() == other.to_string()
    }
}

impl std::error::Error for ApiError {}

impl TryFrom<&bytes::Bytes> for ApiError {
    type Error = serde_json::Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        serde_json::from_slice(value)
    }
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Some services report the status as a string, or omit it. The HTTP status
/// replaces this value anyway, so anything that is not a valid status decodes
/// as zero instead of discarding the rest of the problem details.
fn lenient_status<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let status = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n.as_u64().and_then(|v| u16::try_from(v).ok()),
        serde_json::Value::String(s) => s.trim().parse::<u16>().ok(),
        _ => None,
    };
    Ok(status.unwrap_or_default())
}

fn is_zero(v: &u16) -> bool {
    *v == 0
}
