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

use gax::error::Error;

/// The zone does not exist.
///
/// Returned, wrapped in an [Error], when the service cannot find the zone
/// queried by [get_record_list][crate::client::ConfigDns::get_record_list]
/// or [get_record_list_ip][crate::client::ConfigDns::get_record_list_ip].
///
/// # Example
/// ```
/// # use edgegrid_configdns_v2::errors::ZoneError;
/// fn handle(error: edgegrid_configdns_v2::Error) {
///     match ZoneError::find(&error) {
///         Some(z) => println!("create {} before adding {}", z.zone(), z.name()),
///         None => println!("some other error {error}"),
///     }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("zone {zone} does not exist, cannot find records for {name}")]
pub struct ZoneError {
    zone: String,
    name: String,
}

impl ZoneError {
    pub(crate) fn new<Z: Into<String>, N: Into<String>>(zone: Z, name: N) -> Self {
        Self {
            zone: zone.into(),
            name: name.into(),
        }
    }

    /// The zone that does not exist.
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// The record name used in the lookup.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the [ZoneError] wrapped by `error`, if any.
    pub fn find(error: &Error) -> Option<&ZoneError> {
        std::error::Error::source(error).and_then(|e| e.downcast_ref::<ZoneError>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::api_error::ApiError;

    #[test]
    fn find() {
        let error = Error::other(ZoneError::new("example.com", "www.example.com"));
        let got = ZoneError::find(&error);
        assert_eq!(got, Some(&ZoneError::new("example.com", "www.example.com")));
        assert!(error.to_string().contains("zone example.com does not exist"), "{error}");

        let error = Error::service(ApiError::default().set_status_code(404));
        assert_eq!(ZoneError::find(&error), None);
    }

    #[test]
    fn accessors() {
        let error = ZoneError::new("example.com", "mail.example.com");
        assert_eq!(error.zone(), "example.com");
        assert_eq!(error.name(), "mail.example.com");
    }
}
