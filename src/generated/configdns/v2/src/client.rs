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

/// Implements a client for the Edge DNS Zone Management API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use edgegrid_configdns_v2::client::ConfigDns;
/// let client = ConfigDns::builder().build().await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `ConfigDns` use the `with_*` methods in the type returned
/// by [builder()][ConfigDns::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client sends requests to the host
///   in the EdgeGrid credentials. Applications using a proxy, or testing
///   against a local server, may want to override this default.
/// * [with_credentials()]: by default this client loads the credentials from
///   the environment, or from the `default` section of `~/.edgerc`.
///   Applications with multiple accounts may need to override this default.
///
/// [with_endpoint()]: super::builder::config_dns::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::config_dns::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `ConfigDns` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `ConfigDns` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct ConfigDns {
    inner: std::sync::Arc<dyn super::stub::dynamic::ConfigDns>,
}

impl ConfigDns {
    /// Returns a builder for [ConfigDns].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use edgegrid_configdns_v2::client::ConfigDns;
    /// let client = ConfigDns::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::config_dns::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::config_dns::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::ConfigDns + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = super::transport::ConfigDns::new(config).await?;
        Ok(Self {
            inner: std::sync::Arc::new(inner),
        })
    }

    /// Lists the record sets of a given type in a zone.
    ///
    /// If the zone does not exist the error wraps a
    /// [ZoneError][crate::errors::ZoneError].
    pub fn get_record_list(
        &self,
        req: crate::model::GetRecordListRequest,
    ) -> super::builder::config_dns::GetRecordList {
        super::builder::config_dns::GetRecordList::new(self.inner.clone()).with_request(req)
    }

    /// Returns the record data of the record sets named
    /// [name][crate::model::GetRecordListIpRequest::name].
    ///
    /// For `A` and `AAAA` records these are the IP addresses of the host. The data
    /// is returned in the order the service lists it.
    ///
    /// # Example
    /// ```
    /// # use edgegrid_configdns_v2::client::ConfigDns;
    /// # use edgegrid_configdns_v2::model::GetRecordListIpRequest;
    /// async fn example(client: &ConfigDns) -> gax::Result<()> {
    ///     let response = client
    ///         .get_record_list_ip(
    ///             GetRecordListIpRequest::new()
    ///                 .set_zone("example.com")
    ///                 .set_name("www.example.com")
    ///                 .set_record_type("A"),
    ///         )
    ///         .send()
    ///         .await?;
    ///     for ip in response.rdata {
    ///         println!("{ip}");
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn get_record_list_ip(
        &self,
        req: crate::model::GetRecordListIpRequest,
    ) -> super::builder::config_dns::GetRecordListIp {
        super::builder::config_dns::GetRecordListIp::new(self.inner.clone()).with_request(req)
    }

    /// Returns a record set.
    pub fn get_record_set(
        &self,
        req: crate::model::GetRecordSetRequest,
    ) -> super::builder::config_dns::GetRecordSet {
        super::builder::config_dns::GetRecordSet::new(self.inner.clone()).with_request(req)
    }

    /// Creates a record set in a zone.
    pub fn create_record_set(
        &self,
        req: crate::model::CreateRecordSetRequest,
    ) -> super::builder::config_dns::CreateRecordSet {
        super::builder::config_dns::CreateRecordSet::new(self.inner.clone()).with_request(req)
    }

    /// Replaces the records of a record set.
    pub fn update_record_set(
        &self,
        req: crate::model::UpdateRecordSetRequest,
    ) -> super::builder::config_dns::UpdateRecordSet {
        super::builder::config_dns::UpdateRecordSet::new(self.inner.clone()).with_request(req)
    }

    /// Deletes a record set.
    pub fn delete_record_set(
        &self,
        req: crate::model::DeleteRecordSetRequest,
    ) -> super::builder::config_dns::DeleteRecordSet {
        super::builder::config_dns::DeleteRecordSet::new(self.inner.clone()).with_request(req)
    }
}
