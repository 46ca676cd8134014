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
    use edgegrid_configdns_v2::client::ConfigDns;
    use edgegrid_configdns_v2::model::*;
    use gax::options::RequestOptions;
    use gax::response::Response;

    mockall::mock! {
        #[derive(Debug)]
        ConfigDns {}
        impl edgegrid_configdns_v2::stub::ConfigDns for ConfigDns {
            async fn get_record_list_ip(&self, req: GetRecordListIpRequest, options: RequestOptions) -> gax::Result<Response<GetRecordListIpResponse>>;
            async fn delete_record_set(&self, req: DeleteRecordSetRequest, options: RequestOptions) -> gax::Result<Response<()>>;
        }
    }

    #[tokio::test]
    async fn mock_get_record_list_ip() -> anyhow::Result<()> {
        let mut mock = MockConfigDns::new();
        mock.expect_get_record_list_ip()
            .withf(|r, _| r.zone == "example.com" && r.name == "www.example.com")
            .return_once(|_, _| {
                let mut response = GetRecordListIpResponse::default();
                response.rdata = vec!["10.0.0.2".to_string()];
                Ok(Response::from(response))
            });

        let client = ConfigDns::from_stub(mock);
        let response = client
            .get_record_list_ip(
                GetRecordListIpRequest::new()
                    .set_zone("example.com")
                    .set_name("www.example.com")
                    .set_record_type("A"),
            )
            .send()
            .await?;
        assert_eq!(response.rdata, vec!["10.0.0.2"]);
        Ok(())
    }

    #[tokio::test]
    async fn mock_delete_record_set() -> anyhow::Result<()> {
        let mut mock = MockConfigDns::new();
        mock.expect_delete_record_set()
            .times(1)
            .returning(|_, _| Ok(Response::from(())));

        let client = ConfigDns::from_stub(mock);
        client
            .delete_record_set(
                DeleteRecordSetRequest::new()
                    .set_zone("example.com")
                    .set_name("www.example.com")
                    .set_record_type("A"),
            )
            .send()
            .await?;
        Ok(())
    }
}
