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

/// The default implementation for each method in the service stub traits.
pub async fn unimplemented_stub<T: Send>() -> gax::Result<gax::response::Response<T>> {
    unimplemented!(concat!(
        "the stub traits provide a default implementation for each operation, ",
        "so services can gain new operations without breaking existing mocks. ",
        "The clients in this workspace override every method, this panic only ",
        "happens when a test mocks a client stub and calls an operation the ",
        "mock does not implement. Implement that operation in the mock."
    ));
}
