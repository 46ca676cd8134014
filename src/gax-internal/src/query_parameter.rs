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

//! Defines traits and helpers to serialize query parameters.
//!
//! Query parameters in the EdgeGrid APIs are strings, numbers, booleans, or
//! lists. Lists are sent as a single comma-separated parameter, e.g.
//! `types=A,AAAA`. Optional parameters are omitted when not set.
//!
//! The types are not intended for application developers to use. They are
//! public because each service crate uses these helpers.

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
pub trait QueryParameter {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder;
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match self {
            None => builder,
            Some(v) => v.add(builder, name),
        }
    }
}

impl QueryParameter for bool {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self)])
    }
}

impl QueryParameter for i64 {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self)])
    }
}

impl QueryParameter for &str {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self)])
    }
}

impl QueryParameter for String {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self)])
    }
}

impl<T: AsRef<str>> QueryParameter for &[T] {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        if self.is_empty() {
            return builder;
        }
        let joined = self.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
        builder.query(&[(name, joined)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn split_query(r: &reqwest::Request) -> Vec<&str> {
        r.url()
            .query()
            .unwrap_or_default()
            .split("&")
            .filter(|p| !p.is_empty())
            .collect()
    }

    fn builder() -> reqwest::Result<reqwest::RequestBuilder> {
        Ok(reqwest::Client::builder()
            .build()?
            .get("https://test.luna.akamaiapis.net/config-dns/v2/unused"))
    }

    #[test]
    fn scalars() -> TestResult {
        let builder = builder()?;
        let builder = true.add(builder, "showAll");
        let builder = 42_i64.add(builder, "version");
        let builder = "abc".add(builder, "search");
        let builder = "x y".to_string().add(builder, "name");
        let request = builder.build()?;
        assert_eq!(
            split_query(&request),
            vec!["showAll=true", "version=42", "search=abc", "name=x+y"]
        );
        Ok(())
    }

    #[test]
    fn optional() -> TestResult {
        let builder = builder()?;
        let builder = None::<bool>.add(builder, "showAll");
        let builder = Some(7_i64).add(builder, "page");
        let request = builder.build()?;
        assert_eq!(split_query(&request), vec!["page=7"]);
        Ok(())
    }

    #[test]
    fn list() -> TestResult {
        let types = vec!["A".to_string(), "AAAA".to_string()];
        let builder = builder()?;
        let builder = types.as_slice().add(builder, "types");
        let empty: &[&str] = &[];
        let builder = empty.add(builder, "sortBy");
        let request = builder.build()?;
        assert_eq!(split_query(&request), vec!["types=A%2CAAAA"]);
        Ok(())
    }
}
