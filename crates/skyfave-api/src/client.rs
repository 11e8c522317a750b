//! Generic REST request framework shared by the concrete API clients.
//!
//! A [`Provider`] supplies the per-service capabilities (host, API key,
//! default scheme); [`RestClient`] owns the HTTP transport; and
//! [`RequestBuilder`] turns a URI template plus named parameters into one
//! executed GET, deserialized into the declared response type.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::encode::uri_encode;
use crate::error::ApiError;

/// Parameter name reserved for the provider API key.
const KEY_PARAM: &str = "key";

/// Capabilities of one external service: where it lives and how to
/// authenticate against it.
#[derive(Debug, Clone, Deserialize)]
pub struct Provider {
    pub name: String,
    pub host: String,
    pub key: String,
    /// Default scheme for requests; individual builders may override.
    #[serde(default = "default_secure")]
    pub secure: bool,
}

fn default_secure() -> bool {
    true
}

/// Shared HTTP transport with a configured timeout.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
}

impl RestClient {
    /// Create a transport with the given connect/read timeout.
    pub fn new(timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Unavailable(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { http })
    }

    /// Begin a GET request against a provider. The only way to obtain a
    /// builder; the template uses `{name}` placeholders for substitution.
    pub fn get<'a, T: DeserializeOwned>(
        &'a self,
        provider: &'a Provider,
        uri_template: &str,
    ) -> RequestBuilder<'a, T> {
        RequestBuilder {
            http: &self.http,
            provider,
            uri_template: uri_template.to_string(),
            params: HashMap::new(),
            secure: provider.secure,
            _response: PhantomData,
        }
    }
}

/// Accumulates a URI template, named parameters, and a scheme choice for a
/// single GET request. Building has no side effects; only [`execute`]
/// performs I/O.
///
/// [`execute`]: RequestBuilder::execute
pub struct RequestBuilder<'a, T> {
    http: &'a Client,
    provider: &'a Provider,
    uri_template: String,
    params: HashMap<String, String>,
    secure: bool,
    _response: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> RequestBuilder<'_, T> {
    /// Store a named parameter, encoding the value for URL embedding.
    /// Repeating a name overwrites the previous value.
    pub fn param(mut self, name: &str, value: impl std::fmt::Display) -> Result<Self, ApiError> {
        if name.is_empty() {
            return Err(ApiError::InvalidParameter(
                "parameter name must not be empty".to_string(),
            ));
        }
        self.params.insert(name.to_string(), uri_encode(&value.to_string()));
        Ok(self)
    }

    /// Use plain HTTP for this request. Last scheme call wins.
    pub fn use_http(mut self) -> Self {
        self.secure = false;
        self
    }

    /// Use HTTPS for this request. Last scheme call wins.
    pub fn use_https(mut self) -> Self {
        self.secure = true;
        self
    }

    /// Substitute all `{name}` placeholders. The reserved `key` placeholder
    /// always resolves to the provider API key, regardless of caller params.
    fn expand_template(&self) -> Result<String, ApiError> {
        let mut expanded = String::with_capacity(self.uri_template.len());
        let mut rest = self.uri_template.as_str();
        while let Some(start) = rest.find('{') {
            expanded.push_str(&rest[..start]);
            let tail = &rest[start + 1..];
            let end = tail.find('}').ok_or_else(|| {
                ApiError::InvalidParameter(format!(
                    "unterminated placeholder in template: {}",
                    self.uri_template
                ))
            })?;
            let name = &tail[..end];
            let value = if name == KEY_PARAM {
                Some(&self.provider.key)
            } else {
                self.params.get(name)
            };
            let value =
                value.ok_or_else(|| ApiError::MissingParameter(name.to_string()))?;
            expanded.push_str(value);
            rest = &tail[end + 1..];
        }
        expanded.push_str(rest);
        Ok(expanded)
    }

    /// Assemble the absolute request URL from scheme, host, and expanded
    /// template.
    fn assemble_url(&self) -> Result<Url, ApiError> {
        let scheme = if self.secure { "https" } else { "http" };
        let path = self.expand_template()?;
        let url = format!(
            "{}://{}/{}",
            scheme,
            self.provider.host,
            path.trim_start_matches('/')
        );
        Ok(Url::parse(&url)?)
    }

    /// Issue the GET and deserialize the response body.
    ///
    /// Placeholder resolution happens before any network I/O; an unset
    /// placeholder fails fast with `MissingParameter`. Unknown fields in
    /// the response body are ignored. The builder is not consumed, but
    /// re-invoking re-issues the request; nothing is cached.
    pub async fn execute(&self) -> Result<T, ApiError> {
        let url = self.assemble_url()?;
        tracing::debug!(provider = %self.provider.name, "GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Unavailable(format!(
                "{} returned status {}",
                self.provider.name, status
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(provider = %self.provider.name, "response decode failed: {}", e);
            ApiError::MalformedResponse(e.to_string())
        })
    }
}
