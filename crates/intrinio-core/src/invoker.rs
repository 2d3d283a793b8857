//! Generic typed REST invoker.
//!
//! Every endpoint is an [`Operation`]: a typed request that knows its
//! [`RequestDescriptor`] and the type its JSON body deserializes into.
//! [`ApiClient`] runs any operation the same way:
//!
//! ```text
//! Operation ──validate──▶ RequestDescriptor ──build──▶ HttpRequest
//!                                                         │
//!                                                    HttpClient
//!                                                         │
//!            ApiResponse<T> ◀──deserialize── ErrorFactory ◀┘
//! ```
//!
//! Nothing is retried or cached here; transport timeouts come from the
//! configuration and are enforced by the [`HttpClient`].

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::Configuration;
use crate::descriptor::RequestDescriptor;
use crate::error::ApiError;
use crate::http_client::{HttpClient, HttpResponse, ReqwestHttpClient};

/// One logical API operation.
pub trait Operation {
    type Response: DeserializeOwned;

    /// Operation name reported in errors, logs and to the [`ErrorFactory`].
    const NAME: &'static str;

    fn descriptor(&self) -> RequestDescriptor;

    /// Argument checks that cannot be expressed by the descriptor.
    fn validate(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

/// Deserialized payload together with the HTTP status and headers.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: u16,
    pub headers: BTreeMap<String, String>,
}

impl<T> ApiResponse<T> {
    pub fn into_data(self) -> T {
        self.data
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

type ErrorFactoryFn = dyn Fn(&'static str, &HttpResponse) -> Option<ApiError> + Send + Sync;

/// Hook that may turn a raw response into an error.
///
/// It sees every response before deserialization. Returning `Some` aborts the
/// call with that error. The default never converts, leaving the status to
/// the caller through [`ApiResponse::status`].
#[derive(Clone)]
pub struct ErrorFactory(Arc<ErrorFactoryFn>);

impl ErrorFactory {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn(&'static str, &HttpResponse) -> Option<ApiError> + Send + Sync + 'static,
    {
        Self(Arc::new(factory))
    }

    pub fn passthrough() -> Self {
        Self::new(|_, _| None)
    }

    /// Converts every non-2xx response into [`ApiError::Api`].
    pub fn status_errors() -> Self {
        Self::new(|operation, response| {
            (!response.is_success())
                .then(|| ApiError::api(operation, response.status, response.body.clone()))
        })
    }

    pub fn create(&self, operation: &'static str, response: &HttpResponse) -> Option<ApiError> {
        (self.0)(operation, response)
    }
}

impl Default for ErrorFactory {
    fn default() -> Self {
        Self::passthrough()
    }
}

impl Debug for ErrorFactory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("ErrorFactory(..)")
    }
}

#[derive(Debug, Clone)]
enum ConfigSource {
    Global,
    Fixed(Arc<Configuration>),
}

/// Async client for every [`Operation`].
///
/// Cheap to clone; clones share the transport and configuration.
#[derive(Clone)]
pub struct ApiClient {
    http_client: Arc<dyn HttpClient>,
    config: ConfigSource,
    error_factory: ErrorFactory,
}

impl Debug for ApiClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("error_factory", &self.error_factory)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Client bound to a fixed configuration, using reqwest.
    pub fn new(config: Configuration) -> Self {
        Self {
            http_client: Arc::new(ReqwestHttpClient::default()),
            config: ConfigSource::Fixed(Arc::new(config)),
            error_factory: ErrorFactory::default(),
        }
    }

    /// Client that reads [`Configuration::global`] at every request.
    pub fn from_global() -> Self {
        Self {
            http_client: Arc::new(ReqwestHttpClient::default()),
            config: ConfigSource::Global,
            error_factory: ErrorFactory::default(),
        }
    }

    pub fn with_http_client(mut self, http_client: Arc<dyn HttpClient>) -> Self {
        self.http_client = http_client;
        self
    }

    pub fn with_error_factory(mut self, error_factory: ErrorFactory) -> Self {
        self.error_factory = error_factory;
        self
    }

    /// Configuration the next request will use.
    pub fn configuration(&self) -> Arc<Configuration> {
        match &self.config {
            ConfigSource::Global => Configuration::global(),
            ConfigSource::Fixed(config) => Arc::clone(config),
        }
    }

    /// Run an operation and return the payload with status and headers.
    pub async fn execute<O: Operation>(
        &self,
        operation: &O,
    ) -> Result<ApiResponse<O::Response>, ApiError> {
        operation.validate()?;
        self.invoke(operation.descriptor()).await
    }

    /// Run an operation and return only the payload.
    pub async fn fetch<O: Operation>(&self, operation: &O) -> Result<O::Response, ApiError> {
        self.execute(operation).await.map(ApiResponse::into_data)
    }

    /// Run a raw descriptor, deserializing the body into `T`.
    pub async fn invoke<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<ApiResponse<T>, ApiError> {
        let operation = descriptor.operation();
        let (request, log_url) = {
            let config = self.configuration();
            let request = descriptor.build_request(&config)?;
            let log_url = request.redacted_url(config.api_key_location.query_name());
            (request, log_url)
        };

        tracing::debug!(operation, url = %log_url, "sending request");

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|source| {
                tracing::debug!(operation, error = %source, "transport failure");
                ApiError::Transport { operation, source }
            })?;

        tracing::debug!(operation, status = response.status, "received response");

        if let Some(error) = self.error_factory.create(operation, &response) {
            tracing::warn!(
                operation,
                status = response.status,
                code = error.code(),
                "response converted to error"
            );
            return Err(error);
        }

        let data = serde_json::from_str::<T>(&response.body).map_err(|source| {
            ApiError::Deserialization {
                operation,
                status: response.status,
                source,
            }
        })?;

        Ok(ApiResponse {
            data,
            status: response.status,
            headers: response.headers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_only_converts_failures() {
        let factory = ErrorFactory::status_errors();

        assert!(factory
            .create("get_company", &HttpResponse::ok_json("{}"))
            .is_none());

        let error = factory
            .create("get_company", &HttpResponse::new(401, "unauthorized"))
            .expect("401 converts");
        assert!(matches!(
            error,
            ApiError::Api {
                operation: "get_company",
                status: 401,
                ..
            }
        ));
    }

    #[test]
    fn passthrough_never_converts() {
        let factory = ErrorFactory::default();
        assert!(factory
            .create("get_company", &HttpResponse::new(500, "boom"))
            .is_none());
    }

    #[test]
    fn fixed_configuration_is_returned_unchanged() {
        let client = ApiClient::new(Configuration::new("key-1").with_timeout_ms(900));
        let config = client.configuration();
        assert_eq!(config.api_key.as_deref(), Some("key-1"));
        assert_eq!(config.timeout_ms, 900);
    }

    // Only test in this binary that touches the process-wide configuration.
    #[test]
    fn global_client_sees_replacements_on_the_next_request() {
        Configuration::set_global(Configuration::new("first"));
        let client = ApiClient::from_global();
        assert_eq!(client.configuration().api_key.as_deref(), Some("first"));

        Configuration::set_global(Configuration::new("second"));
        assert_eq!(client.configuration().api_key.as_deref(), Some("second"));
    }
}
