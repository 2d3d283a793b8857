//! Shared test doubles for the behaviour tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use intrinio_core::{ApiClient, Configuration, HttpClient, HttpError, HttpRequest, HttpResponse};

pub const TEST_API_KEY: &str = "test-key-0001";
pub const TEST_BASE_PATH: &str = "https://api.example.test";

/// Transport double that records every request and replays scripted responses.
///
/// Once the script is exhausted the fallback response is returned.
#[derive(Debug)]
pub struct RecordingHttpClient {
    script: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    fallback: Result<HttpResponse, HttpError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpClient {
    pub fn returning(response: HttpResponse) -> Self {
        Self::scripted(Vec::new(), Ok(response))
    }

    pub fn ok_json(body: &str) -> Self {
        Self::returning(HttpResponse::ok_json(body))
    }

    pub fn failing(error: HttpError) -> Self {
        Self::scripted(Vec::new(), Err(error))
    }

    pub fn scripted(
        script: Vec<Result<HttpResponse, HttpError>>,
        fallback: Result<HttpResponse, HttpError>,
    ) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Pages served in order; anything after them is an empty object.
    pub fn pages(bodies: &[&str]) -> Self {
        Self::scripted(
            bodies
                .iter()
                .map(|body| Ok(HttpResponse::ok_json(*body)))
                .collect(),
            Ok(HttpResponse::ok_json("{}")),
        )
    }

    pub fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.recorded_requests()
            .pop()
            .expect("at least one request should have been sent")
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        let response = self
            .script
            .lock()
            .expect("script should not be poisoned")
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        Box::pin(async move { response })
    }
}

pub fn test_configuration() -> Configuration {
    Configuration::new(TEST_API_KEY)
        .with_base_path(TEST_BASE_PATH)
        .expect("test base path is valid")
}

pub fn client_with(http: &Arc<RecordingHttpClient>) -> ApiClient {
    ApiClient::new(test_configuration()).with_http_client(http.clone())
}
