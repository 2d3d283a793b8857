//! Behavior-driven tests for the blocking client
//!
//! The blocking wrapper must behave exactly like the async client it wraps.

mod support;

use std::sync::Arc;

use intrinio_core::{
    ApiError, BlockingApiClient, ErrorFactory, GetCompany, GetOptionsExpirations,
    GetSecurityLatestDividendRecord, HttpResponse, RequestDescriptor,
};
use intrinio_core::models::{ApiResponseCompaniesSearch, DividendStatus};
use time::macros::date;

use support::{client_with, RecordingHttpClient};

fn blocking(http: &Arc<RecordingHttpClient>) -> BlockingApiClient {
    BlockingApiClient::new(client_with(http)).expect("runtime starts")
}

#[test]
fn fetch_returns_the_same_model_as_async() {
    let http = Arc::new(RecordingHttpClient::ok_json(
        r#"{"ticker": "MSFT", "dividend": 0.75, "status": "A", "exdate": "2024-02-14"}"#,
    ));
    let client = blocking(&http);

    let record = client
        .fetch(&GetSecurityLatestDividendRecord::new("MSFT"))
        .expect("decodes");

    assert_eq!(record.ticker.as_deref(), Some("MSFT"));
    assert_eq!(record.status, Some(DividendStatus::Announced));
    assert_eq!(record.ex_date, Some(date!(2024 - 02 - 14)));
    assert!(http
        .last_request()
        .url
        .ends_with("/securities/MSFT/dividends/latest"));
}

#[test]
fn execute_exposes_status_and_headers() {
    let http = Arc::new(RecordingHttpClient::returning(
        HttpResponse::ok_json(r#"{"expirations": ["2024-06-21", "2024-07-19"]}"#)
            .with_header("X-RateLimit-Remaining", "99"),
    ));
    let client = blocking(&http);

    let response = client
        .execute(&GetOptionsExpirations {
            after: Some(date!(2024 - 06 - 01)),
            ..GetOptionsExpirations::new("AAPL")
        })
        .expect("decodes");

    assert_eq!(response.status, 200);
    assert_eq!(response.header("x-ratelimit-remaining"), Some("99"));
    assert_eq!(
        response.data.expirations,
        Some(vec![String::from("2024-06-21"), String::from("2024-07-19")])
    );
    assert_eq!(http.last_request().query_value("after"), Some("2024-06-01"));
}

#[test]
fn pre_flight_errors_are_identical() {
    let http = Arc::new(RecordingHttpClient::ok_json("{}"));
    let client = blocking(&http);

    let error = client.fetch(&GetCompany::new(" ")).expect_err("blank id");

    assert!(matches!(error, ApiError::MissingParameter { .. }));
    assert_eq!(http.call_count(), 0);
}

#[test]
fn hook_errors_are_identical() {
    let http = Arc::new(RecordingHttpClient::returning(HttpResponse::new(
        429,
        "Too Many Requests",
    )));
    let client = BlockingApiClient::new(
        client_with(&http).with_error_factory(ErrorFactory::status_errors()),
    )
    .expect("runtime starts");

    let error = client.fetch(&GetCompany::new("AAPL")).expect_err("429");

    assert_eq!(error.status(), Some(429));
    assert_eq!(client.inner().configuration().timeout_ms, 30_000);
}

#[test]
fn raw_descriptors_can_be_invoked() {
    let http = Arc::new(RecordingHttpClient::ok_json(
        r#"{"companies": [{"ticker": "AAPL", "name": "Apple Inc"}]}"#,
    ));
    let client = blocking(&http);

    let descriptor = RequestDescriptor::new("search_companies", "/companies/search")
        .query("query", Some("apple"));
    let response = client
        .invoke::<ApiResponseCompaniesSearch>(descriptor)
        .expect("decodes");

    assert_eq!(response.data.companies.map(|companies| companies.len()), Some(1));
    assert_eq!(http.last_request().query_value("query"), Some("apple"));
}
