//! Contract tests every endpoint request must satisfy: path building,
//! argument serialization, authentication and pre-flight validation.

#[path = "../support/mod.rs"]
mod support;

use std::sync::Arc;

use intrinio_core::models::{Frequency, Moneyness, OptionType, OptionsSource, PriceKey};
use intrinio_core::{
    ApiClient, ApiError, ApiKeyLocation, GetAllCompanies, GetAllStockExchanges, GetCompany,
    GetCompanySecurities, GetOptionsChain, GetOptionsExpirations, GetSecurityById,
    GetSecurityLatestDividendRecord, GetSecurityPriceTechnicalsSma, GetSecurityStockPrices,
    HttpResponse, Operation, RequestDescriptor, SearchCompanies,
};
use rust_decimal::Decimal;
use time::macros::date;

use support::{client_with, test_configuration, RecordingHttpClient, TEST_API_KEY, TEST_BASE_PATH};

struct OperationCase {
    name: &'static str,
    descriptor: RequestDescriptor,
    expected_path: &'static str,
}

fn operation_cases() -> Vec<OperationCase> {
    let expiration = date!(2024 - 06 - 21);
    vec![
        OperationCase {
            name: GetAllCompanies::NAME,
            descriptor: GetAllCompanies::new().descriptor(),
            expected_path: "/companies",
        },
        OperationCase {
            name: GetCompany::NAME,
            descriptor: GetCompany::new("AAPL").descriptor(),
            expected_path: "/companies/AAPL",
        },
        OperationCase {
            name: SearchCompanies::NAME,
            descriptor: SearchCompanies::new("apple").descriptor(),
            expected_path: "/companies/search",
        },
        OperationCase {
            name: GetCompanySecurities::NAME,
            descriptor: GetCompanySecurities::new("AAPL").descriptor(),
            expected_path: "/companies/AAPL/securities",
        },
        OperationCase {
            name: GetSecurityById::NAME,
            descriptor: GetSecurityById::new("AAPL:US").descriptor(),
            expected_path: "/securities/AAPL%3AUS",
        },
        OperationCase {
            name: GetSecurityStockPrices::NAME,
            descriptor: GetSecurityStockPrices::new("AAPL").descriptor(),
            expected_path: "/securities/AAPL/prices",
        },
        OperationCase {
            name: GetSecurityPriceTechnicalsSma::NAME,
            descriptor: GetSecurityPriceTechnicalsSma::new("AAPL").descriptor(),
            expected_path: "/securities/AAPL/prices/technicals/sma",
        },
        OperationCase {
            name: GetSecurityLatestDividendRecord::NAME,
            descriptor: GetSecurityLatestDividendRecord::new("MSFT").descriptor(),
            expected_path: "/securities/MSFT/dividends/latest",
        },
        OperationCase {
            name: GetOptionsExpirations::NAME,
            descriptor: GetOptionsExpirations::new("TSLA").descriptor(),
            expected_path: "/options/expirations/TSLA",
        },
        OperationCase {
            name: GetOptionsChain::NAME,
            descriptor: GetOptionsChain::new("TSLA", expiration).descriptor(),
            expected_path: "/options/chain/TSLA/2024-06-21",
        },
        OperationCase {
            name: GetAllStockExchanges::NAME,
            descriptor: GetAllStockExchanges::new().descriptor(),
            expected_path: "/stock_exchanges",
        },
    ]
}

#[test]
fn every_operation_expands_its_path_and_attaches_the_api_key() {
    let config = test_configuration();

    for case in operation_cases() {
        assert_eq!(case.descriptor.operation(), case.name);

        let request = case
            .descriptor
            .build_request(&config)
            .unwrap_or_else(|error| panic!("operation '{}' failed to build: {error}", case.name));

        assert_eq!(
            request.url,
            format!("{TEST_BASE_PATH}{}", case.expected_path),
            "operation '{}': url",
            case.name
        );
        assert_eq!(
            request.query_value("api_key"),
            Some(TEST_API_KEY),
            "operation '{}': api key",
            case.name
        );
        assert_eq!(
            request.headers.get("accept").map(String::as_str),
            Some("application/json"),
            "operation '{}': accept header",
            case.name
        );
        assert!(
            !request.has_query("next_page"),
            "operation '{}': no cursor by default",
            case.name
        );
    }
}

#[test]
fn operation_names_are_unique() {
    let mut names: Vec<_> = operation_cases().iter().map(|case| case.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), operation_cases().len());
}

// =============================================================================
// Required path parameters
// =============================================================================

#[tokio::test]
async fn when_identifier_is_blank_no_request_is_sent() {
    // Given: a client over a recording transport
    let http = Arc::new(RecordingHttpClient::ok_json("{}"));
    let client = client_with(&http);

    // When: required identifiers are empty or whitespace
    let company = client.fetch(&GetCompany::new("")).await;
    let prices = client.fetch(&GetSecurityStockPrices::new("   ")).await;
    let chain = client
        .fetch(&GetOptionsChain::new("", date!(2024 - 06 - 21)))
        .await;

    // Then: each fails as a missing parameter and the transport is never called
    for (result, operation, parameter) in [
        (company.map(|_| ()), "get_company", "identifier"),
        (prices.map(|_| ()), "get_security_stock_prices", "identifier"),
        (chain.map(|_| ()), "get_options_chain", "symbol"),
    ] {
        match result {
            Err(ApiError::MissingParameter {
                operation: actual_operation,
                parameter: actual_parameter,
            }) => {
                assert_eq!(actual_operation, operation);
                assert_eq!(actual_parameter, parameter);
            }
            other => panic!("expected missing parameter for {operation}, got {other:?}"),
        }
    }
    assert_eq!(http.call_count(), 0);
}

#[tokio::test]
async fn when_identifier_is_a_dot_segment_no_request_is_sent() {
    let http = Arc::new(RecordingHttpClient::ok_json("{}"));
    let client = client_with(&http);

    let error = client
        .fetch(&GetCompany::new(".."))
        .await
        .expect_err("dot segment must fail");

    assert!(matches!(
        error,
        ApiError::InvalidParameter {
            operation: "get_company",
            parameter: "identifier",
            ..
        }
    ));
    assert_eq!(http.call_count(), 0);
}

#[tokio::test]
async fn when_search_query_is_blank_no_request_is_sent() {
    let http = Arc::new(RecordingHttpClient::ok_json("{}"));
    let client = client_with(&http);

    let error = client
        .fetch(&SearchCompanies::new(" "))
        .await
        .expect_err("blank query must fail");

    assert!(error.is_client_side());
    assert_eq!(http.call_count(), 0);
}

#[tokio::test]
async fn when_page_size_is_zero_no_request_is_sent() {
    let http = Arc::new(RecordingHttpClient::ok_json("{}"));
    let client = client_with(&http);

    let error = client
        .fetch(&GetAllCompanies::new().with_page_size(0))
        .await
        .expect_err("zero page size must fail");

    assert!(matches!(
        error,
        ApiError::InvalidParameter {
            parameter: "page_size",
            ..
        }
    ));
    assert_eq!(http.call_count(), 0);
}

// =============================================================================
// Optional query parameters
// =============================================================================

#[tokio::test]
async fn unset_optional_parameters_are_left_out_of_the_query() {
    let http = Arc::new(RecordingHttpClient::ok_json(r#"{"stock_prices": []}"#));
    let client = client_with(&http);

    client
        .fetch(&GetSecurityStockPrices::new("AAPL"))
        .await
        .expect("request succeeds");

    let request = http.last_request();
    for key in ["start_date", "end_date", "frequency", "page_size", "next_page"] {
        assert!(!request.has_query(key), "{key} should be omitted");
    }
    assert_eq!(request.query.len(), 1, "only the api key remains");
}

#[tokio::test]
async fn set_optional_parameters_use_wire_formats() {
    let http = Arc::new(RecordingHttpClient::ok_json(r#"{"stock_prices": []}"#));
    let client = client_with(&http);

    let operation = GetSecurityStockPrices::new("AAPL")
        .with_range(date!(2024 - 01 - 02), date!(2024 - 01 - 31))
        .with_frequency(Frequency::Weekly)
        .with_page_size(100);
    client.fetch(&operation).await.expect("request succeeds");

    let request = http.last_request();
    assert_eq!(request.query_value("start_date"), Some("2024-01-02"));
    assert_eq!(request.query_value("end_date"), Some("2024-01-31"));
    assert_eq!(request.query_value("frequency"), Some("weekly"));
    assert_eq!(request.query_value("page_size"), Some("100"));
}

#[tokio::test]
async fn option_filters_use_wire_codes_and_plain_decimals() {
    let http = Arc::new(RecordingHttpClient::ok_json(r#"{"chain": []}"#));
    let client = client_with(&http);

    let operation = GetOptionsChain {
        strike: Some(Decimal::new(17_250, 2)),
        moneyness: Some(Moneyness::InTheMoney),
        source: Some(OptionsSource::Delayed),
        ..GetOptionsChain::new("AAPL", date!(2024 - 06 - 21)).with_option_type(OptionType::Put)
    };
    client.fetch(&operation).await.expect("request succeeds");

    let request = http.last_request();
    assert_eq!(request.query_value("type"), Some("put"));
    assert_eq!(request.query_value("strike"), Some("172.5"));
    assert_eq!(request.query_value("moneyness"), Some("in_the_money"));
    assert_eq!(request.query_value("source"), Some("delayed"));
    assert!(!request.has_query("date"));
}

#[tokio::test]
async fn sma_period_and_price_key_are_sent() {
    let http = Arc::new(RecordingHttpClient::ok_json(r#"{"technicals": []}"#));
    let client = client_with(&http);

    let operation = GetSecurityPriceTechnicalsSma {
        price_key: Some(PriceKey::Close),
        ..GetSecurityPriceTechnicalsSma::new("AAPL").with_period(50)
    };
    client.fetch(&operation).await.expect("request succeeds");

    let request = http.last_request();
    assert_eq!(request.query_value("period"), Some("50"));
    assert_eq!(request.query_value("price_key"), Some("close"));
}

// =============================================================================
// Authentication and headers
// =============================================================================

#[tokio::test]
async fn api_key_can_travel_in_a_header() {
    let http = Arc::new(RecordingHttpClient::ok_json("{}"));
    let config = test_configuration()
        .with_api_key_location(ApiKeyLocation::Header {
            name: String::from("X-Authorization"),
        })
        .with_default_header("X-Trace", "contract");
    let client = ApiClient::new(config).with_http_client(http.clone());

    client
        .fetch(&GetCompany::new("AAPL"))
        .await
        .expect("request succeeds");

    let request = http.last_request();
    assert!(!request.has_query("api_key"));
    assert_eq!(
        request.headers.get("x-authorization").map(String::as_str),
        Some(TEST_API_KEY)
    );
    assert_eq!(
        request.headers.get("x-trace").map(String::as_str),
        Some("contract")
    );
    assert!(request
        .headers
        .get("user-agent")
        .is_some_and(|agent| agent.starts_with("intrinio-rust/")));
}

#[tokio::test]
async fn configured_timeout_is_handed_to_the_transport() {
    let http = Arc::new(RecordingHttpClient::ok_json("{}"));
    let client =
        ApiClient::new(test_configuration().with_timeout_ms(1_250)).with_http_client(http.clone());

    client
        .fetch(&GetCompany::new("AAPL"))
        .await
        .expect("request succeeds");

    assert_eq!(http.last_request().timeout_ms, 1_250);
}

// =============================================================================
// Typed results
// =============================================================================

#[tokio::test]
async fn response_body_status_and_headers_are_returned() {
    let http = Arc::new(RecordingHttpClient::returning(
        HttpResponse::ok_json(
            r#"{"id": "com_NX6GzO", "ticker": "AAPL", "name": "Apple Inc", "employees": 161000}"#,
        )
        .with_header("X-Request-Id", "req-42"),
    ));
    let client = client_with(&http);

    let response = client
        .execute(&GetCompany::new("AAPL"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status, 200);
    assert_eq!(response.header("x-request-id"), Some("req-42"));
    assert_eq!(response.data.ticker.as_deref(), Some("AAPL"));
    assert_eq!(response.data.employees, Some(161_000));
    assert_eq!(response.data.cik, None);
}
