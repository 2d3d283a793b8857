//! # Intrinio Core
//!
//! Typed client core for the Intrinio financial data REST API.
//!
//! ## Overview
//!
//! - **One generic invoker** that runs any endpoint from a declarative
//!   request descriptor
//! - **Typed requests** for companies, securities, prices, technicals,
//!   dividends, options and stock exchanges
//! - **Plain response models** with optional fields, exact decimals and
//!   calendar dates
//! - **Cursor pagination** helpers
//! - **Configuration** from code or the environment, with a process-wide default
//! - **Async and blocking** entry points
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`apis`] | Typed request per endpoint |
//! | [`blocking`] | Blocking wrapper over the async client |
//! | [`config`] | Base path, API key, headers and timeout |
//! | [`descriptor`] | Request descriptor and URL building |
//! | [`error`] | Client, transport and API errors |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`invoker`] | `Operation` trait, `ApiClient`, error-factory hook |
//! | [`models`] | Response models and wire enums |
//! | [`pagination`] | `next_page` cursors and page collection |
//! | [`params`] | Canonical parameter strings |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use intrinio_core::{ApiClient, Configuration, GetSecurityStockPrices};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(Configuration::from_env()?);
//!
//!     let prices = client
//!         .fetch(&GetSecurityStockPrices::new("AAPL").with_page_size(5))
//!         .await?;
//!
//!     for price in prices.stock_prices.unwrap_or_default() {
//!         println!("{:?} close={:?}", price.date, price.close);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │ Typed request        │  apis::GetCompany, ...
//! │ (Operation)          │
//! └──────────┬───────────┘
//!            │ descriptor()
//!            ▼
//! ┌──────────────────────┐     ┌──────────────────┐
//! │ RequestDescriptor    │◀────│ Configuration    │
//! └──────────┬───────────┘     └──────────────────┘
//!            │ build_request()
//!            ▼
//! ┌──────────────────────┐     ┌──────────────────┐
//! │ ApiClient            │────▶│ HTTP Client      │
//! │ (ErrorFactory hook)  │     │ (reqwest/mock)   │
//! └──────────┬───────────┘     └──────────────────┘
//!            │ serde_json
//!            ▼
//! ┌──────────────────────┐
//! │ Models               │
//! └──────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Every call returns `Result<_, ApiError>`. Client-side failures (missing
//! argument, missing API key, invalid argument) are raised before any network
//! activity:
//!
//! ```rust
//! use intrinio_core::ApiError;
//!
//! fn describe(error: &ApiError) -> &'static str {
//!     if error.is_client_side() {
//!         "fix the request"
//!     } else if error.status().is_some() {
//!         "the API answered with an error"
//!     } else {
//!         "transport failure"
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - The API key is redacted from `Debug` output and request logs
//! - Nothing is retried or cached; each call is one GET

pub mod apis;
pub mod blocking;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod http_client;
pub mod invoker;
pub mod models;
pub mod pagination;
pub mod params;

// Endpoint requests
pub use apis::{
    GetAllCompanies, GetAllStockExchanges, GetCompany, GetCompanySecurities, GetOptionsChain,
    GetOptionsExpirations, GetSecurityById, GetSecurityLatestDividendRecord,
    GetSecurityPriceTechnicalsSma, GetSecurityStockPrices, SearchCompanies,
};

// Clients
pub use blocking::BlockingApiClient;
pub use invoker::{ApiClient, ApiResponse, ErrorFactory, Operation};

// Configuration
pub use config::{ApiKeyLocation, Configuration, DEFAULT_BASE_PATH, DEFAULT_TIMEOUT_MS};

// Descriptors
pub use descriptor::{PathParam, QueryParam, RequestDescriptor};

// Error types
pub use error::{ApiError, ConfigError};

// HTTP client types
pub use http_client::{HttpClient, HttpError, HttpErrorKind, HttpRequest, HttpResponse, ReqwestHttpClient};

// Pagination
pub use pagination::{CollectedPages, PageCursor, PagedOperation, Paginated};

pub use params::QueryValue;
