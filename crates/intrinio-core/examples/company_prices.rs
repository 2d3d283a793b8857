//! Fetch a company profile and its most recent daily prices.
//!
//! ```text
//! INTRINIO_API_KEY=... RUST_LOG=intrinio_core=debug \
//!     cargo run -p intrinio-core --example company_prices -- AAPL
//! ```

use intrinio_core::models::Frequency;
use intrinio_core::{ApiClient, Configuration, ErrorFactory, GetCompany, GetSecurityStockPrices};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let identifier = std::env::args().nth(1).unwrap_or_else(|| String::from("AAPL"));

    let client = ApiClient::new(Configuration::from_env()?)
        .with_error_factory(ErrorFactory::status_errors());

    let company = client.fetch(&GetCompany::new(identifier.as_str())).await?;
    println!(
        "{} ({}) sector={}",
        company.name.as_deref().unwrap_or("?"),
        company.ticker.as_deref().unwrap_or(&identifier),
        company.sector.as_deref().unwrap_or("n/a"),
    );

    let prices = client
        .fetch(
            &GetSecurityStockPrices::new(identifier.as_str())
                .with_frequency(Frequency::Daily)
                .with_page_size(5),
        )
        .await?;

    for price in prices.stock_prices.unwrap_or_default() {
        let date = price
            .date
            .map(intrinio_core::params::format_date)
            .unwrap_or_default();
        let close = price.close.map(|close| close.to_string()).unwrap_or_default();
        println!("{date}  close={close}");
    }

    if prices.next_page.is_some() {
        tracing::info!("more prices available; pass the cursor back to continue");
    }

    Ok(())
}
