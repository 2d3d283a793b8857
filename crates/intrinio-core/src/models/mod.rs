//! # Response models
//!
//! Plain data records mirroring the API's JSON shapes.
//!
//! Every field is optional: a key missing from the payload (or `null`) becomes
//! `None`, and `None` fields are left out when the record is serialized again.
//! Structural equality, hashing and `Debug` are derived.
//!
//! Present values keep their meaning across a decode/encode cycle, but two
//! kinds of text are written back in canonical form:
//!
//! - timestamps are re-emitted as RFC 3339 keeping their offset, with a zero
//!   offset written as `Z` and trailing fractional zeros dropped, so
//!   `2024-01-15T14:05:00.000Z`, `2024-01-15T14:05:00+00:00` and the
//!   offset-less `2024-01-15T14:05:00` all come back as `2024-01-15T14:05:00Z`;
//! - a blank `next_page` (`""`) reads as "no more pages" and is left out on
//!   output, the same as `null`.
//!
//! | Type | Returned by |
//! |------|-------------|
//! | [`Company`] | `GetCompany` |
//! | [`ApiResponseCompanies`] | `GetAllCompanies` |
//! | [`ApiResponseCompaniesSearch`] | `SearchCompanies` |
//! | [`ApiResponseCompanySecurities`] | `GetCompanySecurities` |
//! | [`Security`] | `GetSecurityById` |
//! | [`ApiResponseSecurityStockPrices`] | `GetSecurityStockPrices` |
//! | [`ApiResponseSecuritySimpleMovingAverage`] | `GetSecurityPriceTechnicalsSma` |
//! | [`DividendRecord`] | `GetSecurityLatestDividendRecord` |
//! | [`ApiResponseOptionsExpirations`] | `GetOptionsExpirations` |
//! | [`ApiResponseOptionsChain`] | `GetOptionsChain` |
//! | [`ApiResponseStockExchanges`] | `GetAllStockExchanges` |

pub mod dates;
pub mod decimal;

mod company;
mod dividend;
mod enums;
mod options;
mod security;
mod stock_exchange;
mod stock_price;
mod technical;

pub use company::{
    ApiResponseCompanies, ApiResponseCompaniesSearch, ApiResponseCompanySecurities, Company,
    CompanySummary,
};
pub use dividend::DividendRecord;
pub use enums::{
    DividendStatus, Frequency, Moneyness, OptionType, OptionsSource, PriceKey, UnknownVariant,
};
pub use options::{
    ApiResponseOptionsChain, ApiResponseOptionsExpirations, OptionChainEntry, OptionContract,
    OptionPriceRealtime,
};
pub use security::{Security, SecuritySummary};
pub use stock_exchange::{ApiResponseStockExchanges, StockExchange};
pub use stock_price::{ApiResponseSecurityStockPrices, StockPriceSummary};
pub use technical::{ApiResponseSecuritySimpleMovingAverage, SmaTechnicalValue, TechnicalIndicator};
