use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use super::OptionType;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionContract {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(
        default,
        with = "super::dates::date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiration: Option<Date>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub strike: Option<Decimal>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub option_type: Option<OptionType>,
}

/// Latest trade and top-of-book for a contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionPriceRealtime {
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub last: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_size: Option<i64>,
    #[serde(
        default,
        with = "super::dates::date_time::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_timestamp: Option<OffsetDateTime>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub ask: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ask_size: Option<i64>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub bid: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_interest: Option<i64>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub implied_volatility: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionChainEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<OptionContract>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<OptionPriceRealtime>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiResponseOptionsChain {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<Vec<OptionChainEntry>>,
}

/// Expiration dates are passed through as the API prints them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiResponseOptionsExpirations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expirations: Option<Vec<String>>,
}
