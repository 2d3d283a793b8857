use serde::{Deserialize, Serialize};
use time::Date;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecuritySummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_exchange: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_mic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite_ticker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite_figi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_class_figi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_listing: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Security {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_exchange: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub security_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_lot_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_ticker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite_ticker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_tickers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_tickers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite_figi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_class_figi: Option<String>,
    #[serde(rename = "figi_uniqueid", skip_serializing_if = "Option::is_none")]
    pub figi_unique_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cik: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_exchange_mic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etf: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delisted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_listing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_security: Option<bool>,
    #[serde(
        default,
        with = "super::dates::date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_stock_price: Option<Date>,
    #[serde(
        default,
        with = "super::dates::date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_stock_price: Option<Date>,
    #[serde(
        default,
        with = "super::dates::date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_stock_price_adjustment: Option<Date>,
    #[serde(
        default,
        with = "super::dates::date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_corporate_action: Option<Date>,
}
