use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

use super::{Frequency, SecuritySummary};
use crate::pagination::{deserialize_cursor, PageCursor, Paginated};

/// One OHLCV row, raw and split/dividend adjusted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StockPriceSummary {
    #[serde(
        default,
        with = "super::dates::date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intraperiod: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub open: Option<Decimal>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub high: Option<Decimal>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub low: Option<Decimal>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub close: Option<Decimal>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub volume: Option<Decimal>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub adj_open: Option<Decimal>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub adj_high: Option<Decimal>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub adj_low: Option<Decimal>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub adj_close: Option<Decimal>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub adj_volume: Option<Decimal>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub factor: Option<Decimal>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub split_ratio: Option<Decimal>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub dividend: Option<Decimal>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub change: Option<Decimal>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub percent_change: Option<Decimal>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub fifty_two_week_high: Option<Decimal>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub fifty_two_week_low: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiResponseSecurityStockPrices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_prices: Option<Vec<StockPriceSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<SecuritySummary>,
    #[serde(
        default,
        deserialize_with = "deserialize_cursor",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_page: Option<PageCursor>,
}

impl Paginated for ApiResponseSecurityStockPrices {
    type Item = StockPriceSummary;

    fn next_page(&self) -> Option<&PageCursor> {
        self.next_page.as_ref()
    }

    fn into_items(self) -> Vec<StockPriceSummary> {
        self.stock_prices.unwrap_or_default()
    }
}
