use serde::{Deserialize, Serialize};
use time::Date;

use crate::pagination::{deserialize_cursor, PageCursor, Paginated};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StockExchange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(
        default,
        with = "super::dates::date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_stock_price_date: Option<Date>,
    #[serde(
        default,
        with = "super::dates::date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_stock_price_date: Option<Date>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiResponseStockExchanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_exchanges: Option<Vec<StockExchange>>,
    #[serde(
        default,
        deserialize_with = "deserialize_cursor",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_page: Option<PageCursor>,
}

impl Paginated for ApiResponseStockExchanges {
    type Item = StockExchange;

    fn next_page(&self) -> Option<&PageCursor> {
        self.next_page.as_ref()
    }

    fn into_items(self) -> Vec<StockExchange> {
        self.stock_exchanges.unwrap_or_default()
    }
}
