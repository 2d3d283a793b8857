use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::SecuritySummary;
use crate::pagination::{deserialize_cursor, PageCursor, Paginated};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TechnicalIndicator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SmaTechnicalValue {
    #[serde(
        default,
        with = "super::dates::date_time::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_time: Option<OffsetDateTime>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub sma: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiResponseSecuritySimpleMovingAverage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technicals: Option<Vec<SmaTechnicalValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator: Option<TechnicalIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<SecuritySummary>,
    #[serde(
        default,
        deserialize_with = "deserialize_cursor",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_page: Option<PageCursor>,
}

impl Paginated for ApiResponseSecuritySimpleMovingAverage {
    type Item = SmaTechnicalValue;

    fn next_page(&self) -> Option<&PageCursor> {
        self.next_page.as_ref()
    }

    fn into_items(self) -> Vec<SmaTechnicalValue> {
        self.technicals.unwrap_or_default()
    }
}
