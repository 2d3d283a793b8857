use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use super::DividendStatus;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DividendRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub previous_dividend: Option<Decimal>,
    #[serde(
        rename = "exdate",
        default,
        with = "super::dates::date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub ex_date: Option<Date>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub dividend: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividend_currency: Option<String>,
    #[serde(default, with = "super::decimal::option", skip_serializing_if = "Option::is_none")]
    pub adj_amount: Option<Decimal>,
    #[serde(
        default,
        with = "super::dates::date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub record_date: Option<Date>,
    #[serde(
        default,
        with = "super::dates::date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub pay_date: Option<Date>,
    #[serde(
        default,
        with = "super::dates::date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub declaration_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DividendStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_exchange: Option<String>,
    #[serde(
        default,
        with = "super::dates::date_time::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_on: Option<OffsetDateTime>,
}
