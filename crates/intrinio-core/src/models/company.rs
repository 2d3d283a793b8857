use serde::{Deserialize, Serialize};
use time::Date;

use super::SecuritySummary;
use crate::pagination::{deserialize_cursor, PageCursor, Paginated};

/// Short company listing used in collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanySummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lei: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cik: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Company {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lei: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_exchange: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ceo: Option<String>,
    #[serde(rename = "company_url", skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailing_address: Option<String>,
    #[serde(rename = "business_phone_no", skip_serializing_if = "Option::is_none")]
    pub business_phone: Option<String>,
    #[serde(rename = "hq_address1", skip_serializing_if = "Option::is_none")]
    pub hq_address_line1: Option<String>,
    #[serde(rename = "hq_address2", skip_serializing_if = "Option::is_none")]
    pub hq_address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hq_address_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hq_address_postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hq_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hq_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inc_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inc_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_legal_form: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cik: Option<String>,
    #[serde(
        default,
        with = "super::dates::date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub latest_filing_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employees: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standardized_active: Option<bool>,
    #[serde(
        default,
        with = "super::dates::date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_fundamental_date: Option<Date>,
    #[serde(
        default,
        with = "super::dates::date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_fundamental_date: Option<Date>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thea_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiResponseCompanies {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companies: Option<Vec<CompanySummary>>,
    #[serde(
        default,
        deserialize_with = "deserialize_cursor",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_page: Option<PageCursor>,
}

impl Paginated for ApiResponseCompanies {
    type Item = CompanySummary;

    fn next_page(&self) -> Option<&PageCursor> {
        self.next_page.as_ref()
    }

    fn into_items(self) -> Vec<CompanySummary> {
        self.companies.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiResponseCompaniesSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companies: Option<Vec<CompanySummary>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiResponseCompanySecurities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub securities: Option<Vec<SecuritySummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanySummary>,
    #[serde(
        default,
        deserialize_with = "deserialize_cursor",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_page: Option<PageCursor>,
}

impl Paginated for ApiResponseCompanySecurities {
    type Item = SecuritySummary;

    fn next_page(&self) -> Option<&PageCursor> {
        self.next_page.as_ref()
    }

    fn into_items(self) -> Vec<SecuritySummary> {
        self.securities.unwrap_or_default()
    }
}
