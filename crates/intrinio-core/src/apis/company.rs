use time::Date;

use super::{ensure_positive, ensure_present};
use crate::descriptor::RequestDescriptor;
use crate::error::ApiError;
use crate::invoker::Operation;
use crate::models::{
    ApiResponseCompanies, ApiResponseCompaniesSearch, ApiResponseCompanySecurities, Company,
};
use crate::pagination::{PageCursor, PagedOperation};

/// Lists companies, optionally filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAllCompanies {
    pub latest_filing_date: Option<Date>,
    pub sic: Option<String>,
    pub template: Option<String>,
    pub sector: Option<String>,
    pub industry_category: Option<String>,
    pub industry_group: Option<String>,
    pub has_fundamentals: Option<bool>,
    pub has_stock_prices: Option<bool>,
    pub thea_enabled: Option<bool>,
    pub page_size: Option<u32>,
    pub next_page: Option<PageCursor>,
}

impl GetAllCompanies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

impl Operation for GetAllCompanies {
    type Response = ApiResponseCompanies;

    const NAME: &'static str = "get_all_companies";

    fn descriptor(&self) -> RequestDescriptor {
        RequestDescriptor::new(Self::NAME, "/companies")
            .query("latest_filing_date", self.latest_filing_date)
            .query("sic", self.sic.as_deref())
            .query("template", self.template.as_deref())
            .query("sector", self.sector.as_deref())
            .query("industry_category", self.industry_category.as_deref())
            .query("industry_group", self.industry_group.as_deref())
            .query("has_fundamentals", self.has_fundamentals)
            .query("has_stock_prices", self.has_stock_prices)
            .query("thea_enabled", self.thea_enabled)
            .query("page_size", self.page_size)
            .next_page(self.next_page.clone())
    }

    fn validate(&self) -> Result<(), ApiError> {
        ensure_positive(Self::NAME, "page_size", self.page_size)
    }
}

impl PagedOperation for GetAllCompanies {
    fn set_next_page(&mut self, cursor: Option<PageCursor>) {
        self.next_page = cursor;
    }
}

/// Looks up one company by ticker, CIK or Intrinio id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCompany {
    pub identifier: String,
}

impl GetCompany {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

impl Operation for GetCompany {
    type Response = Company;

    const NAME: &'static str = "get_company";

    fn descriptor(&self) -> RequestDescriptor {
        RequestDescriptor::new(Self::NAME, "/companies/{identifier}")
            .path("identifier", self.identifier.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCompanies {
    pub query: String,
    pub active: Option<bool>,
    pub page_size: Option<u32>,
}

impl SearchCompanies {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

impl Operation for SearchCompanies {
    type Response = ApiResponseCompaniesSearch;

    const NAME: &'static str = "search_companies";

    fn descriptor(&self) -> RequestDescriptor {
        RequestDescriptor::new(Self::NAME, "/companies/search")
            .query("query", Some(self.query.as_str()))
            .query("active", self.active)
            .query("page_size", self.page_size)
    }

    fn validate(&self) -> Result<(), ApiError> {
        ensure_present(Self::NAME, "query", &self.query)?;
        ensure_positive(Self::NAME, "page_size", self.page_size)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCompanySecurities {
    pub identifier: String,
    pub next_page: Option<PageCursor>,
}

impl GetCompanySecurities {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            next_page: None,
        }
    }
}

impl Operation for GetCompanySecurities {
    type Response = ApiResponseCompanySecurities;

    const NAME: &'static str = "get_company_securities";

    fn descriptor(&self) -> RequestDescriptor {
        RequestDescriptor::new(Self::NAME, "/companies/{identifier}/securities")
            .path("identifier", self.identifier.as_str())
            .next_page(self.next_page.clone())
    }
}

impl PagedOperation for GetCompanySecurities {
    fn set_next_page(&mut self, cursor: Option<PageCursor>) {
        self.next_page = cursor;
    }
}
