use time::Date;

use super::{ensure_ordered, ensure_positive};
use crate::descriptor::RequestDescriptor;
use crate::error::ApiError;
use crate::invoker::Operation;
use crate::models::{
    ApiResponseSecuritySimpleMovingAverage, ApiResponseSecurityStockPrices, DividendRecord,
    Frequency, PriceKey, Security,
};
use crate::pagination::{PageCursor, PagedOperation};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetSecurityById {
    pub identifier: String,
}

impl GetSecurityById {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

impl Operation for GetSecurityById {
    type Response = Security;

    const NAME: &'static str = "get_security_by_id";

    fn descriptor(&self) -> RequestDescriptor {
        RequestDescriptor::new(Self::NAME, "/securities/{identifier}")
            .path("identifier", self.identifier.as_str())
    }
}

/// Historical end-of-period prices for a security.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetSecurityStockPrices {
    pub identifier: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub frequency: Option<Frequency>,
    pub page_size: Option<u32>,
    pub next_page: Option<PageCursor>,
}

impl GetSecurityStockPrices {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    pub fn with_range(mut self, start_date: Date, end_date: Date) -> Self {
        self.start_date = Some(start_date);
        self.end_date = Some(end_date);
        self
    }

    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

impl Operation for GetSecurityStockPrices {
    type Response = ApiResponseSecurityStockPrices;

    const NAME: &'static str = "get_security_stock_prices";

    fn descriptor(&self) -> RequestDescriptor {
        RequestDescriptor::new(Self::NAME, "/securities/{identifier}/prices")
            .path("identifier", self.identifier.as_str())
            .query("start_date", self.start_date)
            .query("end_date", self.end_date)
            .query("frequency", self.frequency)
            .query("page_size", self.page_size)
            .next_page(self.next_page.clone())
    }

    fn validate(&self) -> Result<(), ApiError> {
        ensure_ordered(
            Self::NAME,
            "start_date",
            self.start_date.as_ref(),
            self.end_date.as_ref(),
        )?;
        ensure_positive(Self::NAME, "page_size", self.page_size)
    }
}

impl PagedOperation for GetSecurityStockPrices {
    fn set_next_page(&mut self, cursor: Option<PageCursor>) {
        self.next_page = cursor;
    }
}

/// Simple moving average over `period` price points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetSecurityPriceTechnicalsSma {
    pub identifier: String,
    pub period: Option<u32>,
    pub price_key: Option<PriceKey>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub page_size: Option<u32>,
    pub next_page: Option<PageCursor>,
}

impl GetSecurityPriceTechnicalsSma {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    pub fn with_period(mut self, period: u32) -> Self {
        self.period = Some(period);
        self
    }
}

impl Operation for GetSecurityPriceTechnicalsSma {
    type Response = ApiResponseSecuritySimpleMovingAverage;

    const NAME: &'static str = "get_security_price_technicals_sma";

    fn descriptor(&self) -> RequestDescriptor {
        RequestDescriptor::new(Self::NAME, "/securities/{identifier}/prices/technicals/sma")
            .path("identifier", self.identifier.as_str())
            .query("period", self.period)
            .query("price_key", self.price_key)
            .query("start_date", self.start_date)
            .query("end_date", self.end_date)
            .query("page_size", self.page_size)
            .next_page(self.next_page.clone())
    }

    fn validate(&self) -> Result<(), ApiError> {
        ensure_positive(Self::NAME, "period", self.period)?;
        ensure_ordered(
            Self::NAME,
            "start_date",
            self.start_date.as_ref(),
            self.end_date.as_ref(),
        )?;
        ensure_positive(Self::NAME, "page_size", self.page_size)
    }
}

impl PagedOperation for GetSecurityPriceTechnicalsSma {
    fn set_next_page(&mut self, cursor: Option<PageCursor>) {
        self.next_page = cursor;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetSecurityLatestDividendRecord {
    pub identifier: String,
}

impl GetSecurityLatestDividendRecord {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

impl Operation for GetSecurityLatestDividendRecord {
    type Response = DividendRecord;

    const NAME: &'static str = "get_security_latest_dividend_record";

    fn descriptor(&self) -> RequestDescriptor {
        RequestDescriptor::new(Self::NAME, "/securities/{identifier}/dividends/latest")
            .path("identifier", self.identifier.as_str())
    }
}
