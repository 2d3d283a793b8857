use super::ensure_positive;
use crate::descriptor::RequestDescriptor;
use crate::error::ApiError;
use crate::invoker::Operation;
use crate::models::ApiResponseStockExchanges;
use crate::pagination::{PageCursor, PagedOperation};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAllStockExchanges {
    pub city: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub page_size: Option<u32>,
    pub next_page: Option<PageCursor>,
}

impl GetAllStockExchanges {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Operation for GetAllStockExchanges {
    type Response = ApiResponseStockExchanges;

    const NAME: &'static str = "get_all_stock_exchanges";

    fn descriptor(&self) -> RequestDescriptor {
        RequestDescriptor::new(Self::NAME, "/stock_exchanges")
            .query("city", self.city.as_deref())
            .query("country", self.country.as_deref())
            .query("country_code", self.country_code.as_deref())
            .query("page_size", self.page_size)
            .next_page(self.next_page.clone())
    }

    fn validate(&self) -> Result<(), ApiError> {
        ensure_positive(Self::NAME, "page_size", self.page_size)
    }
}

impl PagedOperation for GetAllStockExchanges {
    fn set_next_page(&mut self, cursor: Option<PageCursor>) {
        self.next_page = cursor;
    }
}
