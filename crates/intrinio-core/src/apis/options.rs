use rust_decimal::Decimal;
use time::Date;

use super::{ensure_ordered, ensure_positive};
use crate::descriptor::RequestDescriptor;
use crate::error::ApiError;
use crate::invoker::Operation;
use crate::models::{
    ApiResponseOptionsChain, ApiResponseOptionsExpirations, Moneyness, OptionType, OptionsSource,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOptionsExpirations {
    pub symbol: String,
    pub after: Option<Date>,
    pub before: Option<Date>,
    pub source: Option<OptionsSource>,
}

impl GetOptionsExpirations {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }
}

impl Operation for GetOptionsExpirations {
    type Response = ApiResponseOptionsExpirations;

    const NAME: &'static str = "get_options_expirations";

    fn descriptor(&self) -> RequestDescriptor {
        RequestDescriptor::new(Self::NAME, "/options/expirations/{symbol}")
            .path("symbol", self.symbol.as_str())
            .query("after", self.after)
            .query("before", self.before)
            .query("source", self.source)
    }

    fn validate(&self) -> Result<(), ApiError> {
        ensure_ordered(Self::NAME, "after", self.after.as_ref(), self.before.as_ref())
    }
}

/// Contracts and prices for one underlying and expiration.
///
/// Strike bounds are inclusive on the server side; `strike` pins a single
/// strike and is sent as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetOptionsChain {
    pub symbol: String,
    pub expiration: Date,
    pub date: Option<Date>,
    pub option_type: Option<OptionType>,
    pub strike: Option<Decimal>,
    pub strike_greater_than: Option<Decimal>,
    pub strike_less_than: Option<Decimal>,
    pub moneyness: Option<Moneyness>,
    pub source: Option<OptionsSource>,
    pub page_size: Option<u32>,
}

impl GetOptionsChain {
    pub fn new(symbol: impl Into<String>, expiration: Date) -> Self {
        Self {
            symbol: symbol.into(),
            expiration,
            date: None,
            option_type: None,
            strike: None,
            strike_greater_than: None,
            strike_less_than: None,
            moneyness: None,
            source: None,
            page_size: None,
        }
    }

    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = Some(option_type);
        self
    }

    pub fn with_strike_range(mut self, greater_than: Decimal, less_than: Decimal) -> Self {
        self.strike_greater_than = Some(greater_than);
        self.strike_less_than = Some(less_than);
        self
    }
}

impl Operation for GetOptionsChain {
    type Response = ApiResponseOptionsChain;

    const NAME: &'static str = "get_options_chain";

    fn descriptor(&self) -> RequestDescriptor {
        RequestDescriptor::new(Self::NAME, "/options/chain/{symbol}/{expiration}")
            .path("symbol", self.symbol.as_str())
            .path("expiration", self.expiration)
            .query("date", self.date)
            .query("type", self.option_type)
            .query("strike", self.strike)
            .query("strike_greater_than", self.strike_greater_than)
            .query("strike_less_than", self.strike_less_than)
            .query("moneyness", self.moneyness)
            .query("source", self.source)
            .query("page_size", self.page_size)
    }

    fn validate(&self) -> Result<(), ApiError> {
        ensure_ordered(
            Self::NAME,
            "strike_greater_than",
            self.strike_greater_than.as_ref(),
            self.strike_less_than.as_ref(),
        )?;
        ensure_positive(Self::NAME, "page_size", self.page_size)
    }
}
