//! # Endpoint requests
//!
//! One typed request per endpoint. Each implements [`Operation`], declaring
//! its path template, its arguments and the model the body decodes into;
//! paged ones also implement [`PagedOperation`].
//!
//! | Tag | Request | Path |
//! |-----|---------|------|
//! | company | [`GetAllCompanies`] | `/companies` |
//! | company | [`GetCompany`] | `/companies/{identifier}` |
//! | company | [`SearchCompanies`] | `/companies/search` |
//! | company | [`GetCompanySecurities`] | `/companies/{identifier}/securities` |
//! | security | [`GetSecurityById`] | `/securities/{identifier}` |
//! | security | [`GetSecurityStockPrices`] | `/securities/{identifier}/prices` |
//! | security | [`GetSecurityPriceTechnicalsSma`] | `/securities/{identifier}/prices/technicals/sma` |
//! | security | [`GetSecurityLatestDividendRecord`] | `/securities/{identifier}/dividends/latest` |
//! | options | [`GetOptionsExpirations`] | `/options/expirations/{symbol}` |
//! | options | [`GetOptionsChain`] | `/options/chain/{symbol}/{expiration}` |
//! | stock_exchange | [`GetAllStockExchanges`] | `/stock_exchanges` |
//!
//! [`Operation`]: crate::invoker::Operation
//! [`PagedOperation`]: crate::pagination::PagedOperation

mod company;
mod options;
mod security;
mod stock_exchange;

pub use company::{GetAllCompanies, GetCompany, GetCompanySecurities, SearchCompanies};
pub use options::{GetOptionsChain, GetOptionsExpirations};
pub use security::{
    GetSecurityById, GetSecurityLatestDividendRecord, GetSecurityPriceTechnicalsSma,
    GetSecurityStockPrices,
};
pub use stock_exchange::GetAllStockExchanges;

use crate::error::ApiError;

/// Counts such as `page_size` or an SMA `period` must be at least one.
pub(crate) fn ensure_positive(
    operation: &'static str,
    parameter: &'static str,
    value: Option<u32>,
) -> Result<(), ApiError> {
    match value {
        Some(0) => Err(ApiError::InvalidParameter {
            operation,
            parameter,
            reason: String::from("must be greater than zero"),
        }),
        _ => Ok(()),
    }
}

/// Required query arguments have no path placeholder to catch them.
pub(crate) fn ensure_present(
    operation: &'static str,
    parameter: &'static str,
    value: &str,
) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::MissingParameter {
            operation,
            parameter,
        });
    }
    Ok(())
}

pub(crate) fn ensure_ordered<T: PartialOrd + std::fmt::Debug>(
    operation: &'static str,
    parameter: &'static str,
    lower: Option<&T>,
    upper: Option<&T>,
) -> Result<(), ApiError> {
    match (lower, upper) {
        (Some(lower), Some(upper)) if lower > upper => Err(ApiError::InvalidParameter {
            operation,
            parameter,
            reason: format!("{lower:?} is after {upper:?}"),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_counts_are_rejected() {
        assert!(ensure_positive("get_all_companies", "page_size", None).is_ok());
        assert!(ensure_positive("get_all_companies", "page_size", Some(1)).is_ok());

        let error = ensure_positive("get_all_companies", "page_size", Some(0))
            .expect_err("zero is invalid");
        assert!(matches!(
            error,
            ApiError::InvalidParameter {
                parameter: "page_size",
                ..
            }
        ));
    }

    #[test]
    fn blank_required_query_is_missing() {
        let error = ensure_present("search_companies", "query", " ").expect_err("blank");
        assert_eq!(error.code(), "client.missing_parameter");
    }

    #[test]
    fn reversed_range_is_invalid() {
        assert!(ensure_ordered("x", "start_date", Some(&1), Some(&2)).is_ok());
        assert!(ensure_ordered("x", "start_date", Some(&2), None).is_ok());
        assert!(ensure_ordered("x", "start_date", Some(&3), Some(&2)).is_err());
    }
}
