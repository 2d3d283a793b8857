//! Canonical string conversion for path and query parameter values.

use rust_decimal::Decimal;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Value that can be placed in a URL path segment or query string.
pub trait QueryValue {
    fn to_query_value(&self) -> String;
}

impl QueryValue for str {
    fn to_query_value(&self) -> String {
        self.to_owned()
    }
}

impl QueryValue for String {
    fn to_query_value(&self) -> String {
        self.clone()
    }
}

impl QueryValue for bool {
    fn to_query_value(&self) -> String {
        if *self { "true" } else { "false" }.to_owned()
    }
}

macro_rules! display_query_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl QueryValue for $ty {
                fn to_query_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_query_value!(i32, i64, u32, u64, usize);

impl QueryValue for Decimal {
    fn to_query_value(&self) -> String {
        self.normalize().to_string()
    }
}

impl QueryValue for Date {
    fn to_query_value(&self) -> String {
        format_date(*self)
    }
}

impl QueryValue for OffsetDateTime {
    fn to_query_value(&self) -> String {
        self.format(&Rfc3339)
            .unwrap_or_else(|_| format_date(self.date()))
    }
}

impl<T: QueryValue + ?Sized> QueryValue for &T {
    fn to_query_value(&self) -> String {
        (**self).to_query_value()
    }
}

/// `YYYY-MM-DD`, the only date form the API accepts in query strings.
pub fn format_date(date: Date) -> String {
    let format = format_description!("[year]-[month]-[day]");
    date.format(&format).unwrap_or_else(|_| {
        format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            u8::from(date.month()),
            date.day()
        )
    })
}
