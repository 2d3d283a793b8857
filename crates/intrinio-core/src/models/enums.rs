//! Fixed string vocabularies used by the API.
//!
//! Each enum serializes to its short wire code, parses from it, and can be
//! used directly as a query argument.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} value '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Declares an enum whose variants map one-to-one onto wire codes.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $Name:ident {
            $(
                $(#[$variant_meta:meta])*
                $Variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $Name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $Variant
            ),+
        }

        impl $Name {
            pub const ALL: &'static [Self] = &[$(Self::$Variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$Variant => $wire),+
                }
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $Name {
            type Err = UnknownVariant;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value.trim() {
                    $($wire => Ok(Self::$Variant),)+
                    other => Err(UnknownVariant {
                        kind: stringify!($Name),
                        value: other.to_owned(),
                    }),
                }
            }
        }

        impl crate::params::QueryValue for $Name {
            fn to_query_value(&self) -> String {
                self.as_str().to_owned()
            }
        }
    };
}

wire_enum! {
    /// Sampling frequency of price series.
    pub enum Frequency {
        Daily => "daily",
        Weekly => "weekly",
        Monthly => "monthly",
        Quarterly => "quarterly",
        Yearly => "yearly",
    }
}

wire_enum! {
    pub enum OptionType {
        Put => "put",
        Call => "call",
    }
}

wire_enum! {
    pub enum Moneyness {
        All => "all",
        InTheMoney => "in_the_money",
        OutOfTheMoney => "out_of_the_money",
        NearTheMoney => "near_the_money",
    }
}

wire_enum! {
    /// Price field a technical indicator is computed from.
    pub enum PriceKey {
        Open => "open",
        High => "high",
        Low => "low",
        Close => "close",
        Volume => "volume",
    }
}

wire_enum! {
    /// Options data feed.
    pub enum OptionsSource {
        Realtime => "realtime",
        Delayed => "delayed",
        NasdaqBasic => "nasdaq_basic",
    }
}

wire_enum! {
    /// Lifecycle of a dividend announcement, as a single-letter code.
    pub enum DividendStatus {
        Announced => "A",
        Confirmed => "C",
        Estimated => "E",
        Provisional => "P",
        Suspended => "S",
    }
}
