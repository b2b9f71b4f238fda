use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Closed set of currencies the tracker keeps balances in.
///
/// Serialized under the ISO 4217 code so exports stay stable if variants are
/// ever renamed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Currency {
    #[serde(rename = "KHR")]
    Riels,
    #[serde(rename = "USD")]
    Dollars,
}

impl Currency {
    /// Every supported currency, in selector order.
    pub const ALL: [Currency; 2] = [Currency::Dollars, Currency::Riels];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Riels => "KHR",
            Currency::Dollars => "USD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Riels => "៛",
            Currency::Dollars => "$",
        }
    }

    /// Resolves an ISO code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Currency> {
        match code.trim().to_uppercase().as_str() {
            "KHR" => Some(Currency::Riels),
            "USD" => Some(Currency::Dollars),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Renders an amount with exactly two decimal places and the currency code
/// appended, e.g. `30.00 USD`.
pub fn format_amount(value: Decimal, currency: Currency) -> String {
    format!("{:.2} {}", value.round_dp(2), currency.code())
}
