//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues. Exact decimals are used where an amount no longer
//! fits in whole cents, such as a prorated unit price.

use crate::error::TaxError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    CAD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::CAD => "CAD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::CAD => "CA$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents). May be negative for discounts.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to an exact decimal in major units (e.g., 4999 cents -> 49.99).
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.amount_cents, self.currency.decimal_places())
    }

    /// Format as a display string (e.g., "$49.99", "-$5.00").
    pub fn display(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}{}", sign, self.currency.symbol(), self.to_decimal().abs())
    }

    /// Fail unless this amount is in `expected`.
    pub fn ensure_currency(&self, expected: Currency) -> Result<(), TaxError> {
        if self.currency != expected {
            return Err(TaxError::CurrencyMismatch {
                expected: expected.code().to_string(),
                got: self.currency.code().to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Serialize a [`Decimal`] as a bare JSON number (e.g. `49.99`).
///
/// This is the only place a price is rounded: to the nearest `f64`.
pub fn serialize_as_number<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let number = value
        .to_f64()
        .ok_or_else(|| S::Error::custom(format!("price {} is not representable", value)))?;
    serializer.serialize_f64(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_is_exact() {
        assert_eq!(Money::new(4999, Currency::USD).to_decimal(), Decimal::new(4999, 2));
        assert_eq!(Money::new(-500, Currency::USD).to_decimal(), Decimal::new(-5, 0));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::new(-500, Currency::USD).display(), "-$5.00");
        assert_eq!(Money::new(7, Currency::GBP).display(), "\u{00a3}0.07");
    }

    #[test]
    fn test_ensure_currency() {
        let usd = Money::new(1000, Currency::USD);
        assert!(usd.ensure_currency(Currency::USD).is_ok());
        assert_eq!(
            usd.ensure_currency(Currency::EUR).unwrap_err(),
            TaxError::CurrencyMismatch {
                expected: "EUR".to_string(),
                got: "USD".to_string(),
            }
        );
    }

    #[test]
    fn test_serialize_as_number() {
        #[derive(Serialize)]
        struct Row {
            #[serde(serialize_with = "serialize_as_number")]
            price: Decimal,
        }

        let json = serde_json::to_value(Row {
            price: Decimal::new(599, 2),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "price": 5.99 }));
    }
}
