//! # Price Value Object
//!
//! Decimal price as reported by the ERP, plus the one place where upstream
//! numeric text is turned into a number.
//!
//! # Accepted text format
//!
//! [`Price::parse_locale`] accepts an optional sign followed by digits with at
//! most one decimal separator, which may be `,` or `.`:
//!
//! | input        | result    |
//! |--------------|-----------|
//! | `"100,00"`   | `100`     |
//! | `"85.5"`     | `85.5`    |
//! | `"1.234,56"` | `1234.56` |
//! | `"1,234.56"` | `1234.56` |
//! | `"1.234.567"`| `1234567` |
//! | `" 42 "`     | `42`      |
//!
//! When both separators appear, the right-most one is the decimal separator
//! and the other is thousands grouping. A separator that appears more than
//! once on its own is grouping. Spaces (including non-breaking) are ignored.
//! Anything else yields `None`; parsing never fails loudly.
//!
//! # Examples
//!
//! ```
//! use article_ek_proxy::domain::value_objects::price::Price;
//! use rust_decimal::Decimal;
//!
//! let price = Price::parse_locale("100,00").unwrap();
//! assert_eq!(price.amount(), Decimal::new(100, 0));
//! assert!(Price::parse_locale("n/a").is_none());
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A decimal price without currency.
///
/// Serialized as a plain JSON number: integral values as integers
/// (`100`), everything else as a float (`85.5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Creates a price from a decimal amount.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Returns the decimal amount.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Parses upstream numeric text; see the module docs for the format.
    #[must_use]
    pub fn parse_locale(text: &str) -> Option<Self> {
        let compact: String = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '\u{a0}')
            .collect();
        if compact.is_empty() {
            return None;
        }

        let commas = compact.matches(',').count();
        let dots = compact.matches('.').count();
        let normalized = match (compact.rfind(','), compact.rfind('.')) {
            (Some(comma), Some(dot)) if comma > dot => {
                if commas > 1 {
                    return None;
                }
                compact.replace('.', "").replace(',', ".")
            }
            (Some(_), Some(_)) => {
                if dots > 1 {
                    return None;
                }
                compact.replace(',', "")
            }
            (Some(_), None) if commas > 1 => compact.replace(',', ""),
            (Some(_), None) => compact.replace(',', "."),
            (None, Some(_)) if dots > 1 => compact.replace('.', ""),
            _ => compact,
        };

        Decimal::from_str(&normalized).ok().map(Self)
    }

    /// Converts a JSON number into a price.
    ///
    /// Goes through the number's textual form first so that `85.1` stays
    /// exactly `85.1`; falls back to the float value for exotic notations.
    #[must_use]
    pub fn from_json_number(number: &serde_json::Number) -> Option<Self> {
        Decimal::from_str(&number.to_string())
            .ok()
            .or_else(|| number.as_f64().and_then(Decimal::from_f64))
            .map(Self)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract().is_zero() {
            if let Some(whole) = self.0.to_i64() {
                return serializer.serialize_i64(whole);
            }
        }
        match self.0.to_f64() {
            Some(value) => serializer.serialize_f64(value),
            None => serializer.serialize_str(&self.to_string()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parsed(text: &str) -> Option<Decimal> {
        Price::parse_locale(text).map(|p| p.amount())
    }

    #[test]
    fn comma_decimal_separator() {
        assert_eq!(parsed("100,00"), Some(Decimal::new(100, 0)));
        assert_eq!(parsed("0,5"), Some(Decimal::new(5, 1)));
    }

    #[test]
    fn dot_decimal_separator() {
        assert_eq!(parsed("85.5"), Some(Decimal::new(855, 1)));
    }

    #[test]
    fn grouping_with_both_separators() {
        assert_eq!(parsed("1.234,56"), Some(Decimal::new(123456, 2)));
        assert_eq!(parsed("1,234.56"), Some(Decimal::new(123456, 2)));
    }

    #[test]
    fn repeated_separator_is_grouping() {
        assert_eq!(parsed("1.234.567"), Some(Decimal::new(1234567, 0)));
        assert_eq!(parsed("1,234,567"), Some(Decimal::new(1234567, 0)));
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(parsed(" 42 "), Some(Decimal::new(42, 0)));
        assert_eq!(parsed("1\u{a0}234,50"), Some(Decimal::new(123450, 2)));
    }

    #[test]
    fn negative_values() {
        assert_eq!(parsed("-12,5"), Some(Decimal::new(-125, 1)));
    }

    #[test]
    fn garbage_is_absent() {
        assert_eq!(parsed(""), None);
        assert_eq!(parsed("abc"), None);
        assert_eq!(parsed("1,2.3.4"), None);
        assert_eq!(parsed("1.2.3,4,5"), None);
        assert_eq!(parsed("EUR 10"), None);
    }

    #[test]
    fn from_json_number() {
        let n: serde_json::Number = serde_json::from_str("85.1").unwrap();
        assert_eq!(
            Price::from_json_number(&n).map(|p| p.amount()),
            Some(Decimal::new(851, 1))
        );
        let n: serde_json::Number = serde_json::from_str("85").unwrap();
        assert_eq!(
            Price::from_json_number(&n).map(|p| p.amount()),
            Some(Decimal::new(85, 0))
        );
    }

    #[test]
    fn serializes_integral_as_integer() {
        let price = Price::new(Decimal::new(10000, 2));
        assert_eq!(serde_json::to_value(price).unwrap(), serde_json::json!(100));
    }

    #[test]
    fn serializes_fraction_as_float() {
        let price = Price::new(Decimal::new(855, 1));
        assert_eq!(serde_json::to_value(price).unwrap(), serde_json::json!(85.5));
    }

    #[test]
    fn zero_detection() {
        assert!(Price::parse_locale("0,00").unwrap().is_zero());
        assert!(!Price::parse_locale("0,01").unwrap().is_zero());
    }
}
