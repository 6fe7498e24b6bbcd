//! # Upstream Wire Schema
//!
//! Lenient wire-level building blocks shared by the versioned mappings.
//!
//! The ERP is not strict about scalar types: prices arrive as numbers or as
//! locale strings, dates as epoch milliseconds or ISO strings, ids as strings
//! or numbers. Everything scalar is read as a [`WireScalar`] and only
//! interpreted when mapped to a domain type. A value of an unexpected shape
//! becomes "absent" instead of failing the whole response.
//!
//! ## Versions
//!
//! - [`v1`]: current weclapp article / supply source / category mapping

pub mod v1;

use crate::domain::value_objects::{Price, Timestamp};
use chrono::{NaiveDate, TimeZone, Utc};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A scalar JSON value of unknown type.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireScalar {
    /// A JSON string.
    Text(String),
    /// A JSON number.
    Number(serde_json::Number),
    /// Anything else (bool, object, array).
    Other(IgnoredAny),
}

impl WireScalar {
    /// Reads the value as text. Numbers are rendered, blank strings are absent.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Text(text) if !text.trim().is_empty() => Some(text.clone()),
            Self::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }

    /// Reads the value as a price; text goes through [`Price::parse_locale`].
    #[must_use]
    pub fn as_price(&self) -> Option<Price> {
        match self {
            Self::Text(text) => Price::parse_locale(text),
            Self::Number(number) => Price::from_json_number(number),
            Self::Other(_) => None,
        }
    }

    /// Reads the value as a timestamp.
    ///
    /// Accepted: epoch milliseconds (number or numeric text), RFC 3339 text,
    /// or a plain `YYYY-MM-DD` date (midnight UTC).
    #[must_use]
    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Self::Number(number) => number
                .as_i64()
                .or_else(|| number.as_f64().map(|f| f as i64))
                .and_then(Timestamp::from_millis),
            Self::Text(text) => {
                let text = text.trim();
                if let Ok(millis) = text.parse::<i64>() {
                    return Timestamp::from_millis(millis);
                }
                Timestamp::parse_rfc3339(text).or_else(|| {
                    NaiveDate::parse_from_str(text, "%Y-%m-%d")
                        .ok()
                        .and_then(|date| date.and_hms_opt(0, 0, 0))
                        .map(|naive| Timestamp::from(Utc.from_utc_datetime(&naive)))
                })
            }
            Self::Other(_) => None,
        }
    }
}

/// Returns the first field that yields a value, in the given order.
pub(crate) fn first_of<T>(
    fields: &[&Option<WireScalar>],
    read: impl Fn(&WireScalar) -> Option<T>,
) -> Option<T> {
    fields
        .iter()
        .filter_map(|field| field.as_ref())
        .find_map(read)
}

/// Deserializes a list, dropping elements that do not match `T`.
///
/// A missing, `null` or non-array value yields an empty list.
pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(records_of(value))
}

fn records_of<T: DeserializeOwned>(value: Option<Value>) -> Vec<T> {
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// Envelope of an ERP list endpoint.
///
/// Records are read from `result`, else from `data`, else the list is empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEnvelope {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    data: Option<Value>,
}

impl ListEnvelope {
    /// Extracts the records, dropping elements that do not match `T`.
    #[must_use]
    pub fn into_records<T: DeserializeOwned>(self) -> Vec<T> {
        let list = [self.result, self.data]
            .into_iter()
            .flatten()
            .find(Value::is_array);
        records_of(list)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn scalar(value: Value) -> WireScalar {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn scalar_shapes() {
        assert!(matches!(scalar(json!("x")), WireScalar::Text(_)));
        assert!(matches!(scalar(json!(1)), WireScalar::Number(_)));
        assert!(matches!(scalar(json!(true)), WireScalar::Other(_)));
        assert!(matches!(scalar(json!({"a": 1})), WireScalar::Other(_)));
    }

    #[test]
    fn price_from_text_and_number() {
        assert_eq!(
            scalar(json!("100,00")).as_price().map(|p| p.amount()),
            Some(Decimal::new(100, 0))
        );
        assert_eq!(
            scalar(json!(85)).as_price().map(|p| p.amount()),
            Some(Decimal::new(85, 0))
        );
        assert!(scalar(json!(false)).as_price().is_none());
    }

    #[test]
    fn timestamp_variants() {
        let expected = Some(1_700_000_000_000);
        let millis = |v: Value| scalar(v).as_timestamp().map(|t| t.timestamp_millis());

        assert_eq!(millis(json!(1_700_000_000_000_i64)), expected);
        assert_eq!(millis(json!("1700000000000")), expected);
        assert_eq!(millis(json!("2023-11-14T22:13:20Z")), expected);
        assert_eq!(millis(json!("2024-01-01")), Some(1_704_067_200_000));
        assert_eq!(millis(json!("soon")), None);
    }

    #[test]
    fn text_of_number_and_blank() {
        assert_eq!(scalar(json!(42)).as_text().as_deref(), Some("42"));
        assert_eq!(scalar(json!("  ")).as_text(), None);
    }

    #[test]
    fn first_of_respects_order() {
        let a = None;
        let b = Some(scalar(json!("n/a")));
        let c = Some(scalar(json!("3")));
        let price = first_of(&[&a, &b, &c], WireScalar::as_price);
        assert_eq!(price.map(|p| p.amount()), Some(Decimal::new(3, 0)));
    }

    #[test]
    fn envelope_prefers_result() {
        let envelope: ListEnvelope =
            serde_json::from_value(json!({"result": [1], "data": [2, 3]})).unwrap();
        assert_eq!(envelope.into_records::<i64>(), vec![1]);
    }

    #[test]
    fn envelope_falls_back_to_data() {
        let envelope: ListEnvelope = serde_json::from_value(json!({"data": [2, 3]})).unwrap();
        assert_eq!(envelope.into_records::<i64>(), vec![2, 3]);
    }

    #[test]
    fn envelope_empty_when_neither() {
        let envelope: ListEnvelope = serde_json::from_value(json!({"total": 0})).unwrap();
        assert!(envelope.into_records::<i64>().is_empty());
    }

    #[test]
    fn envelope_drops_mismatched_records() {
        let envelope: ListEnvelope =
            serde_json::from_value(json!({"result": [1, "two", 3]})).unwrap();
        assert_eq!(envelope.into_records::<i64>(), vec![1, 3]);
    }
}
