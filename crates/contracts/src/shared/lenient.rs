//! Deserializers for numeric columns the backend may send as decimal strings.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn parse(value: NumberOrText) -> Result<Option<f64>, String> {
    match value {
        NumberOrText::Number(n) => Ok(Some(n)),
        NumberOrText::Text(s) if s.trim().is_empty() => Ok(None),
        NumberOrText::Text(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|e| format!("invalid number '{}': {}", s, e)),
    }
}

/// `12.5`, `"12.50"`, `""` and `null` are all accepted.
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) => parse(value).map_err(de::Error::custom),
    }
}

/// Same as [`opt_f64`] but missing values become zero.
pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    opt_f64(deserializer).map(|v| v.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "opt_f64")]
        price: Option<f64>,
        #[serde(default, deserialize_with = "f64_or_zero")]
        quantity: f64,
    }

    #[test]
    fn test_accepts_numbers_and_strings() {
        let row: Row = serde_json::from_str(r#"{"price":"1234.50","quantity":7}"#).unwrap();
        assert_eq!(row.price, Some(1234.5));
        assert_eq!(row.quantity, 7.0);
    }

    #[test]
    fn test_blank_and_missing() {
        let row: Row = serde_json::from_str(r#"{"price":"","quantity":null}"#).unwrap();
        assert_eq!(row.price, None);
        assert_eq!(row.quantity, 0.0);

        let row: Row = serde_json::from_str("{}").unwrap();
        assert_eq!(row.price, None);
        assert_eq!(row.quantity, 0.0);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_str::<Row>(r#"{"price":"abc"}"#).is_err());
    }
}
