//! Lenient field deserializers for hand-edited and legacy documents.
//!
//! Garden documents are often edited by hand or produced by older versions of
//! the tracker, so a handful of fields accept more than their canonical form:
//! `null` where a default exists, numeric strings for metrics, and empty
//! strings for absent dates.

use jiff::civil::Date;
use serde::{de, Deserialize, Deserializer};

/// Deserializes `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Deserializes an optional metric from a number, a numeric string or `null`.
///
/// An empty string is treated as "no measurement".
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(value)) => Ok(Some(value)),
        Some(NumberOrText::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("expected a number, found \"{text}\"")))
        }
    }
}

/// Deserializes an optional ISO 8601 date where `null` and `""` mean absent.
pub(crate) fn lenient_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => text
            .trim()
            .parse::<Date>()
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid date \"{text}\": {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_f64")]
        value: Option<f64>,
        #[serde(default, deserialize_with = "lenient_date")]
        when: Option<Date>,
        #[serde(default, deserialize_with = "null_as_default")]
        text: String,
    }

    #[test]
    fn test_lenient_f64_accepts_numbers_and_strings() {
        let probe: Probe = serde_json::from_str(r#"{"value": 12.5}"#).unwrap();
        assert_eq!(probe.value, Some(12.5));

        let probe: Probe = serde_json::from_str(r#"{"value": "7"}"#).unwrap();
        assert_eq!(probe.value, Some(7.0));

        let probe: Probe = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(probe.value, None);

        let probe: Probe = serde_json::from_str(r#"{"value": ""}"#).unwrap();
        assert_eq!(probe.value, None);
    }

    #[test]
    fn test_lenient_f64_rejects_garbage() {
        let result: Result<Probe, _> = serde_json::from_str(r#"{"value": "tall"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_lenient_date() {
        let probe: Probe = serde_json::from_str(r#"{"when": "2024-05-13"}"#).unwrap();
        assert_eq!(probe.when, Some(jiff::civil::date(2024, 5, 13)));

        let probe: Probe = serde_json::from_str(r#"{"when": ""}"#).unwrap();
        assert_eq!(probe.when, None);

        let result: Result<Probe, _> = serde_json::from_str(r#"{"when": "13/05/2024"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_null_as_default() {
        let probe: Probe = serde_json::from_str(r#"{"text": null}"#).unwrap();
        assert_eq!(probe.text, "");
    }
}
