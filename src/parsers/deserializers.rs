//! Lenient field deserializers for transcript records.
//!
//! Transcript lines are loosely typed; a field with an unexpected JSON type must
//! degrade to an empty value instead of failing the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts any JSON value; strings are kept, everything else becomes empty
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

/// Accepts any JSON value; strings become `Some`, everything else `None`
pub fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Wraps whatever value is present (explicit `null` included) in `Some`.
///
/// Combined with `#[serde(default)]` this separates a missing key (`None`) from
/// a key holding `null` (`Some(Value::Null)`), which plain `Option<Value>` cannot.
pub fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::{Value, json};

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::lenient_string")]
        timestamp: String,
        #[serde(default, deserialize_with = "super::string_or_none")]
        content: Option<String>,
        #[serde(default, deserialize_with = "super::present_value")]
        payload: Option<Value>,
    }

    #[test]
    fn test_lenient_string_keeps_strings() {
        let probe: Probe = serde_json::from_str(r#"{"timestamp":"2025-01-15T10:30:00Z"}"#).unwrap();
        assert_eq!(probe.timestamp, "2025-01-15T10:30:00Z");
    }

    #[test]
    fn test_lenient_string_blanks_other_types() {
        let probe: Probe = serde_json::from_str(r#"{"timestamp":1762076480016}"#).unwrap();
        assert_eq!(probe.timestamp, "");

        let probe: Probe = serde_json::from_str(r#"{"timestamp":null}"#).unwrap();
        assert_eq!(probe.timestamp, "");
    }

    #[test]
    fn test_lenient_string_missing_field_defaults() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(probe.timestamp, "");
        assert!(probe.content.is_none());
        assert!(probe.payload.is_none());
    }

    #[test]
    fn test_string_or_none() {
        let probe: Probe = serde_json::from_str(r#"{"content":"output"}"#).unwrap();
        assert_eq!(probe.content.as_deref(), Some("output"));

        let probe: Probe =
            serde_json::from_str(r#"{"content":[{"type":"text","text":"nested"}]}"#).unwrap();
        assert!(probe.content.is_none());
    }

    #[test]
    fn test_present_value_distinguishes_null_from_missing() {
        let probe: Probe = serde_json::from_str(r#"{"payload":null}"#).unwrap();
        assert_eq!(probe.payload, Some(Value::Null));

        let probe: Probe = serde_json::from_str(r#"{"payload":{"a":1}}"#).unwrap();
        assert_eq!(probe.payload, Some(json!({"a": 1})));
    }
}
