//! Serde adapter for duration fields.
//!
//! Accepts a literal such as `"10s"`, `"1m30s"` or `"500ms"`, or a bare
//! integer which is read as nanoseconds. Serializes back to a literal.

use std::fmt;
use std::time::Duration;

use serde::de::{self, Deserializer, Visitor};
use serde::Serializer;

pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_zero() {
        return serializer.serialize_str("0s");
    }
    serializer.serialize_str(&humantime::format_duration(*value).to_string())
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    deserializer.deserialize_any(DurationVisitor)
}

struct DurationVisitor;

impl<'de> Visitor<'de> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a duration literal such as \"10s\" or an integer number of nanoseconds")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Duration, E> {
        let v = v.trim();
        if v == "0" {
            return Ok(Duration::ZERO);
        }
        humantime::parse_duration(v)
            .map_err(|e| E::custom(format!("invalid duration {:?}: {}", v, e)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Duration, E> {
        Ok(Duration::from_nanos(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Duration, E> {
        u64::try_from(v)
            .map(Duration::from_nanos)
            .map_err(|_| E::custom(format!("negative duration: {}", v)))
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Deserialize, Serialize)]
    struct Holder {
        #[serde(with = "super")]
        period: Duration,
    }

    fn parse(yaml: &str) -> Result<Holder, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    #[test]
    fn test_literals() {
        assert_eq!(parse("period: 10s").unwrap().period, Duration::from_secs(10));
        assert_eq!(parse("period: 500ms").unwrap().period, Duration::from_millis(500));
        assert_eq!(parse("period: 1m30s").unwrap().period, Duration::from_secs(90));
        assert_eq!(parse("period: \"0\"").unwrap().period, Duration::ZERO);
    }

    #[test]
    fn test_integer_is_nanoseconds() {
        assert_eq!(parse("period: 1000000").unwrap().period, Duration::from_millis(1));
        assert!(parse("period: -5").is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        let err = parse("period: soon").unwrap_err();
        assert!(err.to_string().contains("invalid duration"));
    }

    #[test]
    fn test_serialize_literal() {
        let holder = Holder {
            period: Duration::from_secs(90),
        };
        assert_eq!(serde_json::to_string(&holder).unwrap(), r#"{"period":"1m 30s"}"#);

        let zero = Holder {
            period: Duration::ZERO,
        };
        assert_eq!(serde_json::to_string(&zero).unwrap(), r#"{"period":"0s"}"#);
    }
}
