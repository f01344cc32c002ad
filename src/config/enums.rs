//! Case-insensitive text enums.
//!
//! # Decoding Rules
//! - Input is lowercased before matching
//! - Text outside the closed set → `ConfigError::UnrecognizedEnumValue`
//! - Explicit null in the source → `ConfigError::InvalidEnumTarget`
//! - No default: a missing field is a deserialize error, never the
//!   first-declared variant

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::config::error::{ConfigError, ConfigResult};

/// A closed set of variants with a lowercase text form.
pub trait TextEnum: Sized {
    /// Human-readable name used in diagnostics.
    const KIND: &'static str;

    /// Match an already-lowercased literal.
    fn from_lowercase(text: &str) -> Option<Self>;

    fn as_str(&self) -> &'static str;

    fn decode(text: &str) -> ConfigResult<Self> {
        Self::from_lowercase(&text.to_lowercase()).ok_or_else(|| {
            ConfigError::UnrecognizedEnumValue {
                kind: Self::KIND,
                value: text.to_string(),
            }
        })
    }
}

/// Front-end protocol a listener speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolType {
    Http,
    Mysql,
}

impl TextEnum for ProtocolType {
    const KIND: &'static str = "protocol type";

    fn from_lowercase(text: &str) -> Option<Self> {
        match text {
            "http" => Some(ProtocolType::Http),
            "mysql" => Some(ProtocolType::Mysql),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            ProtocolType::Http => "http",
            ProtocolType::Mysql => "mysql",
        }
    }
}

/// How an executor dispatches statements to its data sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecuteMode {
    /// Single database.
    Sdb,
    /// Read/write splitting.
    Rws,
    /// Sharding.
    Shd,
}

impl TextEnum for ExecuteMode {
    const KIND: &'static str = "execute mode";

    fn from_lowercase(text: &str) -> Option<Self> {
        match text {
            "sdb" => Some(ExecuteMode::Sdb),
            "rws" => Some(ExecuteMode::Rws),
            "shd" => Some(ExecuteMode::Shd),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            ExecuteMode::Sdb => "sdb",
            ExecuteMode::Rws => "rws",
            ExecuteMode::Shd => "shd",
        }
    }
}

struct TextEnumVisitor<T>(PhantomData<T>);

impl<'de, T: TextEnum> Visitor<'de> for TextEnumVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} string", T::KIND)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        T::decode(v).map_err(E::custom)
    }

    fn visit_none<E: de::Error>(self) -> Result<T, E> {
        Err(E::custom(ConfigError::InvalidEnumTarget { kind: T::KIND }))
    }

    fn visit_unit<E: de::Error>(self) -> Result<T, E> {
        self.visit_none()
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<T, D::Error> {
        deserializer.deserialize_any(self)
    }
}

macro_rules! text_enum_impls {
    ($($ty:ty),*) => {$(
        impl FromStr for $ty {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as TextEnum>::decode(s)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_any(TextEnumVisitor(PhantomData))
            }
        }
    )*};
}

text_enum_impls!(ProtocolType, ExecuteMode);
