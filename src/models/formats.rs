//! Serde adapters for the textual formats used in the CSV files.

macro_rules! datetime_format {
    ($name:ident, $fmt:expr) => {
        pub mod $name {
            use chrono::NaiveDateTime;
            use serde::{Deserialize, Deserializer, Serializer};

            pub const FORMAT: &str = $fmt;

            pub fn serialize<S: Serializer>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
                s.collect_str(&value.format(FORMAT))
            }

            pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
                let raw = String::deserialize(d)?;
                NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
            }
        }
    };
}

datetime_format!(pos_datetime, crate::config::POS_DATETIME_FORMAT);
datetime_format!(roster_datetime, crate::config::ROSTER_DATETIME_FORMAT);

/// `true` <-> `"Yes"`, `false` <-> `"No"`.
pub mod yes_no {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(if *value { "Yes" } else { "No" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(d)?;
        match raw.as_str() {
            "Yes" => Ok(true),
            "No" => Ok(false),
            other => Err(serde::de::Error::custom(format!("expected Yes or No, got '{}'", other))),
        }
    }
}
