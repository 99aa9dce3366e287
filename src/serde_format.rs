//! Serde adapters for the default string formats
//!
//! Use with `#[serde(with = "...")]` on `NaiveDateTime` / `NaiveDate` fields:
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Event {
//!     #[serde(with = "datetime_helpers::serde_format::datetime")]
//!     created_at: NaiveDateTime,
//!     #[serde(with = "datetime_helpers::serde_format::date")]
//!     due: NaiveDate,
//! }
//! ```

/// `NaiveDateTime` as `YYYY-MM-DDTHH:mm:ss.ffffffZ`.
pub mod datetime {
    use crate::constants::DEFAULT_DATETIME_FORMAT;
    use crate::utils::datetime::{format_date_time_default, parse_date_time};
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date_time_default(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_date_time(&text, DEFAULT_DATETIME_FORMAT).map_err(de::Error::custom)
    }
}

/// `NaiveDate` as `YYYY-MM-DD`.
pub mod date {
    use crate::constants::DEFAULT_DATE_FORMAT;
    use crate::utils::datetime::{format_date_default, parse_date};
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date_default(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_date(&text, DEFAULT_DATE_FORMAT).map_err(de::Error::custom)
    }
}
