//! Logical dataset keys and the values they resolve to.

use std::fmt;
use std::str::FromStr;

use crate::error::IngestError;

/// Logical column of the air-quality dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DatasetKey {
    State,
    County,
    Aqi,
}

impl DatasetKey {
    /// All keys, sorted by their logical name.
    pub const ALL: [DatasetKey; 3] = [DatasetKey::Aqi, DatasetKey::County, DatasetKey::State];

    /// Logical name accepted by [`DatasetKey::from_str`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::State => "state",
            Self::County => "county",
            Self::Aqi => "aqi",
        }
    }

    /// Physical column name in the source CSV.
    pub fn column_name(self) -> &'static str {
        match self {
            Self::State => "state_name",
            Self::County => "county_name",
            Self::Aqi => "aqi",
        }
    }

    /// Comma-separated list of valid keys, used in lookup errors.
    pub fn expected_list() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

impl fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetKey {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "state" => Ok(Self::State),
            "county" => Ok(Self::County),
            "aqi" => Ok(Self::Aqi),
            _ => Err(IngestError::UnknownKey {
                key: s.to_string(),
                expected: Self::expected_list(),
            }),
        }
    }
}

/// A single cell materialized from the cached table.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Text(String),
    Number(f32),
    /// Null cell in the source file.
    Missing,
}

impl ColumnValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl fmt::Display for ColumnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(v) => write!(f, "{v}"),
            Self::Missing => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_normalized_keys() {
        assert_eq!("state".parse::<DatasetKey>().unwrap(), DatasetKey::State);
        assert_eq!("  County ".parse::<DatasetKey>().unwrap(), DatasetKey::County);
        assert_eq!("AQI".parse::<DatasetKey>().unwrap(), DatasetKey::Aqi);
    }

    #[test]
    fn unknown_key_lists_valid_options() {
        let err = "city".parse::<DatasetKey>().unwrap_err();
        match err {
            IngestError::UnknownKey { key, expected } => {
                assert_eq!(key, "city");
                assert_eq!(expected, "aqi, county, state");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn maps_to_physical_columns() {
        assert_eq!(DatasetKey::State.column_name(), "state_name");
        assert_eq!(DatasetKey::County.column_name(), "county_name");
        assert_eq!(DatasetKey::Aqi.column_name(), "aqi");
    }

    #[test]
    fn column_value_accessors() {
        assert_eq!(ColumnValue::Text("Ohio".into()).as_text(), Some("Ohio"));
        assert_eq!(ColumnValue::Number(7.0).as_number(), Some(7.0));
        assert!(ColumnValue::Missing.is_missing());
        assert_eq!(ColumnValue::Missing.to_string(), "");
    }
}
