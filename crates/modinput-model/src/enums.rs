//! Closed enumerations shared by the records and diagnostics channels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Value type of a configurable parameter, as the host understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    #[default]
    String,
    Number,
    Boolean,
}

impl DataType {
    /// Returns the enum name as declared by the host protocol.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "STRING",
            DataType::Number => "NUMBER",
            DataType::Boolean => "BOOLEAN",
        }
    }

    /// Returns the lower-cased name written into `<data_type>`.
    pub fn as_xml_text(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Number => "number",
            DataType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DataType {
    type Err = String;

    /// Parse a data type name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "STRING" => Ok(DataType::String),
            "NUMBER" => Ok(DataType::Number),
            "BOOLEAN" => Ok(DataType::Boolean),
            _ => Err(format!("Unknown data type: {s}")),
        }
    }
}

/// Diagnostics channel severity.
///
/// Each variant maps to the literal tag prefix the host's log ingestion
/// recognises. Variants are ordered from most to least severe, so
/// `Severity::Fatal < Severity::Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Fatal,
    Error,
    Warn,
    Info,
    Debug,
}

impl Severity {
    /// All severities, most severe first.
    pub const ALL: [Severity; 5] = [
        Severity::Fatal,
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
    ];

    /// Returns the tag written at the start of a diagnostics line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown severity: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_tags_match_host_prefixes() {
        let tags: Vec<&str> = Severity::ALL.iter().map(Severity::as_str).collect();
        assert_eq!(tags, ["FATAL", "ERROR", "WARN", "INFO", "DEBUG"]);
    }

    #[test]
    fn severity_orders_most_severe_first() {
        assert!(Severity::Fatal < Severity::Error);
        assert!(Severity::Warn < Severity::Info);
        assert!(Severity::Info < Severity::Debug);
    }

    #[test]
    fn severity_parses_case_insensitively() {
        assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warn));
        assert_eq!(" FATAL ".parse::<Severity>(), Ok(Severity::Fatal));
        assert!("NOTICE".parse::<Severity>().is_err());
    }

    #[test]
    fn data_type_defaults_to_string() {
        assert_eq!(DataType::default(), DataType::String);
        assert_eq!(DataType::Number.as_xml_text(), "number");
        assert_eq!("boolean".parse::<DataType>(), Ok(DataType::Boolean));
    }

    #[test]
    fn data_type_serializes_as_protocol_name() {
        let json = serde_json::to_string(&DataType::Number).unwrap();
        assert_eq!(json, "\"NUMBER\"");
    }
}
