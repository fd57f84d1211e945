//! Luggage status set.
//!
//! The store keeps status as free text, so decoding never fails: the four
//! recognized values map to their variants and anything else is carried
//! through as [`LuggageStatus::Unknown`] with the original string intact.

use std::fmt;
use std::str::FromStr;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Status of a luggage item, as shown on listing and detail badges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LuggageStatus {
    /// Initial status of every newly created luggage item.
    Registered,
    InTransit,
    Delivered,
    Delayed,
    /// A persisted status outside the recognized set. Round-trips unchanged.
    Unknown(String),
}

/// The recognized status strings, in seed/display order.
pub const RECOGNIZED_STATUSES: [&str; 4] = ["registered", "in_transit", "delivered", "delayed"];

impl LuggageStatus {
    /// The wire/storage representation.
    pub fn as_str(&self) -> &str {
        match self {
            LuggageStatus::Registered => "registered",
            LuggageStatus::InTransit => "in_transit",
            LuggageStatus::Delivered => "delivered",
            LuggageStatus::Delayed => "delayed",
            LuggageStatus::Unknown(s) => s,
        }
    }

    /// Whether this is one of the four recognized statuses.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, LuggageStatus::Unknown(_))
    }
}

impl From<&str> for LuggageStatus {
    fn from(s: &str) -> Self {
        match s {
            "registered" => LuggageStatus::Registered,
            "in_transit" => LuggageStatus::InTransit,
            "delivered" => LuggageStatus::Delivered,
            "delayed" => LuggageStatus::Delayed,
            other => LuggageStatus::Unknown(other.to_string()),
        }
    }
}

impl FromStr for LuggageStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LuggageStatus::from(s))
    }
}

impl fmt::Display for LuggageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LuggageStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LuggageStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(LuggageStatus::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_values_round_trip() {
        for s in RECOGNIZED_STATUSES {
            let status = LuggageStatus::from(s);
            assert!(status.is_recognized(), "{s} should be recognized");
            assert_eq!(status.as_str(), s);
        }
    }

    #[test]
    fn unknown_value_carries_original_string() {
        let status = LuggageStatus::from("lost_in_hold");
        assert_eq!(status, LuggageStatus::Unknown("lost_in_hold".to_string()));
        assert!(!status.is_recognized());
        assert_eq!(status.as_str(), "lost_in_hold");
    }

    #[test]
    fn serde_round_trip_preserves_unknown() {
        let json = serde_json::to_string(&LuggageStatus::from("misrouted")).unwrap();
        assert_eq!(json, "\"misrouted\"");
        let back: LuggageStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LuggageStatus::Unknown("misrouted".to_string()));
    }

    #[test]
    fn serde_recognized_value() {
        let back: LuggageStatus = serde_json::from_str("\"in_transit\"").unwrap();
        assert_eq!(back, LuggageStatus::InTransit);
    }
}
