//! Contraction direction of an actuator.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Which half of a DoF slot an actuator fills.
///
/// Serialized as `"concentric"` / `"eccentric"`. Deserialization also
/// accepts the numeric signs `1` / `-1` used by model files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Shortening contraction, selected by non-negative activation.
    Concentric,
    /// Lengthening contraction, selected by negative activation.
    Eccentric,
}

impl Direction {
    /// Both directions, concentric first.
    pub const BOTH: [Direction; 2] = [Direction::Concentric, Direction::Eccentric];

    /// Direction from a model-file sign: `1` is concentric, `-1` eccentric.
    pub fn from_sign(sign: i64) -> Option<Self> {
        match sign {
            1 => Some(Direction::Concentric),
            -1 => Some(Direction::Eccentric),
            _ => None,
        }
    }

    /// `1` for concentric, `-1` for eccentric.
    pub fn sign(self) -> i64 {
        match self {
            Direction::Concentric => 1,
            Direction::Eccentric => -1,
        }
    }

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Concentric => "concentric",
            Direction::Eccentric => "eccentric",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "concentric" | "1" | "+1" => Ok(Direction::Concentric),
            "eccentric" | "-1" => Ok(Direction::Eccentric),
            other => Err(format!(
                "unknown direction '{other}', expected concentric, eccentric, 1 or -1"
            )),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DirectionRepr {
    Sign(i64),
    Name(String),
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match DirectionRepr::deserialize(deserializer)? {
            DirectionRepr::Sign(sign) => Direction::from_sign(sign).ok_or_else(|| {
                serde::de::Error::custom(format!("direction sign must be 1 or -1, got {sign}"))
            }),
            DirectionRepr::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}
