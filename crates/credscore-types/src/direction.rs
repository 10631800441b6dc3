use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Qualitative effect of a feature on the score
///
/// Carried on the wire as its label ("Strongly Positive", "Neutral", ...).
/// Labels outside the known set are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Direction {
    StronglyPositive,
    Positive,
    Neutral,
    Negative,
    StronglyNegative,
    Other(String),
}

impl Direction {
    pub fn label(&self) -> &str {
        match self {
            Direction::StronglyPositive => "Strongly Positive",
            Direction::Positive => "Positive",
            Direction::Neutral => "Neutral",
            Direction::Negative => "Negative",
            Direction::StronglyNegative => "Strongly Negative",
            Direction::Other(label) => label,
        }
    }

    /// Positive styling applies to any label containing "Positive".
    /// Everything else, `Neutral` included, is styled negative.
    pub fn is_positive(&self) -> bool {
        self.label().contains("Positive")
    }
}

impl FromStr for Direction {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Strongly Positive" => Direction::StronglyPositive,
            "Positive" => Direction::Positive,
            "Neutral" => Direction::Neutral,
            "Negative" => Direction::Negative,
            "Strongly Negative" => Direction::StronglyNegative,
            other => Direction::Other(other.to_string()),
        })
    }
}

impl From<String> for Direction {
    fn from(label: String) -> Self {
        match label.parse() {
            Ok(direction) => direction,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for Direction {
    fn from(label: &str) -> Self {
        Direction::from(label.to_string())
    }
}

impl From<Direction> for String {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
