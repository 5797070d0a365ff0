use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TranslatorError;

/// Which dialect is the source and which is the target of a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    AmericanToBritish,
    BritishToAmerican,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::AmericanToBritish, Direction::BritishToAmerican];

    /// Wire name used by the HTTP API and the CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::AmericanToBritish => "american-to-british",
            Direction::BritishToAmerican => "british-to-american",
        }
    }

    pub fn reversed(&self) -> Direction {
        match self {
            Direction::AmericanToBritish => Direction::BritishToAmerican,
            Direction::BritishToAmerican => Direction::AmericanToBritish,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = TranslatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|direction| direction.as_str() == s)
            .ok_or_else(|| TranslatorError::InvalidLocale(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_names() {
        assert_eq!(
            "american-to-british".parse::<Direction>(),
            Ok(Direction::AmericanToBritish)
        );
        assert_eq!(
            "british-to-american".parse::<Direction>(),
            Ok(Direction::BritishToAmerican)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_locale() {
        match "invalid-locale".parse::<Direction>() {
            Err(TranslatorError::InvalidLocale(locale)) => assert_eq!(locale, "invalid-locale"),
            other => panic!("Expected InvalidLocale error, got {:?}", other),
        }
        // Wire names are case-sensitive
        assert!("American-To-British".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
        }
    }

    #[test]
    fn test_reversed() {
        assert_eq!(
            Direction::AmericanToBritish.reversed(),
            Direction::BritishToAmerican
        );
        assert_eq!(
            Direction::BritishToAmerican.reversed(),
            Direction::AmericanToBritish
        );
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&Direction::BritishToAmerican).unwrap();
        assert_eq!(json, "\"british-to-american\"");
        let parsed: Direction = serde_json::from_str("\"american-to-british\"").unwrap();
        assert_eq!(parsed, Direction::AmericanToBritish);
    }
}
