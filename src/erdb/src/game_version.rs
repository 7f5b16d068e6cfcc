//! Game patch versions

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A game patch version such as `1.10.0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl GameVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for GameVersion {
    type Err = Error;

    /// Parses `major.minor.patch`; a missing patch component reads as 0
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidVersion(s.to_string());

        let parts: Vec<&str> = s.trim().split('.').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(invalid());
        }

        let mut numbers = [0u32; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| invalid())?;
        }

        Ok(Self::new(numbers[0], numbers[1], numbers[2]))
    }
}

impl Serialize for GameVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GameVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let v: GameVersion = "1.10.2".parse().unwrap();
        assert_eq!(v, GameVersion::new(1, 10, 2));
        assert_eq!(v.to_string(), "1.10.2");
    }

    #[test]
    fn test_parse_without_patch() {
        let v: GameVersion = "1.09".parse().unwrap();
        assert_eq!(v, GameVersion::new(1, 9, 0));
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<GameVersion>().is_err());
        assert!("1".parse::<GameVersion>().is_err());
        assert!("1.2.3.4".parse::<GameVersion>().is_err());
        assert!("1.x.0".parse::<GameVersion>().is_err());
    }

    #[test]
    fn test_ordering_is_numeric() {
        let older: GameVersion = "1.9.1".parse().unwrap();
        let newer: GameVersion = "1.10.0".parse().unwrap();
        assert!(older < newer);
    }

    #[test]
    fn test_serde_as_string() {
        let v = GameVersion::new(1, 2, 3);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"1.2.3\"");
        let back: GameVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
