//! Log priority definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Priority {
    Debug = 0,
    #[default]
    Info = 1,
    Warning = 2,
    Alert = 3,
}

impl Priority {
    pub fn to_str(&self) -> &'static str {
        match self {
            Priority::Debug => "debug",
            Priority::Info => "info",
            Priority::Warning => "warning",
            Priority::Alert => "alert",
        }
    }

    /// Numeric encoding used in the file sink line format. Stable; external
    /// tooling parses it.
    #[inline]
    pub fn as_num(&self) -> u8 {
        *self as u8
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Priority::Debug => BrightBlack,
            Priority::Info => Green,
            Priority::Warning => Yellow,
            Priority::Alert => Red,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" | "bulk" => Ok(Priority::Debug),
            "info" => Ok(Priority::Info),
            "warn" | "warning" => Ok(Priority::Warning),
            "alert" => Ok(Priority::Alert),
            _ => Err(format!("Invalid priority: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Priority::Debug < Priority::Info);
        assert!(Priority::Info < Priority::Warning);
        assert!(Priority::Warning < Priority::Alert);
    }

    #[test]
    fn test_numeric_encoding() {
        assert_eq!(Priority::Debug.as_num(), 0);
        assert_eq!(Priority::Info.as_num(), 1);
        assert_eq!(Priority::Warning.as_num(), 2);
        assert_eq!(Priority::Alert.as_num(), 3);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("WARN".parse::<Priority>().unwrap(), Priority::Warning);
        assert_eq!("warning".parse::<Priority>().unwrap(), Priority::Warning);
        assert_eq!("bulk".parse::<Priority>().unwrap(), Priority::Debug);
        assert!("verbose".parse::<Priority>().is_err());
    }
}
