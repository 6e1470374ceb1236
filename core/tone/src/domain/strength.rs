//! 口調の強さ（1〜5）

use crate::domain::ValidationError;
use std::fmt;
use std::str::FromStr;

/// 口調の強さ。範囲外の値は作れない
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength(u8);

impl Strength {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const DEFAULT: u8 = 3;

    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidStrength(value.to_string()))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Strength {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl FromStr for Strength {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: u8 = trimmed
            .parse()
            .map_err(|_| ValidationError::InvalidStrength(trimmed.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Strength::new(0).is_err());
        assert_eq!(Strength::new(1).unwrap().get(), 1);
        assert_eq!(Strength::new(5).unwrap().get(), 5);
        assert_eq!(
            Strength::new(6),
            Err(ValidationError::InvalidStrength("6".to_string()))
        );
        assert_eq!(Strength::default().get(), 3);
    }

    #[test]
    fn test_parse() {
        assert_eq!("4".parse::<Strength>().unwrap().get(), 4);
        assert_eq!(" 2 ".parse::<Strength>().unwrap().get(), 2);
        assert_eq!(
            "strong".parse::<Strength>(),
            Err(ValidationError::InvalidStrength("strong".to_string()))
        );
        assert!("-1".parse::<Strength>().is_err());
        assert!("300".parse::<Strength>().is_err());
    }
}
