//! Mobile number normalisation.
//!
//! Canonical form is exactly ten ASCII digits with no country code. That is
//! what gets stored in the backend and compared on login. The `+91` prefix is
//! only ever added for display.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const COUNTRY_PREFIX: &str = "+91";
pub const MOBILE_DIGITS: usize = 10;

/// True iff `value` is exactly ten ASCII digits.
pub fn is_valid_mobile(value: &str) -> bool {
    value.len() == MOBILE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Please enter a valid 10-digit mobile number")]
pub struct InvalidMobile;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mobile(String);

impl Mobile {
    /// Accepts `9876543210`, ` 9876543210 ` and `+919876543210`.
    pub fn parse(input: &str) -> Result<Self, InvalidMobile> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix(COUNTRY_PREFIX).unwrap_or(trimmed);
        if is_valid_mobile(digits) {
            Ok(Self(digits.to_string()))
        } else {
            Err(InvalidMobile)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn display(&self) -> String {
        format!("{COUNTRY_PREFIX}{}", self.0)
    }
}

impl FromStr for Mobile {
    type Err = InvalidMobile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Mobile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validator_accepts_exactly_ten_digits() {
        for len in 0..=14 {
            let digits = "9".repeat(len);
            assert_eq!(is_valid_mobile(&digits), len == 10, "length {len}");
        }
        assert!(!is_valid_mobile("98765o3210"));
        assert!(!is_valid_mobile("+919876543210"));
    }

    #[test]
    fn parse_strips_country_prefix() {
        let mobile = Mobile::parse(" +919876543210 ").unwrap();
        assert_eq!(mobile.as_str(), "9876543210");
        assert_eq!(mobile.display(), "+919876543210");
        assert_eq!(Mobile::parse("9876543210").unwrap(), mobile);
    }

    #[test]
    fn parse_rejects_other_lengths() {
        assert_eq!(Mobile::parse("919876543210"), Err(InvalidMobile));
        assert_eq!("12345".parse::<Mobile>(), Err(InvalidMobile));
    }
}
