//! Input validation for tool parameters
//!
//! Free-text parameters are percent-encoded before they reach a request
//! path, so validation here is about length limits and the few parameters
//! with a fixed wire format.

use crate::error::{Result, TaskerError};
use regex::Regex;
use std::sync::OnceLock;

/// MAC address validation regex
static MAC_REGEX: OnceLock<Regex> = OnceLock::new();

/// Maximum length constraints
pub struct ValidationLimits;

impl ValidationLimits {
    /// Maximum app name / package identifier length
    pub const MAX_APP_NAME_LENGTH: usize = 100;

    /// Maximum free-text length (notification title/body, spoken text)
    pub const MAX_TEXT_LENGTH: usize = 500;
}

/// Input validator for MCP tool parameters
pub struct InputValidator;

impl InputValidator {
    fn mac_regex() -> &'static Regex {
        MAC_REGEX.get_or_init(|| {
            // MAC address formats: XX:XX:XX:XX:XX:XX or XX-XX-XX-XX-XX-XX
            Regex::new(r"^([0-9a-fA-F]{2}[:-]){5}[0-9a-fA-F]{2}$").expect("Invalid MAC regex")
        })
    }

    /// Validate an app name or package identifier
    pub fn validate_app_name(name: &str) -> Result<&str> {
        if name.is_empty() {
            return Err(TaskerError::invalid_input("App name cannot be empty"));
        }

        if name.len() > ValidationLimits::MAX_APP_NAME_LENGTH {
            return Err(TaskerError::invalid_input(format!(
                "App name too long (max {} characters)",
                ValidationLimits::MAX_APP_NAME_LENGTH
            )));
        }

        if name.contains('\0') {
            return Err(TaskerError::invalid_input(
                "App name contains invalid characters",
            ));
        }

        Ok(name)
    }

    /// Validate free text (notification title/body, spoken text)
    pub fn validate_text(text: &str) -> Result<&str> {
        if text.is_empty() {
            return Err(TaskerError::invalid_input("Text cannot be empty"));
        }

        if text.len() > ValidationLimits::MAX_TEXT_LENGTH {
            return Err(TaskerError::invalid_input(format!(
                "Text too long (max {} characters)",
                ValidationLimits::MAX_TEXT_LENGTH
            )));
        }

        if text.contains('\0') {
            return Err(TaskerError::invalid_input("Text contains invalid characters"));
        }

        Ok(text)
    }

    /// Validate a MAC address for the wake-signal helper
    pub fn validate_mac(mac: &str) -> Result<&str> {
        if Self::mac_regex().is_match(mac) {
            Ok(mac)
        } else {
            Err(TaskerError::invalid_input(format!(
                "Invalid MAC address: {mac}. Expected format XX:XX:XX:XX:XX:XX"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_mac_formats() {
        assert!(InputValidator::validate_mac("AA:BB:CC:DD:EE:FF").is_ok());
        assert!(InputValidator::validate_mac("aa-bb-cc-dd-ee-ff").is_ok());
        assert!(InputValidator::validate_mac("0c:d8:c0:6b:85:57").is_ok());
    }

    #[test]
    fn rejects_malformed_macs() {
        assert!(InputValidator::validate_mac("").is_err());
        assert!(InputValidator::validate_mac("AA:BB:CC:DD:EE").is_err());
        assert!(InputValidator::validate_mac("AA:BB:CC:DD:EE:GG").is_err());
        assert!(InputValidator::validate_mac("AABBCCDDEEFF").is_err());
        assert!(InputValidator::validate_mac("AA:BB:CC:DD:EE:FF; reboot").is_err());
    }

    #[test]
    fn rejects_empty_and_oversized_text() {
        assert!(InputValidator::validate_text("").is_err());
        assert!(InputValidator::validate_text(&"x".repeat(501)).is_err());
        assert!(InputValidator::validate_text("Hello World").is_ok());
    }

    #[test]
    fn rejects_nul_in_app_name() {
        assert!(InputValidator::validate_app_name("Spo\0tify").is_err());
        assert!(InputValidator::validate_app_name("Spotify").is_ok());
    }
}
