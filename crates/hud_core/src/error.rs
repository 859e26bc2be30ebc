//! The single error type used across the HUD core

use std::borrow::Cow;
use thiserror::Error;

/// Result alias for every fallible HUD operation
pub type HudResult<T> = Result<T, HudError>;

/// Generic "operation failed" error carrying a human-readable message.
///
/// Resource loading, page construction, configuration and draw failures all
/// use this one type. There are no error codes; the message is the contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HudError {
    message: Cow<'static, str>,
}

impl HudError {
    /// Create an error from an owned or static message
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self { message: message.into() }
    }

    /// Error for an asset that could not be lent out
    pub fn resource_unavailable(what: impl std::fmt::Display) -> Self {
        Self::new(format!("resource unavailable: {what}"))
    }

    /// The descriptive message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for HudError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&'static str> for HudError {
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_static_and_owned() {
        let a: HudError = "font load failed".into();
        let b: HudError = String::from("font load failed").into();

        assert_eq!(a, b);
        assert_eq!(a.to_string(), "font load failed");
    }

    #[test]
    fn test_resource_unavailable_message() {
        let err = HudError::resource_unavailable("font role Fixed");
        assert_eq!(err.message(), "resource unavailable: font role Fixed");
    }
}
