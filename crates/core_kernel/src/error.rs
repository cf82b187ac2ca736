//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }
}

/// Rejects empty or whitespace-only text for a required field
///
/// # Arguments
///
/// * `field` - Field name used in the error message
/// * `value` - The candidate value
pub fn require_non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(format!("{} must not be blank", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_blank() {
        assert!(require_non_blank("name", "서울").is_ok());
        assert!(require_non_blank("name", "").is_err());

        let err = require_non_blank("title", "   ").unwrap_err();
        assert!(err.to_string().contains("title"));
    }
}
