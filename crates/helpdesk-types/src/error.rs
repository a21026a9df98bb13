//! Error types shared across the Helpdesk crates.

use thiserror::Error;

/// Errors raised while loading or validating a FAQ pack artifact.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("pack file not found: {0}")]
    NotFound(String),

    #[error("failed to read pack: {0}")]
    Read(String),

    #[error("failed to parse pack: {0}")]
    Parse(String),

    #[error("pack contains no entries")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_error_display() {
        let err = PackError::NotFound("/tmp/faq.json".to_string());
        assert_eq!(err.to_string(), "pack file not found: /tmp/faq.json");

        let err = PackError::Parse("expected value at line 1".to_string());
        assert!(err.to_string().contains("expected value"));
    }
}
