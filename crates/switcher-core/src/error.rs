//! Error types for item sources

use thiserror::Error;

/// Errors an item source can report.
///
/// The mock source never fails, but the fetch is modeled as fallible so a
/// real backend can slot in behind [`crate::ItemSource`] without changing
/// the interface contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("item source unavailable: {reason}")]
    Unavailable { reason: String },
}

impl SourceError {
    /// Convenience constructor for the unavailable variant.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_display() {
        let err = SourceError::unavailable("backend offline");
        assert_eq!(
            err.to_string(),
            "item source unavailable: backend offline"
        );
    }
}
