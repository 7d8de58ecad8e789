//! # Error Types
//!
//! Structured error types for camber_core. The analysis pipeline itself is
//! total: shape and profile dispatch is enum-based, so a wrong variant is a
//! compile error, not a runtime one. What remains fallible is the integration
//! seam where upstream transports hand us string discriminators: an
//! unrecognized code indicates a construction bug in the caller and rejects
//! the whole analysis.
//!
//! ## Example
//!
//! ```rust
//! use camber_core::errors::CalcError;
//! use camber_core::section::SectionKind;
//!
//! let err = SectionKind::parse("u_beam").unwrap_err();
//! assert_eq!(err.error_code(), "UNKNOWN_SECTION_TYPE");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for camber_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for the analysis boundary.
///
/// Both variants are tag-mismatch errors: a discriminator string arriving
/// from an upstream transport did not match any known variant. There is no
/// numeric error variant; degenerate denominators inside the pipeline are
/// handled by omitting the affected data point or reporting an infinite
/// utilization, never by raising.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A section discriminator matched none of the four known shapes
    #[error("Unknown section type: {section_type}")]
    UnknownSectionType { section_type: String },

    /// A tendon profile discriminator matched none of the known profiles
    #[error("Unknown tendon profile: {profile_type}")]
    UnknownTendonProfile { profile_type: String },
}

impl CalcError {
    /// Create an UnknownSectionType error
    pub fn unknown_section_type(section_type: impl Into<String>) -> Self {
        CalcError::UnknownSectionType {
            section_type: section_type.into(),
        }
    }

    /// Create an UnknownTendonProfile error
    pub fn unknown_tendon_profile(profile_type: impl Into<String>) -> Self {
        CalcError::UnknownTendonProfile {
            profile_type: profile_type.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnknownSectionType { .. } => "UNKNOWN_SECTION_TYPE",
            CalcError::UnknownTendonProfile { .. } => "UNKNOWN_TENDON_PROFILE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::unknown_section_type("hexagonal");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::unknown_section_type("x").error_code(),
            "UNKNOWN_SECTION_TYPE"
        );
        assert_eq!(
            CalcError::unknown_tendon_profile("x").error_code(),
            "UNKNOWN_TENDON_PROFILE"
        );
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::unknown_tendon_profile("zigzag");
        assert_eq!(error.to_string(), "Unknown tendon profile: zigzag");
    }
}
