//! # Limit-State Checks
//!
//! The four independent verifiers. Each follows the same pattern: a pure
//! `check(...)` function consuming section properties, losses and the
//! relevant demand, returning a `*Result` struct with a utilization ratio
//! and a [`CheckStatus`].
//!
//! ## Available Checks
//!
//! - [`flexure`] - Ultimate moment capacity plus diagnostic fiber stresses
//! - [`shear`] - Concrete shear resistance, reinforcement demand, strut ceiling
//! - [`deflection`] - Immediate and long-term deflection against span/250
//! - [`crack`] - Decompression gate, crack width against the exposure limit

pub mod crack;
pub mod deflection;
pub mod flexure;
pub mod shear;

use serde::{Deserialize, Serialize};

pub use crack::{CrackWidthResult, ExposureClass};
pub use deflection::DeflectionResult;
pub use flexure::FlexureResult;
pub use shear::ShearResult;

/// Verdict of a limit-state check.
///
/// Serializes to the wire strings downstream reports consume: `"PASS"`,
/// `"FAIL"`, `"PASS - Uncracked"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
    /// Crack-width check short-circuit: the section never decompresses
    #[serde(rename = "PASS - Uncracked")]
    Uncracked,
}

impl CheckStatus {
    /// Status from a utilization ratio: PASS at utilization ≤ 1.0.
    ///
    /// An infinite or NaN utilization (zero capacity) fails.
    pub fn from_utilization(utilization: f64) -> Self {
        if utilization <= 1.0 {
            CheckStatus::Pass
        } else {
            CheckStatus::Fail
        }
    }

    /// Whether this verdict counts as passing (uncracked does)
    pub fn is_pass(&self) -> bool {
        !matches!(self, CheckStatus::Fail)
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Fail => "FAIL",
            CheckStatus::Uncracked => "PASS - Uncracked",
        };
        write!(f, "{s}")
    }
}

/// Flat estimate of the compression-zone width from the section height,
/// used by the stress-block and crack models where the true web geometry
/// is not threaded through.
pub(crate) fn effective_web_width(h: f64) -> f64 {
    h * 0.3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_utilization() {
        assert_eq!(CheckStatus::from_utilization(0.95), CheckStatus::Pass);
        assert_eq!(CheckStatus::from_utilization(1.0), CheckStatus::Pass);
        assert_eq!(CheckStatus::from_utilization(1.001), CheckStatus::Fail);
        assert_eq!(CheckStatus::from_utilization(f64::INFINITY), CheckStatus::Fail);
        assert_eq!(CheckStatus::from_utilization(f64::NAN), CheckStatus::Fail);
    }

    #[test]
    fn test_uncracked_counts_as_pass() {
        assert!(CheckStatus::Pass.is_pass());
        assert!(CheckStatus::Uncracked.is_pass());
        assert!(!CheckStatus::Fail.is_pass());
    }

    #[test]
    fn test_wire_strings() {
        assert_eq!(
            serde_json::to_string(&CheckStatus::Uncracked).unwrap(),
            "\"PASS - Uncracked\""
        );
        assert_eq!(CheckStatus::Fail.to_string(), "FAIL");
    }
}
