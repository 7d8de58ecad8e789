//! Deflection check per EC2 7.4.
//!
//! Immediate deflection is the load-induced sag minus the prestress-induced
//! hog; the long-term increment scales the immediate value by the creep
//! coefficient. The total is checked against span/250. Sign convention:
//! positive down, so a prestress-dominated beam reports negative (upward)
//! deflection and the limit applies to its magnitude.

use serde::{Deserialize, Serialize};

use crate::materials::ConcreteGrade;
use crate::prestress::{PrestressConfiguration, PrestressLosses};
use crate::rounding::round_to;
use crate::section::SectionProperties;

use super::CheckStatus;

/// Deflection check results.
///
/// ## JSON Example
///
/// ```json
/// {
///   "delta_immediate": -32.43,
///   "delta_long_term": -64.86,
///   "delta_total": -97.29,
///   "span_ratio": 205.6,
///   "limit": 80.0,
///   "utilization": 1.216,
///   "status": "FAIL"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflectionResult {
    /// Immediate deflection (mm), positive down
    pub delta_immediate: f64,

    /// Long-term creep increment (mm)
    pub delta_long_term: f64,

    /// Total deflection (mm)
    pub delta_total: f64,

    /// Span / |total deflection|
    pub span_ratio: f64,

    /// Allowable deflection, span/250 (mm)
    pub limit: f64,

    /// Utilization ratio |total| / limit
    pub utilization: f64,

    /// PASS or FAIL
    pub status: CheckStatus,
}

impl DeflectionResult {
    /// Whether the check passes
    pub fn passes(&self) -> bool {
        self.status.is_pass()
    }
}

/// Check deflection.
///
/// # Arguments
///
/// * `props` - Derived section properties
/// * `concrete` - Concrete grade
/// * `config` - Prestressing definition
/// * `losses` - Prestress losses
/// * `span` - Span (m)
/// * `total_udl` - Total service uniform load including self-weight (kN/m)
/// * `eccentricity` - Tendon eccentricity (mm)
pub fn check(
    props: &SectionProperties,
    concrete: &ConcreteGrade,
    config: &PrestressConfiguration,
    losses: &PrestressLosses,
    span: f64,
    total_udl: f64,
    eccentricity: f64,
) -> DeflectionResult {
    let ap = config.tendon_area();
    let sigma_pe = losses.effective_stress(config.jacking_stress);
    let p_e = sigma_pe * ap / 1000.0; // kN

    let l = span * 1000.0; // mm
    let w = total_udl / 1000.0; // kN/mm

    let i = props.moment_of_inertia;
    let ecm = concrete.ecm_mpa();

    // Sag under the uniform service load (simply supported)
    let delta_load = 5.0 * w * l.powi(4) / (384.0 * ecm * i);

    // Hog from the eccentric prestress (parabolic equivalent load)
    let delta_prestress = p_e * 1000.0 * eccentricity * l.powi(2) / (8.0 * ecm * i);

    let delta_immediate = delta_load - delta_prestress;

    // Long-term increment
    let phi = concrete.creep_coefficient;
    let delta_long_term = delta_immediate * phi;

    let delta_total = delta_immediate + delta_long_term;

    // span/250 for appearance
    let limit = l / 250.0;

    let span_ratio = if delta_total != 0.0 {
        l / delta_total.abs()
    } else {
        f64::INFINITY
    };
    let utilization = delta_total.abs() / limit;
    let status = CheckStatus::from_utilization(utilization);

    DeflectionResult {
        delta_immediate: round_to(delta_immediate, 2),
        delta_long_term: round_to(delta_long_term, 2),
        delta_total: round_to(delta_total, 2),
        span_ratio: round_to(span_ratio, 1),
        limit: round_to(limit, 2),
        utilization: round_to(utilization, 3),
        status,
    }
}
