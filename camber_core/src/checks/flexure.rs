//! Flexural capacity check per EC2 6.1.
//!
//! Ultimate moment capacity from a rectangular stress block with the tendon
//! at its design strength. The four elastic fiber stresses (top/bottom, at
//! transfer and at service) are reported as diagnostics; they do not enter
//! the pass/fail verdict. Compression is negative.

use serde::{Deserialize, Serialize};

use crate::materials::ConcreteGrade;
use crate::prestress::{PrestressConfiguration, PrestressLosses};
use crate::rounding::round_to;
use crate::section::SectionProperties;

use super::{effective_web_width, CheckStatus};

/// Flexure check results.
///
/// ## JSON Example
///
/// ```json
/// {
///   "m_ed": 2310.0,
///   "m_rd": 1134.3,
///   "utilization": 2.037,
///   "status": "FAIL",
///   "sigma_top_transfer": -1.94,
///   "sigma_bot_transfer": -10.27,
///   "sigma_top_service": -24.0,
///   "sigma_bot_service": 11.43
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlexureResult {
    /// Design moment (kNm)
    pub m_ed: f64,

    /// Moment resistance (kNm)
    pub m_rd: f64,

    /// Utilization ratio M_Ed / M_Rd
    pub utilization: f64,

    /// PASS or FAIL
    pub status: CheckStatus,

    /// Top fiber stress at transfer (MPa)
    pub sigma_top_transfer: f64,

    /// Bottom fiber stress at transfer (MPa)
    pub sigma_bot_transfer: f64,

    /// Top fiber stress at service (MPa)
    pub sigma_top_service: f64,

    /// Bottom fiber stress at service (MPa)
    pub sigma_bot_service: f64,
}

impl FlexureResult {
    /// Whether the check passes
    pub fn passes(&self) -> bool {
        self.status.is_pass()
    }
}

/// Check flexural capacity.
///
/// # Arguments
///
/// * `props` - Derived section properties
/// * `concrete` - Concrete grade
/// * `config` - Prestressing definition
/// * `losses` - Prestress losses
/// * `m_ed` - Design (ultimate) moment (kNm)
/// * `m_transfer` - Moment at transfer (kNm)
/// * `eccentricity` - Tendon eccentricity (mm)
/// * `h` - Section height (mm)
#[allow(clippy::too_many_arguments)]
pub fn check(
    props: &SectionProperties,
    concrete: &ConcreteGrade,
    config: &PrestressConfiguration,
    losses: &PrestressLosses,
    m_ed: f64,
    m_transfer: f64,
    eccentricity: f64,
    h: f64,
) -> FlexureResult {
    let ap = config.tendon_area();

    // Effective force after all losses, and at transfer
    let sigma_pe = losses.effective_stress(config.jacking_stress);
    let p_e = sigma_pe * ap / 1000.0; // kN

    let sigma_pi = losses.stress_at_transfer(config.jacking_stress);
    let p_i = sigma_pi * ap / 1000.0; // kN

    // Design strengths
    let fcd = 0.85 * concrete.fck / 1.5;
    let fpd = config.steel.fp01k / 1.15;

    // Depth to the tendon, centroid taken at mid-height
    let d = h - (h / 2.0 - eccentricity);

    // Rectangular stress block, tendon at design strength
    let x = ap * fpd / (0.8 * fcd * effective_web_width(h));
    let z = if x > 0.0 { d - 0.4 * x } else { 0.9 * d };

    let m_rd = ap * fpd * z / 1e6; // kNm

    // Diagnostic fiber stresses from superposed axial + eccentric prestress
    // and applied moment
    let a = props.area;
    let z_t = props.z_top;
    let z_b = props.z_bot;

    let sigma_top_transfer =
        -p_i * 1000.0 / a + p_i * 1000.0 * eccentricity / z_t - m_transfer * 1e6 / z_t;
    let sigma_bot_transfer =
        -p_i * 1000.0 / a - p_i * 1000.0 * eccentricity / z_b + m_transfer * 1e6 / z_b;

    let sigma_top_service =
        -p_e * 1000.0 / a + p_e * 1000.0 * eccentricity / z_t - m_ed * 1e6 / z_t;
    let sigma_bot_service =
        -p_e * 1000.0 / a - p_e * 1000.0 * eccentricity / z_b + m_ed * 1e6 / z_b;

    let utilization = if m_rd > 0.0 {
        m_ed / m_rd
    } else {
        f64::INFINITY
    };
    let status = CheckStatus::from_utilization(utilization);

    FlexureResult {
        m_ed: round_to(m_ed, 2),
        m_rd: round_to(m_rd, 2),
        utilization: round_to(utilization, 3),
        status,
        sigma_top_transfer: round_to(sigma_top_transfer, 2),
        sigma_bot_transfer: round_to(sigma_bot_transfer, 2),
        sigma_top_service: round_to(sigma_top_service, 2),
        sigma_bot_service: round_to(sigma_bot_service, 2),
    }
}
