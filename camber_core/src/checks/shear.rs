//! Shear capacity check per EC2 6.2.
//!
//! Concrete shear resistance with the minimum-value floor and the
//! strut-crushing ceiling. Where the demand exceeds the plain-concrete
//! resistance, the check also sizes vertical shear reinforcement at
//! cot θ = 2.5 and reports the combined resistance it provides.

use serde::{Deserialize, Serialize};

use crate::materials::ConcreteGrade;
use crate::prestress::{PrestressConfiguration, PrestressLosses};
use crate::rounding::round_to;
use crate::section::{BeamSection, SectionProperties};

use super::CheckStatus;

/// Shear check results.
///
/// ## JSON Example
///
/// ```json
/// {
///   "v_ed": 462.0,
///   "v_rd_c": 326.91,
///   "v_rd_s": 462.0,
///   "v_rd_max": 1747.3,
///   "utilization": 0.586,
///   "status": "PASS",
///   "shear_reinforcement_required": true,
///   "asw_s": 506.85
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShearResult {
    /// Design shear force (kN)
    pub v_ed: f64,

    /// Concrete shear resistance without reinforcement (kN)
    pub v_rd_c: f64,

    /// Shear reinforcement contribution (kN)
    pub v_rd_s: f64,

    /// Maximum resistance, strut crushing (kN)
    pub v_rd_max: f64,

    /// Utilization ratio V_Ed / V_Rd
    pub utilization: f64,

    /// PASS or FAIL
    pub status: CheckStatus,

    /// Whether V_Ed exceeds the plain-concrete resistance
    pub shear_reinforcement_required: bool,

    /// Required shear reinforcement (mm²/m), when required
    pub asw_s: Option<f64>,
}

impl ShearResult {
    /// Whether the check passes
    pub fn passes(&self) -> bool {
        self.status.is_pass()
    }
}

/// Check shear capacity.
///
/// # Arguments
///
/// * `props` - Derived section properties
/// * `section` - Cross-section (supplies the shear web width)
/// * `concrete` - Concrete grade
/// * `config` - Prestressing definition
/// * `losses` - Prestress losses
/// * `v_ed` - Design shear force (kN)
/// * `h` - Section height (mm)
pub fn check(
    props: &SectionProperties,
    section: &BeamSection,
    concrete: &ConcreteGrade,
    config: &PrestressConfiguration,
    losses: &PrestressLosses,
    v_ed: f64,
    h: f64,
) -> ShearResult {
    let ap = config.tendon_area();
    let sigma_pe = losses.effective_stress(config.jacking_stress);
    let p_e = sigma_pe * ap / 1000.0; // kN

    let bw = section.web_width();
    let d = 0.9 * h; // effective depth approximation

    let fck = concrete.fck;
    let fcd = 0.85 * fck / 1.5;

    // EC2 6.2.2 - resistance without shear reinforcement
    // V_Rd,c = [C_Rd,c * k * (100 * rho_l * fck)^(1/3) + k1 * sigma_cp] * bw * d
    let k = (1.0 + (200.0 / d).sqrt()).min(2.0);
    let rho_l = (ap / (bw * d)).min(0.02);
    let sigma_cp = (p_e * 1000.0 / props.area).min(0.2 * fcd);

    let c_rd_c = 0.18 / 1.5;
    let k1 = 0.15;

    let v_rd_c_base =
        (c_rd_c * k * (100.0 * rho_l * fck).powf(1.0 / 3.0) + k1 * sigma_cp) * bw * d / 1000.0;

    // Minimum value floor
    let v_min = 0.035 * k.powf(1.5) * fck.sqrt();
    let v_rd_c_min = (v_min + k1 * sigma_cp) * bw * d / 1000.0;
    let v_rd_c = v_rd_c_base.max(v_rd_c_min);

    // EC2 6.2.3 - strut crushing ceiling
    let alpha_cw = if sigma_cp > 0.0 {
        1.0 + sigma_cp / fcd
    } else {
        1.0
    };
    let v1 = 0.6 * (1.0 - fck / 250.0);
    let z = 0.9 * d;
    let v_rd_max = alpha_cw * bw * z * v1 * fcd / (2.0 * 1000.0); // cot θ = 2.5

    let shear_reinforcement_required = v_ed > v_rd_c;

    // Required vertical legs at cot θ = 2.5
    let (asw_s, v_rd_s) = if shear_reinforcement_required {
        let fywd = 500.0 / 1.15;
        let asw_s = v_ed * 1000.0 / (z * fywd * 2.5); // mm²/m
        let v_rd_s = asw_s * z * fywd * 2.5 / 1000.0;
        (Some(asw_s), v_rd_s)
    } else {
        (None, 0.0)
    };

    let v_rd = if shear_reinforcement_required {
        (v_rd_c + v_rd_s).min(v_rd_max)
    } else {
        v_rd_c
    };

    let utilization = if v_rd > 0.0 {
        v_ed / v_rd
    } else {
        f64::INFINITY
    };
    let status = CheckStatus::from_utilization(utilization);

    ShearResult {
        v_ed: round_to(v_ed, 2),
        v_rd_c: round_to(v_rd_c, 2),
        v_rd_s: round_to(v_rd_s, 2),
        v_rd_max: round_to(v_rd_max, 2),
        utilization: round_to(utilization, 3),
        status,
        shear_reinforcement_required,
        asw_s: asw_s.map(|v| round_to(v, 2)),
    }
}
