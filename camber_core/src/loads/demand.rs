//! Simply-supported demand envelope.
//!
//! Reduces self-weight plus a set of load cases to governing moment and
//! shear. Point-load maxima are superposed independently of one another and
//! of the uniform load: the result is a conservative envelope of each
//! component's worst case, not the moment and shear at a single co-located
//! section.

use serde::{Deserialize, Serialize};

use super::LoadCase;

/// Governing demand for one load state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Demand {
    /// Governing bending moment (kNm)
    pub moment: f64,

    /// Governing shear force (kN)
    pub shear: f64,

    /// Moment from the uniform component alone (kNm)
    pub udl_moment: f64,

    /// Total factored uniform load, including self-weight (kN/m)
    pub total_udl: f64,
}

/// Compute the demand envelope for a simply supported span.
///
/// `factor` multiplies every load, self-weight included. A load state that
/// factors self-weight differently (ultimate: ×1.35 on top of the combined
/// 1.5) pre-scales `self_weight_udl` before calling.
///
/// # Arguments
///
/// * `span` - Span between supports (m)
/// * `load_cases` - Applied load cases, unfactored
/// * `self_weight_udl` - Self-weight UDL (kN/m)
/// * `factor` - Load factor applied to all loads
pub fn calculate(span: f64, load_cases: &[LoadCase], self_weight_udl: f64, factor: f64) -> Demand {
    let mut total_udl = self_weight_udl * factor;
    let mut moment = 0.0;
    let mut shear = 0.0;

    for case in load_cases {
        total_udl += case.udl * factor;

        for pl in &case.point_loads {
            let p = pl.magnitude * factor;
            let a = pl.position;
            let b = span - a;
            moment += p * a * b / span;
            shear += p * a.max(b) / span;
        }
    }

    // Uniform component (simply supported): M = wL²/8, V = wL/2
    let udl_moment = total_udl * span.powi(2) / 8.0;
    let udl_shear = total_udl * span / 2.0;

    moment += udl_moment;
    shear += udl_shear;

    Demand {
        moment,
        shear,
        udl_moment,
        total_udl,
    }
}
