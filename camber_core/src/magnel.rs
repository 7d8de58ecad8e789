//! # Magnel Diagram
//!
//! Feasible-region diagram relating inverse prestress force 1/P to tendon
//! eccentricity. Four stress-limit constraints are sampled over a fixed grid
//! of candidate eccentricities between the cover-reduced geometric bounds;
//! each constraint becomes a polyline of (1/P, e) points.
//!
//! Points whose inverse force is not strictly positive would require zero or
//! negative prestress and are omitted rather than clamped. Degenerate
//! constraint denominators likewise skip the point. The reported optimal
//! point is a heuristic suggestion (80% of the maximum eccentricity, force
//! from the transfer-tension and service-tension constraints); callers
//! wanting the true optimum intersect the four polylines themselves.

use serde::{Deserialize, Serialize};

use crate::materials::ConcreteGrade;
use crate::prestress::{PrestressLosses, MIN_COVER};
use crate::section::SectionProperties;

/// Number of candidate eccentricities sampled between the geometric bounds
const NUM_POINTS: usize = 50;

/// Denominators smaller than this are treated as degenerate
const DENOM_EPS: f64 = 1e-6;

/// Single point on the diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagnelPoint {
    /// Inverse prestress force 1/P (1/kN, scaled ×10³ for plotting)
    pub inverse_force: f64,
    /// Tendon eccentricity (mm)
    pub eccentricity: f64,
}

/// Magnel diagram data: four constraint polylines plus the heuristic
/// optimal point and the geometric eccentricity bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagnelDiagram {
    /// Top fiber compression limit at transfer
    pub line1_top_transfer: Vec<MagnelPoint>,

    /// Bottom fiber tension limit at transfer
    pub line2_bot_transfer: Vec<MagnelPoint>,

    /// Top fiber tension limit at service (no-tension, η-scaled)
    pub line3_top_service: Vec<MagnelPoint>,

    /// Bottom fiber compression limit at service (η-scaled)
    pub line4_bot_service: Vec<MagnelPoint>,

    /// Suggested design point at 80% of the maximum eccentricity
    pub optimal_point: MagnelPoint,

    /// Suggested force bracket, lower bound (kN)
    pub min_force: f64,

    /// Suggested force bracket, upper bound (kN)
    pub max_force: f64,

    /// Geometric eccentricity lower bound, −(y_top − cover) (mm)
    pub min_eccentricity: f64,

    /// Geometric eccentricity upper bound, y_bot − cover (mm)
    pub max_eccentricity: f64,
}

/// Generate the Magnel diagram.
///
/// # Arguments
///
/// * `props` - Derived section properties
/// * `concrete` - Concrete grade (stress limits derive from fck and fctm)
/// * `m_transfer` - Moment at transfer, self-weight only (kNm)
/// * `m_service` - Moment at service, full load (kNm)
/// * `losses` - Prestress losses (supplies the effective-prestress ratio η)
pub fn generate(
    props: &SectionProperties,
    concrete: &ConcreteGrade,
    m_transfer: f64,
    m_service: f64,
    losses: &PrestressLosses,
) -> MagnelDiagram {
    let fck = concrete.fck;
    let fctm = concrete.fctm;

    // At transfer the concrete is fresh: take 80% of fck
    let fci = 0.8 * fck;
    let sigma_c_max_transfer = 0.6 * fci;
    let sigma_t_max_transfer = fctm;

    // At service
    let sigma_c_max_service = 0.6 * fck;
    let sigma_t_max_service = 0.0; // no tension, conservative crack control

    let eta = losses.effective_prestress_ratio();

    let a = props.area;
    let z_t = props.z_top;
    let z_b = props.z_bot;

    let m_min_nmm = m_transfer * 1e6;
    let m_max_nmm = m_service * 1e6;

    // Geometric eccentricity bounds, cover deducted
    let e_max = props.y_bot - MIN_COVER;
    let e_min = -(props.y_top - MIN_COVER);

    let mut line1_top_transfer = Vec::new();
    let mut line2_bot_transfer = Vec::new();
    let mut line3_top_service = Vec::new();
    let mut line4_bot_service = Vec::new();

    for i in 0..NUM_POINTS {
        let e = e_min + i as f64 * (e_max - e_min) / (NUM_POINTS - 1) as f64;

        // Line 1: top fiber at transfer (compression limit)
        // -P/A + Pe/Zt - M_min/Zt <= sigma_c_max_transfer
        let denom1 = sigma_c_max_transfer + m_min_nmm / z_t;
        if denom1.abs() > DENOM_EPS {
            let inv_p = (1.0 / a - e / z_t) / denom1;
            push_if_positive(&mut line1_top_transfer, inv_p, e);
        }

        // Line 2: bottom fiber at transfer (tension limit)
        // -P/A - Pe/Zb + M_min/Zb >= -sigma_t_max_transfer
        let denom2 = sigma_t_max_transfer + m_min_nmm / z_b;
        if denom2.abs() > DENOM_EPS {
            let inv_p = (1.0 / a + e / z_b) / denom2;
            push_if_positive(&mut line2_bot_transfer, inv_p, e);
        }

        // Line 3: top fiber at service (tension limit), effective prestress
        // eta * (-P/A + Pe/Zt) - M_max/Zt >= -sigma_t_max_service
        let denom3 = (sigma_t_max_service + m_max_nmm / z_t) / eta;
        if denom3.abs() > DENOM_EPS {
            let inv_p = (1.0 / a - e / z_t) / denom3;
            push_if_positive(&mut line3_top_service, inv_p, e);
        }

        // Line 4: bottom fiber at service (compression limit)
        // eta * (-P/A - Pe/Zb) + M_max/Zb <= sigma_c_max_service
        let denom4 = (sigma_c_max_service - m_max_nmm / z_b) / eta;
        if denom4.abs() > DENOM_EPS {
            let inv_p = (1.0 / a + e / z_b) / denom4;
            push_if_positive(&mut line4_bot_service, inv_p, e);
        }
    }

    // Heuristic suggestion: high eccentricity, force from the two tension
    // constraints evaluated there
    let optimal_e = e_max * 0.8;
    let denom_transfer = sigma_t_max_transfer + m_min_nmm / z_b;
    let optimal_inv_p = if denom_transfer > 0.0 {
        let from_transfer = (1.0 / a + optimal_e / z_b) / denom_transfer;
        let from_service =
            (1.0 / a - optimal_e / z_t) / ((sigma_t_max_service + m_max_nmm / z_t) / eta);
        from_transfer.max(from_service)
    } else {
        1e-6
    };

    let optimal_p = if optimal_inv_p > 0.0 {
        1.0 / (optimal_inv_p * 1e-3)
    } else {
        0.0
    };

    MagnelDiagram {
        line1_top_transfer,
        line2_bot_transfer,
        line3_top_service,
        line4_bot_service,
        optimal_point: MagnelPoint {
            inverse_force: optimal_inv_p * 1e3,
            eccentricity: optimal_e,
        },
        min_force: optimal_p * 0.5,
        max_force: optimal_p * 2.0,
        min_eccentricity: e_min,
        max_eccentricity: e_max,
    }
}

/// Points outside the physical feasible region (zero or negative force) are
/// discarded, not clamped.
fn push_if_positive(line: &mut Vec<MagnelPoint>, inv_p: f64, e: f64) {
    if inv_p > 0.0 {
        line.push(MagnelPoint {
            inverse_force: inv_p * 1e3,
            eccentricity: e,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::PrestressingSteel;
    use crate::prestress::{
        losses, PrestressConfiguration, PrestressMethod, TendonGeometry, TendonProfile,
    };
    use crate::section::{BeamSection, RectangularSection};

    fn fixture() -> (SectionProperties, ConcreteGrade, PrestressLosses) {
        let props = BeamSection::Rectangular(RectangularSection {
            width: 400.0,
            height: 800.0,
        })
        .properties();
        let concrete = ConcreteGrade::new(40.0);
        let config = PrestressConfiguration::new(
            PrestressMethod::PostTensioned,
            1400.0,
            TendonGeometry {
                profile: TendonProfile::Parabolic {
                    e_end: Some(0.0),
                    e_mid: Some(300.0),
                },
                num_strands: 12,
            },
            PrestressingSteel::y1860s7(),
        );
        let losses = losses::calculate(&config, &props, &concrete, 20.0, 300.0);
        (props, concrete, losses)
    }

    #[test]
    fn test_eccentricity_bounds() {
        let (props, concrete, losses) = fixture();
        let diagram = generate(&props, &concrete, 400.0, 1400.0, &losses);

        assert_eq!(diagram.max_eccentricity, 350.0);
        assert_eq!(diagram.min_eccentricity, -350.0);
        assert!(diagram.min_eccentricity < diagram.max_eccentricity);
    }

    #[test]
    fn test_all_points_strictly_positive() {
        let (props, concrete, losses) = fixture();
        let diagram = generate(&props, &concrete, 400.0, 1400.0, &losses);

        for line in [
            &diagram.line1_top_transfer,
            &diagram.line2_bot_transfer,
            &diagram.line3_top_service,
            &diagram.line4_bot_service,
        ] {
            for point in line {
                assert!(point.inverse_force > 0.0);
                assert!(point.eccentricity >= diagram.min_eccentricity);
                assert!(point.eccentricity <= diagram.max_eccentricity);
            }
        }
    }

    #[test]
    fn test_lines_populated_for_realistic_section() {
        let (props, concrete, losses) = fixture();
        let diagram = generate(&props, &concrete, 400.0, 1400.0, &losses);

        assert!(!diagram.line2_bot_transfer.is_empty());
        assert!(!diagram.line3_top_service.is_empty());
        // No line can exceed the sample grid
        assert!(diagram.line1_top_transfer.len() <= 50);
    }

    #[test]
    fn test_optimal_point_at_80_percent_of_e_max() {
        let (props, concrete, losses) = fixture();
        let diagram = generate(&props, &concrete, 400.0, 1400.0, &losses);

        assert!((diagram.optimal_point.eccentricity - 0.8 * 350.0).abs() < 1e-9);
        assert!(diagram.optimal_point.inverse_force > 0.0);
    }

    #[test]
    fn test_force_bracket_around_optimal() {
        let (props, concrete, losses) = fixture();
        let diagram = generate(&props, &concrete, 400.0, 1400.0, &losses);

        assert!(diagram.min_force > 0.0);
        assert!((diagram.max_force - 4.0 * diagram.min_force).abs() < 1e-6);
    }

    #[test]
    fn test_small_section_bounds_ordering() {
        // Height just above twice the cover still leaves a valid range
        let props = BeamSection::Rectangular(RectangularSection {
            width: 200.0,
            height: 120.0,
        })
        .properties();
        let (_, concrete, losses) = fixture();
        let diagram = generate(&props, &concrete, 1.0, 2.0, &losses);

        assert!(diagram.min_eccentricity < diagram.max_eccentricity);
    }
}
