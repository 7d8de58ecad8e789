//! # Full Beam Analysis
//!
//! The orchestrator: one pure function that runs the whole pipeline in its
//! strict dependency order and aggregates the verdicts.
//!
//! Stage order: section properties → self-weight → eccentricity selection →
//! demand at transfer/service/ultimate → prestress losses → Magnel diagram →
//! flexure (ultimate) → shear (ultimate) → deflection (service) → crack
//! width (service) → cable concordancy. Every stage is a deterministic
//! function of immutable values, so two calls with the same inputs produce
//! bit-identical results and independent analyses can run in parallel
//! without shared state.
//!
//! ## Example
//!
//! ```rust
//! use camber_core::analysis::analyze;
//! use camber_core::loads::LoadCase;
//! use camber_core::materials::{ConcreteGrade, PrestressingSteel};
//! use camber_core::prestress::{
//!     PrestressConfiguration, PrestressMethod, TendonGeometry, TendonProfile,
//! };
//! use camber_core::section::{BeamSection, RectangularSection};
//!
//! let section = BeamSection::Rectangular(RectangularSection {
//!     width: 400.0,
//!     height: 800.0,
//! });
//! let concrete = ConcreteGrade::new(40.0);
//! let prestress = PrestressConfiguration::new(
//!     PrestressMethod::PostTensioned,
//!     1400.0,
//!     TendonGeometry {
//!         profile: TendonProfile::Parabolic {
//!             e_end: Some(0.0),
//!             e_mid: Some(300.0),
//!         },
//!         num_strands: 12,
//!     },
//!     PrestressingSteel::y1860s7(),
//! );
//! let loads = vec![LoadCase::new("Imposed").with_udl(10.0)];
//!
//! let result = analyze(12.0, &section, &concrete, &prestress, &loads, true);
//! println!("Overall: {}", result.overall_status);
//! ```

use serde::{Deserialize, Serialize};

use crate::checks::{
    crack, deflection, flexure, shear, CheckStatus, CrackWidthResult, DeflectionResult,
    ExposureClass, FlexureResult, ShearResult,
};
use crate::loads::{demand, LoadCase};
use crate::magnel::{self, MagnelDiagram};
use crate::materials::ConcreteGrade;
use crate::prestress::{losses, PrestressConfiguration, PrestressLosses};
use crate::section::{BeamSection, SectionProperties};

/// Permanent-load factor applied to self-weight at the ultimate state
const ULS_PERMANENT_FACTOR: f64 = 1.35;

/// Combined load factor at the ultimate state
const ULS_LOAD_FACTOR: f64 = 1.5;

/// Complete analysis output, created once per invocation.
///
/// Aggregates the derived section properties, the loss breakdown, the Magnel
/// diagram, the four limit-state verdicts, the concordancy flag, and the
/// overall status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Derived section properties
    pub section_properties: SectionProperties,

    /// Prestress loss breakdown
    pub prestress_losses: PrestressLosses,

    /// Feasible-region diagram
    pub magnel_diagram: MagnelDiagram,

    /// Flexure verdict (at ultimate demand)
    pub flexure: FlexureResult,

    /// Shear verdict (at ultimate demand)
    pub shear: ShearResult,

    /// Deflection verdict (at service demand)
    pub deflection: DeflectionResult,

    /// Crack width verdict (at service demand)
    pub crack_width: CrackWidthResult,

    /// Whether the tendon profile stays within the section bounds
    pub cable_concordancy: bool,

    /// PASS only if all four limit-state verdicts pass
    pub overall_status: CheckStatus,
}

/// Run the complete analysis for a simply supported prestressed beam.
///
/// Pure function: no I/O, no shared state, output depends only on the
/// arguments. Units follow the crate convention: span in m, section
/// dimensions and eccentricities in mm, loads in kN and kN/m, stresses in
/// MPa, moments in kNm.
///
/// # Arguments
///
/// * `span` - Span between supports (m)
/// * `section` - Cross-section geometry
/// * `concrete` - Concrete grade
/// * `prestress` - Prestressing configuration
/// * `load_cases` - Applied load cases (self-weight excluded)
/// * `include_self_weight` - Add self-weight from area × unit weight
pub fn analyze(
    span: f64,
    section: &BeamSection,
    concrete: &ConcreteGrade,
    prestress: &PrestressConfiguration,
    load_cases: &[LoadCase],
    include_self_weight: bool,
) -> AnalysisResult {
    let section_properties = section.properties();
    let h = section.height();

    // Self weight: mm² × kN/m³ → kN/m
    let self_weight_udl = if include_self_weight {
        section_properties.area * concrete.density / 1e6
    } else {
        0.0
    };

    // Governing eccentricity, profile-dependent default at 70% of y_bot
    let eccentricity = prestress
        .tendon
        .profile
        .governing_eccentricity(section_properties.y_bot * 0.7);

    // Demand at the three load states
    let transfer = demand::calculate(span, &[], self_weight_udl, 1.0);
    let service = demand::calculate(span, load_cases, self_weight_udl, 1.0);
    let ultimate = demand::calculate(
        span,
        load_cases,
        self_weight_udl * ULS_PERMANENT_FACTOR,
        ULS_LOAD_FACTOR,
    );

    let prestress_losses = losses::calculate(
        prestress,
        &section_properties,
        concrete,
        span,
        eccentricity,
    );

    let magnel_diagram = magnel::generate(
        &section_properties,
        concrete,
        transfer.moment,
        service.moment,
        &prestress_losses,
    );

    let flexure = flexure::check(
        &section_properties,
        concrete,
        prestress,
        &prestress_losses,
        ultimate.moment,
        transfer.moment,
        eccentricity,
        h,
    );

    let shear = shear::check(
        &section_properties,
        section,
        concrete,
        prestress,
        &prestress_losses,
        ultimate.shear,
        h,
    );

    let deflection = deflection::check(
        &section_properties,
        concrete,
        prestress,
        &prestress_losses,
        span,
        service.total_udl,
        eccentricity,
    );

    let crack_width = crack::check(
        &section_properties,
        concrete,
        prestress,
        &prestress_losses,
        service.moment,
        eccentricity,
        h,
        ExposureClass::default(),
    );

    let cable_concordancy = prestress
        .tendon
        .profile
        .within_section_bounds(section_properties.y_bot);

    let all_pass = flexure.passes()
        && shear.passes()
        && deflection.passes()
        && crack_width.passes();
    let overall_status = if all_pass {
        CheckStatus::Pass
    } else {
        CheckStatus::Fail
    };

    AnalysisResult {
        section_properties,
        prestress_losses,
        magnel_diagram,
        flexure,
        shear,
        deflection,
        crack_width,
        cable_concordancy,
        overall_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::PrestressingSteel;
    use crate::prestress::{PrestressMethod, TendonGeometry, TendonProfile};
    use crate::section::RectangularSection;

    fn rect_section() -> BeamSection {
        BeamSection::Rectangular(RectangularSection {
            width: 400.0,
            height: 800.0,
        })
    }

    fn parabolic_post_tensioned() -> PrestressConfiguration {
        PrestressConfiguration::new(
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
        )
    }

    fn long_span_loads() -> Vec<LoadCase> {
        vec![
            LoadCase::new("Imposed").with_udl(15.0),
            LoadCase::new("Finishes").with_udl(5.0).permanent(),
        ]
    }

    #[test]
    fn test_end_to_end_long_span() {
        let result = analyze(
            20.0,
            &rect_section(),
            &ConcreteGrade::new(40.0),
            &parabolic_post_tensioned(),
            &long_span_loads(),
            true,
        );

        // All verdicts populated with finite, non-negative utilizations
        for utilization in [
            result.flexure.utilization,
            result.shear.utilization,
            result.deflection.utilization,
            result.crack_width.utilization,
        ] {
            assert!(utilization.is_finite());
            assert!(utilization >= 0.0);
        }

        // Overall status consistent with the four sub-verdicts
        let expected = result.flexure.passes()
            && result.shear.passes()
            && result.deflection.passes()
            && result.crack_width.passes();
        assert_eq!(result.overall_status.is_pass(), expected);
        assert!(matches!(
            result.overall_status,
            CheckStatus::Pass | CheckStatus::Fail
        ));

        // Losses in a physical range
        assert!(result.prestress_losses.total > 0.0);
        assert!(result.prestress_losses.loss_ratio > 0.0);
        assert!(result.prestress_losses.loss_ratio < 100.0);

        // 300 mm < y_bot - cover = 350 mm
        assert!(result.cable_concordancy);
    }

    #[test]
    fn test_balanced_design_passes() {
        let loads = vec![
            LoadCase::new("Imposed").with_udl(6.0),
            LoadCase::new("Finishes").with_udl(4.0).permanent(),
        ];
        let result = analyze(
            10.0,
            &rect_section(),
            &ConcreteGrade::new(40.0),
            &parabolic_post_tensioned(),
            &loads,
            true,
        );

        assert_eq!(result.flexure.status, CheckStatus::Pass);
        assert_eq!(result.shear.status, CheckStatus::Pass);
        assert_eq!(result.deflection.status, CheckStatus::Pass);
        // Light service moment never decompresses the section
        assert_eq!(result.crack_width.status, CheckStatus::Uncracked);
        assert_eq!(result.overall_status, CheckStatus::Pass);
    }

    #[test]
    fn test_idempotent_bit_identical() {
        let run = || {
            analyze(
                20.0,
                &rect_section(),
                &ConcreteGrade::new(40.0),
                &parabolic_post_tensioned(),
                &long_span_loads(),
                true,
            )
        };

        let a = run();
        let b = run();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_self_weight_toggle() {
        let with_sw = analyze(
            20.0,
            &rect_section(),
            &ConcreteGrade::new(40.0),
            &parabolic_post_tensioned(),
            &long_span_loads(),
            true,
        );
        let without_sw = analyze(
            20.0,
            &rect_section(),
            &ConcreteGrade::new(40.0),
            &parabolic_post_tensioned(),
            &long_span_loads(),
            false,
        );

        // 0.32 m² × 25 kN/m³ = 8 kN/m of self-weight moves the flexure demand
        assert!(with_sw.flexure.m_ed > without_sw.flexure.m_ed);
    }

    #[test]
    fn test_default_eccentricity_when_unset() {
        let mut prestress = parabolic_post_tensioned();
        prestress.tendon.profile = TendonProfile::Straight { eccentricity: None };

        let result = analyze(
            20.0,
            &rect_section(),
            &ConcreteGrade::new(40.0),
            &prestress,
            &long_span_loads(),
            true,
        );

        // Default e = 0.7 * 400 = 280 mm stays inside the bounds
        assert!(result.cable_concordancy);
        assert!(result.prestress_losses.total > 0.0);
    }

    #[test]
    fn test_pretensioned_straight_profile() {
        let prestress = PrestressConfiguration::new(
            PrestressMethod::Pretensioned,
            1300.0,
            TendonGeometry {
                profile: TendonProfile::Straight {
                    eccentricity: Some(250.0),
                },
                num_strands: 10,
            },
            PrestressingSteel::y1860s7(),
        );

        let result = analyze(
            14.0,
            &rect_section(),
            &ConcreteGrade::new(50.0),
            &prestress,
            &[LoadCase::new("Imposed").with_udl(8.0)],
            true,
        );

        assert_eq!(result.prestress_losses.friction, 0.0);
        assert_eq!(result.prestress_losses.anchorage_slip, 0.0);
        assert!(result.prestress_losses.elastic_shortening > 0.0);
    }

    #[test]
    fn test_transfer_state_ignores_live_loads() {
        // With self-weight disabled and only live cases, the transfer moment
        // is zero and the Magnel transfer lines degenerate accordingly
        let result = analyze(
            20.0,
            &rect_section(),
            &ConcreteGrade::new(40.0),
            &parabolic_post_tensioned(),
            &long_span_loads(),
            false,
        );

        // Service still sees the imposed loads
        assert!(result.flexure.m_ed > 0.0);
        assert!(result.magnel_diagram.max_eccentricity > 0.0);
    }

    #[test]
    fn test_point_load_case() {
        let loads = vec![LoadCase::new("Crane").with_point_load(200.0, 10.0)];
        let result = analyze(
            20.0,
            &rect_section(),
            &ConcreteGrade::new(40.0),
            &parabolic_post_tensioned(),
            &loads,
            true,
        );

        // Midspan 200 kN at ULS: M += 1.5 * 200 * 10 * 10 / 20 = 1500 kNm
        // over the self-weight contribution
        assert!(result.flexure.m_ed > 1500.0);
        assert!(result.shear.v_ed > 150.0);
    }
}
