//! # camber_core - Prestressed Concrete Beam Analysis Engine
//!
//! `camber_core` is the computational heart of Camber: it verifies a
//! prestressed concrete beam against EC2 limit states. Geometry, material
//! grades, tendon configuration and applied loads go in; derived section
//! properties, prestress losses, a Magnel feasible-region diagram and four
//! pass/fail verdicts come out. All inputs and outputs are JSON-serializable
//! for easy embedding behind any transport.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results. No
//!   I/O, no persistence, no shared state between invocations
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Sum Types**: Section shapes and tendon profiles are enums with
//!   per-variant payloads, so a wrong-variant access cannot compile
//! - **Fixed Units**: span m, dimensions and eccentricities mm, forces kN,
//!   stresses MPa, moments kNm
//!
//! ## Quick Start
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
//! let result = analyze(
//!     12.0,
//!     &BeamSection::Rectangular(RectangularSection { width: 400.0, height: 800.0 }),
//!     &ConcreteGrade::new(40.0),
//!     &PrestressConfiguration::new(
//!         PrestressMethod::PostTensioned,
//!         1400.0,
//!         TendonGeometry {
//!             profile: TendonProfile::Parabolic { e_end: Some(0.0), e_mid: Some(300.0) },
//!             num_strands: 12,
//!         },
//!         PrestressingSteel::y1860s7(),
//!     ),
//!     &[LoadCase::new("Imposed").with_udl(10.0)],
//!     true,
//! );
//!
//! println!("Loss ratio: {}%", result.prestress_losses.loss_ratio);
//! println!("Overall: {}", result.overall_status);
//! ```
//!
//! ## Modules
//!
//! - [`analysis`] - The orchestrator and the aggregate result
//! - [`section`] - Cross-section shapes and derived properties
//! - [`materials`] - Concrete grades and prestressing steel
//! - [`loads`] - Load cases and the demand envelope
//! - [`prestress`] - Tendon geometry, configuration, and losses
//! - [`magnel`] - Feasible-region diagram
//! - [`checks`] - The four limit-state verifiers
//! - [`project`] - Design records for upstream persistence
//! - [`errors`] - Structured error types
//! - [`rounding`] - Fixed-decimal result rounding

pub mod analysis;
pub mod checks;
pub mod errors;
pub mod loads;
pub mod magnel;
pub mod materials;
pub mod prestress;
pub mod project;
pub mod rounding;
pub mod section;

// Re-export commonly used types at crate root for convenience
pub use analysis::{analyze, AnalysisResult};
pub use checks::CheckStatus;
pub use errors::{CalcError, CalcResult};
pub use project::{BeamDesign, DesignRecord, DesignSummary};
