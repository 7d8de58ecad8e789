//! # Design Records
//!
//! Value types that pair a beam's full input set with identity and
//! timestamps, and bind an analysis output to the input that produced it.
//! Upstream collaborators persist and list these; the core only defines
//! them and fills them in, and performs no storage itself.
//!
//! ## Structure
//!
//! ```text
//! BeamDesign          (uuid, names, span, section, materials, loads, prestress)
//!   └── run() -> DesignRecord (uuid, input_id, AnalysisResult, timestamp)
//! BeamDesign::summary -> DesignSummary (dashboard row)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use camber_core::loads::LoadCase;
//! use camber_core::materials::{ConcreteGrade, PrestressingSteel};
//! use camber_core::prestress::{
//!     PrestressConfiguration, PrestressMethod, TendonGeometry, TendonProfile,
//! };
//! use camber_core::project::BeamDesign;
//! use camber_core::section::{BeamSection, RectangularSection};
//!
//! let design = BeamDesign::new(
//!     "Warehouse Extension",
//!     "B-1",
//!     12.0,
//!     BeamSection::Rectangular(RectangularSection { width: 400.0, height: 800.0 }),
//!     ConcreteGrade::new(40.0),
//!     PrestressConfiguration::new(
//!         PrestressMethod::PostTensioned,
//!         1400.0,
//!         TendonGeometry {
//!             profile: TendonProfile::Parabolic { e_end: Some(0.0), e_mid: Some(300.0) },
//!             num_strands: 12,
//!         },
//!         PrestressingSteel::y1860s7(),
//!     ),
//! )
//! .with_load_case(LoadCase::new("Imposed").with_udl(10.0));
//!
//! let record = design.run();
//! assert_eq!(record.input_id, design.id);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::{analyze, AnalysisResult};
use crate::checks::CheckStatus;
use crate::loads::LoadCase;
use crate::materials::ConcreteGrade;
use crate::prestress::PrestressConfiguration;
use crate::section::BeamSection;

/// Current schema version for serialized designs
pub const SCHEMA_VERSION: &str = "0.1.0";

/// A complete beam design input with identity and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamDesign {
    /// Stable identity for this design
    pub id: Uuid,

    /// Project name
    pub project_name: String,

    /// Beam label within the project (e.g., "B-1")
    pub beam_name: String,

    /// Beam span (m)
    pub span: f64,

    /// Cross-section geometry
    pub section: BeamSection,

    /// Concrete grade
    pub concrete: ConcreteGrade,

    /// Prestressing configuration
    pub prestress: PrestressConfiguration,

    /// Applied load cases
    #[serde(default)]
    pub load_cases: Vec<LoadCase>,

    /// Include self-weight in the analysis
    #[serde(default = "default_include_self_weight")]
    pub include_self_weight: bool,

    /// Creation timestamp (UTC)
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp (UTC)
    pub updated_at: DateTime<Utc>,
}

fn default_include_self_weight() -> bool {
    true
}

impl BeamDesign {
    /// Create a new design with a fresh UUID and current timestamps.
    pub fn new(
        project_name: impl Into<String>,
        beam_name: impl Into<String>,
        span: f64,
        section: BeamSection,
        concrete: ConcreteGrade,
        prestress: PrestressConfiguration,
    ) -> Self {
        let now = Utc::now();
        BeamDesign {
            id: Uuid::new_v4(),
            project_name: project_name.into(),
            beam_name: beam_name.into(),
            span,
            section,
            concrete,
            prestress,
            load_cases: Vec::new(),
            include_self_weight: default_include_self_weight(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add a load case (builder pattern)
    pub fn with_load_case(mut self, load_case: LoadCase) -> Self {
        self.load_cases.push(load_case);
        self
    }

    /// Exclude self-weight (builder pattern)
    pub fn without_self_weight(mut self) -> Self {
        self.include_self_weight = false;
        self
    }

    /// Update the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Run the analysis pipeline over this design's inputs.
    pub fn analyze(&self) -> AnalysisResult {
        analyze(
            self.span,
            &self.section,
            &self.concrete,
            &self.prestress,
            &self.load_cases,
            self.include_self_weight,
        )
    }

    /// Run the analysis and wrap it in a record bound to this design.
    pub fn run(&self) -> DesignRecord {
        DesignRecord {
            id: Uuid::new_v4(),
            input_id: self.id,
            results: self.analyze(),
            created_at: Utc::now(),
        }
    }

    /// Dashboard summary row for this design.
    pub fn summary(&self, status: Option<CheckStatus>) -> DesignSummary {
        DesignSummary {
            id: self.id,
            project_name: self.project_name.clone(),
            beam_name: self.beam_name.clone(),
            section_type: self.section.kind().code().to_string(),
            span: self.span,
            status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// An analysis output bound to the input that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRecord {
    /// Identity of this record
    pub id: Uuid,

    /// The design this record was computed from
    pub input_id: Uuid,

    /// Full analysis results
    pub results: AnalysisResult,

    /// Computation timestamp (UTC)
    pub created_at: DateTime<Utc>,
}

/// Dashboard row: enough to list designs without loading full results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSummary {
    pub id: Uuid,
    pub project_name: String,
    pub beam_name: String,
    /// Section shape wire code (e.g., "rectangular")
    pub section_type: String,
    pub span: f64,
    /// Overall status of the latest analysis, if one has run
    pub status: Option<CheckStatus>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
