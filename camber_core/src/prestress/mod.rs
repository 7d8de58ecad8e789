//! # Prestressing Configuration
//!
//! Tendon geometry, prestressing method, and the loss calculation.
//!
//! The tendon profile is a sum type: each profile kind carries only its own
//! eccentricity parameters. Eccentricities left unset fall back to the
//! orchestrator's profile-dependent default (70% of the bottom fiber
//! distance).
//!
//! ## Example
//!
//! ```rust
//! use camber_core::materials::PrestressingSteel;
//! use camber_core::prestress::{
//!     PrestressConfiguration, PrestressMethod, TendonGeometry, TendonProfile,
//! };
//!
//! let tendon = TendonGeometry {
//!     profile: TendonProfile::Parabolic {
//!         e_end: Some(0.0),
//!         e_mid: Some(300.0),
//!     },
//!     num_strands: 12,
//! };
//!
//! let config = PrestressConfiguration::new(
//!     PrestressMethod::PostTensioned,
//!     1400.0,
//!     tendon,
//!     PrestressingSteel::y1860s7(),
//! );
//!
//! assert_eq!(config.tendon_area(), 1680.0);
//! ```

pub mod losses;

pub use losses::PrestressLosses;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::PrestressingSteel;

/// Minimum concrete cover to the tendon centroid (mm).
///
/// Bounds the geometric eccentricity range in the Magnel diagram, the
/// concordancy check, and the crack-spacing cover term.
pub const MIN_COVER: f64 = 50.0;

/// Prestressing method.
///
/// The method gates which loss components apply: friction and anchorage
/// slip exist only for post-tensioned tendons, and elastic shortening is
/// halved for post-tensioned sequential stressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrestressMethod {
    Pretensioned,
    PostTensioned,
}

/// Tendon profile, one kind active.
///
/// ## JSON Serialization
///
/// ```json
/// { "profile_type": "straight", "eccentricity": 250.0 }
///
/// { "profile_type": "parabolic", "e_end": 0.0, "e_mid": 300.0 }
///
/// { "profile_type": "harped", "e_support": 0.0, "e_drape": 280.0, "drape_position": 0.4 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "profile_type", rename_all = "snake_case")]
pub enum TendonProfile {
    /// Constant eccentricity over the span
    Straight {
        /// Eccentricity (mm), orchestrator default if unset
        eccentricity: Option<f64>,
    },
    /// Single parabola between end and mid-span eccentricities
    Parabolic {
        /// Eccentricity at the ends (mm)
        e_end: Option<f64>,
        /// Eccentricity at mid-span (mm)
        e_mid: Option<f64>,
    },
    /// Parabolic segments with inflection points (continuous-profile layouts)
    MultiParabolic {
        /// Eccentricity at the ends (mm)
        e_end: Option<f64>,
        /// Eccentricity at mid-span (mm)
        e_mid: Option<f64>,
        /// Inflection point positions (fraction of span)
        #[serde(default)]
        inflection_points: Vec<f64>,
    },
    /// Straight segments kinked at a drape point
    Harped {
        /// Eccentricity at the supports (mm)
        e_support: Option<f64>,
        /// Eccentricity at the drape point (mm)
        e_drape: Option<f64>,
        /// Drape point position (fraction of span)
        drape_position: Option<f64>,
    },
}

/// Profile discriminator, decoupled from the geometry payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    Straight,
    Parabolic,
    MultiParabolic,
    Harped,
}

impl ProfileKind {
    /// Wire code for this profile
    pub fn code(&self) -> &'static str {
        match self {
            ProfileKind::Straight => "straight",
            ProfileKind::Parabolic => "parabolic",
            ProfileKind::MultiParabolic => "multi_parabolic",
            ProfileKind::Harped => "harped",
        }
    }

    /// Parse a wire code.
    pub fn parse(code: &str) -> CalcResult<Self> {
        match code {
            "straight" => Ok(ProfileKind::Straight),
            "parabolic" => Ok(ProfileKind::Parabolic),
            "multi_parabolic" => Ok(ProfileKind::MultiParabolic),
            "harped" => Ok(ProfileKind::Harped),
            other => Err(CalcError::unknown_tendon_profile(other)),
        }
    }
}

impl TendonProfile {
    /// Profile discriminator
    pub fn kind(&self) -> ProfileKind {
        match self {
            TendonProfile::Straight { .. } => ProfileKind::Straight,
            TendonProfile::Parabolic { .. } => ProfileKind::Parabolic,
            TendonProfile::MultiParabolic { .. } => ProfileKind::MultiParabolic,
            TendonProfile::Harped { .. } => ProfileKind::Harped,
        }
    }

    /// Whether the profile drapes (changes angle along the span).
    ///
    /// Only draped profiles accumulate curvature friction.
    pub fn is_draped(&self) -> bool {
        matches!(
            self,
            TendonProfile::Parabolic { .. } | TendonProfile::MultiParabolic { .. }
        )
    }

    /// The eccentricity that governs flexural effects, falling back to
    /// `default_e` where the profile leaves it unset: mid-span for
    /// parabolic profiles, the drape point for harped, the constant value
    /// for straight.
    pub fn governing_eccentricity(&self, default_e: f64) -> f64 {
        match self {
            TendonProfile::Straight { eccentricity } => eccentricity.unwrap_or(default_e),
            TendonProfile::Parabolic { e_mid, .. } => e_mid.unwrap_or(default_e),
            TendonProfile::MultiParabolic { e_mid, .. } => e_mid.unwrap_or(default_e),
            TendonProfile::Harped { e_drape, .. } => e_drape.unwrap_or(default_e),
        }
    }

    /// Whether every profile eccentricity stays inside the section, cover
    /// deducted. This is the cable-concordancy bound: automatically
    /// satisfied for simply supported beams, materially meaningful only for
    /// indeterminate extensions.
    pub fn within_section_bounds(&self, y_bot: f64) -> bool {
        let limit = y_bot - MIN_COVER;
        match self {
            TendonProfile::Straight { eccentricity } => {
                eccentricity.unwrap_or(0.0).abs() < limit
            }
            TendonProfile::Parabolic { e_end, e_mid }
            | TendonProfile::MultiParabolic { e_end, e_mid, .. } => {
                e_mid.unwrap_or(0.0).abs() < limit && e_end.unwrap_or(0.0).abs() < limit
            }
            TendonProfile::Harped {
                e_support, e_drape, ..
            } => e_support.unwrap_or(0.0).abs() < limit && e_drape.unwrap_or(0.0).abs() < limit,
        }
    }
}

/// Tendon layout: profile plus strand count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TendonGeometry {
    /// Profile geometry
    #[serde(flatten)]
    pub profile: TendonProfile,

    /// Number of strands
    pub num_strands: u32,
}

/// Full prestressing definition for one beam.
///
/// ## JSON Example
///
/// ```json
/// {
///   "method": "post_tensioned",
///   "jacking_stress": 1400.0,
///   "tendon": { "profile_type": "parabolic", "e_end": 0.0, "e_mid": 300.0, "num_strands": 12 },
///   "steel": { "fp01k": 1600.0, "fpk": 1860.0, "strand_area": 140.0 },
///   "friction_coefficient": 0.19,
///   "wobble_coefficient": 0.008
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrestressConfiguration {
    /// Pre- or post-tensioned
    pub method: PrestressMethod,

    /// Jacking stress at the anchorage (MPa)
    pub jacking_stress: f64,

    /// Tendon layout
    pub tendon: TendonGeometry,

    /// Prestressing steel
    pub steel: PrestressingSteel,

    /// Duct diameter for post-tensioned tendons (mm)
    #[serde(default)]
    pub duct_diameter: Option<f64>,

    /// Friction coefficient μ
    #[serde(default = "default_friction_coefficient")]
    pub friction_coefficient: f64,

    /// Wobble coefficient k (1/m)
    #[serde(default = "default_wobble_coefficient")]
    pub wobble_coefficient: f64,
}

fn default_friction_coefficient() -> f64 {
    0.19
}

fn default_wobble_coefficient() -> f64 {
    0.008
}

impl PrestressConfiguration {
    /// Create a configuration with the default friction and wobble
    /// coefficients and no duct.
    pub fn new(
        method: PrestressMethod,
        jacking_stress: f64,
        tendon: TendonGeometry,
        steel: PrestressingSteel,
    ) -> Self {
        PrestressConfiguration {
            method,
            jacking_stress,
            tendon,
            steel,
            duct_diameter: None,
            friction_coefficient: default_friction_coefficient(),
            wobble_coefficient: default_wobble_coefficient(),
        }
    }

    /// Total tendon area: area per strand × strand count (mm²)
    pub fn tendon_area(&self) -> f64 {
        self.steel.strand_area * f64::from(self.tendon.num_strands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parabolic_tendon() -> TendonGeometry {
        TendonGeometry {
            profile: TendonProfile::Parabolic {
                e_end: Some(0.0),
                e_mid: Some(300.0),
            },
            num_strands: 12,
        }
    }

    #[test]
    fn test_tendon_area() {
        let config = PrestressConfiguration::new(
            PrestressMethod::PostTensioned,
            1400.0,
            parabolic_tendon(),
            PrestressingSteel::y1860s7(),
        );
        assert_eq!(config.tendon_area(), 1680.0);
        assert_eq!(config.friction_coefficient, 0.19);
        assert_eq!(config.wobble_coefficient, 0.008);
    }

    #[test]
    fn test_governing_eccentricity_per_profile() {
        let straight = TendonProfile::Straight {
            eccentricity: Some(250.0),
        };
        assert_eq!(straight.governing_eccentricity(280.0), 250.0);

        let unset = TendonProfile::Straight { eccentricity: None };
        assert_eq!(unset.governing_eccentricity(280.0), 280.0);

        assert_eq!(
            parabolic_tendon().profile.governing_eccentricity(280.0),
            300.0
        );

        let harped = TendonProfile::Harped {
            e_support: Some(0.0),
            e_drape: Some(260.0),
            drape_position: Some(0.4),
        };
        assert_eq!(harped.governing_eccentricity(280.0), 260.0);
    }

    #[test]
    fn test_is_draped() {
        assert!(parabolic_tendon().profile.is_draped());
        assert!(!TendonProfile::Straight { eccentricity: None }.is_draped());
        assert!(!TendonProfile::Harped {
            e_support: None,
            e_drape: None,
            drape_position: None,
        }
        .is_draped());
    }

    #[test]
    fn test_within_section_bounds() {
        // y_bot = 400 -> limit = 350
        assert!(parabolic_tendon().profile.within_section_bounds(400.0));

        let too_deep = TendonProfile::Parabolic {
            e_end: Some(0.0),
            e_mid: Some(360.0),
        };
        assert!(!too_deep.within_section_bounds(400.0));

        let straight_unset = TendonProfile::Straight { eccentricity: None };
        assert!(straight_unset.within_section_bounds(400.0));
    }

    #[test]
    fn test_profile_kind_codes() {
        assert_eq!(parabolic_tendon().profile.kind().code(), "parabolic");
        assert_eq!(
            ProfileKind::parse("multi_parabolic").unwrap(),
            ProfileKind::MultiParabolic
        );
        let err = ProfileKind::parse("zigzag").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_TENDON_PROFILE");
    }

    #[test]
    fn test_tendon_serialization_flattens_profile() {
        let tendon = parabolic_tendon();
        let json = serde_json::to_string(&tendon).unwrap();
        assert!(json.contains("\"profile_type\":\"parabolic\""));
        assert!(json.contains("\"num_strands\":12"));

        let roundtrip: TendonGeometry = serde_json::from_str(&json).unwrap();
        assert_eq!(tendon, roundtrip);
    }
}
