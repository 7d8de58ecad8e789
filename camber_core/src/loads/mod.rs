//! # Load Cases
//!
//! Applied-load definitions and the simply-supported demand envelope.
//!
//! A [`LoadCase`] holds unfactored loads: a uniformly distributed component,
//! discrete point loads, and applied moments. The [`demand`] module reduces a
//! set of cases (plus self-weight) to governing moment and shear under a
//! caller-supplied factor.
//!
//! # Example
//!
//! ```rust
//! use camber_core::loads::{demand, LoadCase};
//!
//! let imposed = LoadCase::new("Imposed").with_udl(15.0);
//! let finishes = LoadCase::new("Finishes").with_udl(5.0).permanent();
//!
//! let service = demand::calculate(20.0, &[imposed, finishes], 8.0, 1.0);
//! assert!((service.moment - 1400.0).abs() < 1e-9);
//! ```

pub mod demand;

pub use demand::Demand;

use serde::{Deserialize, Serialize};

/// Point load definition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Load magnitude (kN)
    pub magnitude: f64,
    /// Position from left support (m)
    pub position: f64,
}

/// Applied moment definition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentLoad {
    /// Moment magnitude (kNm)
    pub magnitude: f64,
    /// Position from left support (m)
    pub position: f64,
}

/// A named collection of unfactored loads.
///
/// The ULS/SLS factors and the permanence flag travel with the case for
/// upstream bookkeeping; the analysis states (transfer/service/ultimate)
/// apply their own global factors.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "Imposed",
///   "udl": 15.0,
///   "point_loads": [{ "magnitude": 120.0, "position": 8.0 }],
///   "moments": [],
///   "is_permanent": false,
///   "load_factor_uls": 1.5,
///   "load_factor_sls": 1.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// User label for this case
    pub name: String,

    /// Uniformly distributed load (kN/m)
    #[serde(default)]
    pub udl: f64,

    /// Point loads, in input order
    #[serde(default)]
    pub point_loads: Vec<PointLoad>,

    /// Applied moments, in input order
    #[serde(default)]
    pub moments: Vec<MomentLoad>,

    /// Whether this is a permanent (dead) load
    #[serde(default)]
    pub is_permanent: bool,

    /// ULS load factor
    #[serde(default = "default_uls_factor")]
    pub load_factor_uls: f64,

    /// SLS load factor
    #[serde(default = "default_sls_factor")]
    pub load_factor_sls: f64,
}

fn default_uls_factor() -> f64 {
    1.5
}

fn default_sls_factor() -> f64 {
    1.0
}

impl LoadCase {
    /// Create an empty load case with a label
    pub fn new(name: impl Into<String>) -> Self {
        LoadCase {
            name: name.into(),
            udl: 0.0,
            point_loads: Vec::new(),
            moments: Vec::new(),
            is_permanent: false,
            load_factor_uls: default_uls_factor(),
            load_factor_sls: default_sls_factor(),
        }
    }

    /// Set the uniformly distributed load (builder pattern)
    pub fn with_udl(mut self, udl: f64) -> Self {
        self.udl = udl;
        self
    }

    /// Add a point load (builder pattern)
    pub fn with_point_load(mut self, magnitude: f64, position: f64) -> Self {
        self.point_loads.push(PointLoad {
            magnitude,
            position,
        });
        self
    }

    /// Add an applied moment (builder pattern)
    pub fn with_moment(mut self, magnitude: f64, position: f64) -> Self {
        self.moments.push(MomentLoad {
            magnitude,
            position,
        });
        self
    }

    /// Mark the case as permanent (builder pattern)
    pub fn permanent(mut self) -> Self {
        self.is_permanent = true;
        self
    }
}

impl Default for LoadCase {
    fn default() -> Self {
        LoadCase::new("Load Case 1")
    }
}
