//! Prestressing steel properties per EC2 3.3.

use serde::{Deserialize, Serialize};

/// Strand construction type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrandType {
    /// 7-wire strand (the common case)
    #[default]
    #[serde(rename = "7_wire_strand")]
    SevenWire,
    /// 19-wire strand
    #[serde(rename = "19_wire_strand")]
    NineteenWire,
    /// Prestressing bar
    #[serde(rename = "bar")]
    Bar,
}

/// Relaxation class per EC2 3.3.2(4).
///
/// The class selects which relaxation-loss formula applies: Class 2
/// (low relaxation, the usual strand) uses the 0.66·e^(9.1μ) expression,
/// Classes 1 and 3 the 5.39·e^(6.7μ) expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RelaxationClass {
    /// Class 1: ordinary wires and strands
    Class1,
    /// Class 2: low-relaxation wires and strands
    #[default]
    Class2,
    /// Class 3: hot-rolled and processed bars
    Class3,
}

impl RelaxationClass {
    /// Whether the low-relaxation formula applies
    pub fn is_low_relaxation(&self) -> bool {
        matches!(self, RelaxationClass::Class2)
    }
}

/// Prestressing steel properties.
///
/// ## JSON Example
///
/// ```json
/// {
///   "fp01k": 1600.0,
///   "fpk": 1860.0,
///   "ep": 195.0,
///   "strand_type": "7_wire_strand",
///   "strand_area": 140.0,
///   "relaxation_class": "Class2",
///   "relaxation_loss_1000h": 2.5
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrestressingSteel {
    /// 0.1% proof stress (MPa)
    pub fp01k: f64,

    /// Characteristic tensile strength (MPa)
    pub fpk: f64,

    /// Modulus of elasticity (GPa)
    #[serde(default = "default_ep")]
    pub ep: f64,

    /// Strand construction
    #[serde(default)]
    pub strand_type: StrandType,

    /// Area per strand (mm²)
    pub strand_area: f64,

    /// Relaxation class
    #[serde(default)]
    pub relaxation_class: RelaxationClass,

    /// Relaxation loss at 1000h (%)
    #[serde(default = "default_relaxation_loss_1000h")]
    pub relaxation_loss_1000h: f64,
}

fn default_ep() -> f64 {
    195.0
}

fn default_relaxation_loss_1000h() -> f64 {
    2.5
}

impl PrestressingSteel {
    /// Create a steel definition with the default modulus, strand type,
    /// relaxation class and 1000h relaxation loss.
    pub fn new(fp01k: f64, fpk: f64, strand_area: f64) -> Self {
        PrestressingSteel {
            fp01k,
            fpk,
            ep: default_ep(),
            strand_type: StrandType::default(),
            strand_area,
            relaxation_class: RelaxationClass::default(),
            relaxation_loss_1000h: default_relaxation_loss_1000h(),
        }
    }

    /// Y1860S7 low-relaxation strand, 15.7 mm (140 mm²), the workhorse
    /// strand for post-tensioned beams.
    pub fn y1860s7() -> Self {
        PrestressingSteel::new(1600.0, 1860.0, 140.0)
    }

    /// Modulus of elasticity in MPa (stored in GPa)
    pub fn ep_mpa(&self) -> f64 {
        self.ep * 1000.0
    }
}
