//! Concrete material properties per EC2 Table 3.1.
//!
//! A grade is fixed by its characteristic cylinder strength; every strength
//! and stiffness value is derived from it in the constructor and never edited
//! afterwards. Time-dependent inputs (creep coefficient, shrinkage strain)
//! and the unit weight are independent inputs with the usual defaults.

use serde::{Deserialize, Serialize};

/// Concrete material properties.
///
/// Derived fields (`fcm`, `fctm`, fractiles, `ecm`, `fck_cube`) are pure
/// functions of `fck` computed by [`ConcreteGrade::new`]; construct a new
/// grade rather than editing them.
///
/// ## JSON Example
///
/// ```json
/// {
///   "fck": 40.0,
///   "fck_cube": 50.0,
///   "fcm": 48.0,
///   "fctm": 3.51,
///   "fctk_005": 2.46,
///   "fctk_095": 4.56,
///   "ecm": 35.22,
///   "density": 25.0,
///   "creep_coefficient": 2.0,
///   "shrinkage_strain": 0.0003
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteGrade {
    /// Characteristic cylinder strength (MPa)
    pub fck: f64,

    /// Characteristic cube strength (MPa)
    pub fck_cube: f64,

    /// Mean cylinder strength (MPa)
    pub fcm: f64,

    /// Mean tensile strength (MPa)
    pub fctm: f64,

    /// 5% fractile tensile strength (MPa)
    pub fctk_005: f64,

    /// 95% fractile tensile strength (MPa)
    pub fctk_095: f64,

    /// Secant modulus of elasticity (GPa)
    pub ecm: f64,

    /// Unit weight (kN/m³)
    #[serde(default = "default_density")]
    pub density: f64,

    /// Creep coefficient φ(∞, t0)
    #[serde(default = "default_creep_coefficient")]
    pub creep_coefficient: f64,

    /// Shrinkage strain εcs
    #[serde(default = "default_shrinkage_strain")]
    pub shrinkage_strain: f64,
}

fn default_density() -> f64 {
    25.0
}

fn default_creep_coefficient() -> f64 {
    2.0
}

fn default_shrinkage_strain() -> f64 {
    0.0003
}

impl ConcreteGrade {
    /// Derive a full grade from the characteristic cylinder strength.
    ///
    /// `fck` must be positive; out-of-range values are not rejected here and
    /// propagate into downstream magnitude checks instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use camber_core::materials::ConcreteGrade;
    ///
    /// let c40 = ConcreteGrade::new(40.0);
    /// assert_eq!(c40.fcm, 48.0);
    /// assert!((c40.fctm - 3.51).abs() < 0.01);
    /// ```
    pub fn new(fck: f64) -> Self {
        let fcm = fck + 8.0;

        // Tensile strength (EC2 3.1.3)
        let fctm = if fck <= 50.0 {
            0.30 * fck.powf(2.0 / 3.0)
        } else {
            2.12 * (1.0 + fcm / 10.0).ln()
        };

        let fctk_005 = 0.7 * fctm;
        let fctk_095 = 1.3 * fctm;

        // Secant modulus (EC2 3.1.3), GPa
        let ecm = 22.0 * (fcm / 10.0).powf(0.3);

        // Cube strength approximation
        let fck_cube = fck / 0.8;

        ConcreteGrade {
            fck,
            fck_cube,
            fcm,
            fctm,
            fctk_005,
            fctk_095,
            ecm,
            density: default_density(),
            creep_coefficient: default_creep_coefficient(),
            shrinkage_strain: default_shrinkage_strain(),
        }
    }

    /// Override the creep coefficient (builder pattern)
    pub fn with_creep_coefficient(mut self, phi: f64) -> Self {
        self.creep_coefficient = phi;
        self
    }

    /// Override the shrinkage strain (builder pattern)
    pub fn with_shrinkage_strain(mut self, eps_cs: f64) -> Self {
        self.shrinkage_strain = eps_cs;
        self
    }

    /// Override the unit weight (builder pattern)
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Secant modulus in MPa (stored in GPa)
    pub fn ecm_mpa(&self) -> f64 {
        self.ecm * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c40_derived_values() {
        let c40 = ConcreteGrade::new(40.0);
        assert_eq!(c40.fcm, 48.0);
        assert_eq!(c40.fck_cube, 50.0);
        // fctm = 0.30 * 40^(2/3) = 3.509
        assert!((c40.fctm - 3.509).abs() < 0.005);
        // Ecm = 22 * 4.8^0.3 = 35.22 GPa
        assert!((c40.ecm - 35.22).abs() < 0.01);
    }

    #[test]
    fn test_high_strength_tensile_branch() {
        let c60 = ConcreteGrade::new(60.0);
        // fctm = 2.12 * ln(1 + 68/10) = 4.354
        assert!((c60.fctm - 4.354).abs() < 0.005);
    }

    #[test]
    fn test_fractile_ordering() {
        for fck in [20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 70.0, 80.0, 90.0] {
            let grade = ConcreteGrade::new(fck);
            assert!(grade.fctk_005 < grade.fctm, "fck = {fck}");
            assert!(grade.fctm < grade.fctk_095, "fck = {fck}");
        }
    }

    #[test]
    fn test_ecm_monotonic_in_fck() {
        let mut prev = 0.0;
        for fck in [12.0, 16.0, 20.0, 25.0, 30.0, 35.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0] {
            let ecm = ConcreteGrade::new(fck).ecm;
            assert!(ecm > prev, "Ecm not increasing at fck = {fck}");
            prev = ecm;
        }
    }

    #[test]
    fn test_defaults_and_builders() {
        let grade = ConcreteGrade::new(30.0);
        assert_eq!(grade.density, 25.0);
        assert_eq!(grade.creep_coefficient, 2.0);
        assert_eq!(grade.shrinkage_strain, 0.0003);

        let adjusted = grade.with_creep_coefficient(2.5).with_shrinkage_strain(0.0004);
        assert_eq!(adjusted.creep_coefficient, 2.5);
        assert_eq!(adjusted.shrinkage_strain, 0.0004);
        // Derived values untouched
        assert_eq!(adjusted.fcm, grade.fcm);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let grade = ConcreteGrade::new(45.0);
        let json = serde_json::to_string(&grade).unwrap();
        let roundtrip: ConcreteGrade = serde_json::from_str(&json).unwrap();
        assert_eq!(grade, roundtrip);
    }
}
