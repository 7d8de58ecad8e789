//! # Cross-Section Geometry
//!
//! Parametric beam cross-sections and their derived properties. A section is
//! a sum type over four shape variants; each variant carries only the
//! dimensions that shape needs, so reading a flange width off a rectangle is
//! a compile error rather than a runtime surprise.
//!
//! All dimensions are millimeters. Centroids are measured from the bottom
//! fiber; second moments use the parallel-axis theorem over the shape's
//! sub-rectangles.
//!
//! ## Example
//!
//! ```rust
//! use camber_core::section::{BeamSection, RectangularSection};
//!
//! let section = BeamSection::Rectangular(RectangularSection {
//!     width: 400.0,
//!     height: 800.0,
//! });
//!
//! let props = section.properties();
//! assert_eq!(props.area, 320_000.0);
//! assert_eq!(props.y_top, 400.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Rectangular beam section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangularSection {
    /// Width b (mm)
    pub width: f64,
    /// Total height h (mm)
    pub height: f64,
}

/// T-beam section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TBeamSection {
    /// Web width (mm)
    pub bw: f64,
    /// Flange width (mm)
    pub bf: f64,
    /// Flange thickness (mm)
    pub hf: f64,
    /// Total height (mm)
    pub h: f64,
}

/// I-beam (double T) section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IBeamSection {
    /// Web width (mm)
    pub bw: f64,
    /// Top flange width (mm)
    pub bf_top: f64,
    /// Bottom flange width (mm)
    pub bf_bot: f64,
    /// Top flange thickness (mm)
    pub hf_top: f64,
    /// Bottom flange thickness (mm)
    pub hf_bot: f64,
    /// Total height (mm)
    pub h: f64,
}

/// Box girder section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxGirderSection {
    /// Top slab width (mm)
    pub b_top: f64,
    /// Bottom slab width (mm)
    pub b_bot: f64,
    /// Internal width (mm)
    pub b_int: f64,
    /// Top slab thickness (mm)
    pub t_top: f64,
    /// Bottom slab thickness (mm)
    pub t_bot: f64,
    /// Web thickness, single web (mm)
    pub t_web: f64,
    /// Total height (mm)
    pub h: f64,
}

/// Beam cross-section, one shape variant active.
///
/// ## JSON Serialization
///
/// Sections serialize with a `section_type` discriminator matching the wire
/// codes used by upstream transports:
///
/// ```json
/// { "section_type": "rectangular", "width": 400.0, "height": 800.0 }
///
/// { "section_type": "t_beam", "bw": 200.0, "bf": 800.0, "hf": 150.0, "h": 900.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section_type", rename_all = "snake_case")]
pub enum BeamSection {
    /// Solid rectangle
    Rectangular(RectangularSection),
    /// Single top flange on a web
    TBeam(TBeamSection),
    /// Top and bottom flanges on a web
    IBeam(IBeamSection),
    /// Closed box with two webs
    BoxGirder(BoxGirderSection),
}

/// Section shape discriminator, decoupled from the dimension payloads.
///
/// This is the seam where string codes from upstream transports are turned
/// into typed variants; an unknown code is rejected as a construction bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Rectangular,
    TBeam,
    IBeam,
    BoxGirder,
}

impl SectionKind {
    /// Wire code for this shape
    pub fn code(&self) -> &'static str {
        match self {
            SectionKind::Rectangular => "rectangular",
            SectionKind::TBeam => "t_beam",
            SectionKind::IBeam => "i_beam",
            SectionKind::BoxGirder => "box_girder",
        }
    }

    /// Parse a wire code.
    ///
    /// # Example
    ///
    /// ```rust
    /// use camber_core::section::SectionKind;
    ///
    /// assert_eq!(SectionKind::parse("box_girder").unwrap(), SectionKind::BoxGirder);
    /// assert!(SectionKind::parse("u_beam").is_err());
    /// ```
    pub fn parse(code: &str) -> CalcResult<Self> {
        match code {
            "rectangular" => Ok(SectionKind::Rectangular),
            "t_beam" => Ok(SectionKind::TBeam),
            "i_beam" => Ok(SectionKind::IBeam),
            "box_girder" => Ok(SectionKind::BoxGirder),
            other => Err(CalcError::unknown_section_type(other)),
        }
    }
}

/// Derived section properties, computed once per analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area": 320000.0,
///   "moment_of_inertia": 17066666666.7,
///   "y_top": 400.0,
///   "y_bot": 400.0,
///   "z_top": 42666666.7,
///   "z_bot": 42666666.7,
///   "perimeter": 2400.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Cross-sectional area (mm²)
    pub area: f64,

    /// Second moment of area about the centroid (mm⁴)
    pub moment_of_inertia: f64,

    /// Distance from centroid to top fiber (mm)
    pub y_top: f64,

    /// Distance from centroid to bottom fiber (mm)
    pub y_bot: f64,

    /// Section modulus, top fiber (mm³)
    pub z_top: f64,

    /// Section modulus, bottom fiber (mm³)
    pub z_bot: f64,

    /// Outer perimeter, used for shrinkage exposure (mm)
    pub perimeter: f64,
}

impl BeamSection {
    /// Shape discriminator for this section
    pub fn kind(&self) -> SectionKind {
        match self {
            BeamSection::Rectangular(_) => SectionKind::Rectangular,
            BeamSection::TBeam(_) => SectionKind::TBeam,
            BeamSection::IBeam(_) => SectionKind::IBeam,
            BeamSection::BoxGirder(_) => SectionKind::BoxGirder,
        }
    }

    /// Total section height (mm)
    pub fn height(&self) -> f64 {
        match self {
            BeamSection::Rectangular(s) => s.height,
            BeamSection::TBeam(s) => s.h,
            BeamSection::IBeam(s) => s.h,
            BeamSection::BoxGirder(s) => s.h,
        }
    }

    /// Web width used in shear formulas (mm).
    ///
    /// Box girders carry shear on both webs, so their effective width is
    /// twice the single-web thickness.
    pub fn web_width(&self) -> f64 {
        match self {
            BeamSection::Rectangular(s) => s.width,
            BeamSection::TBeam(s) => s.bw,
            BeamSection::IBeam(s) => s.bw,
            BeamSection::BoxGirder(s) => 2.0 * s.t_web,
        }
    }

    /// Compute the derived section properties for the active shape.
    pub fn properties(&self) -> SectionProperties {
        match self {
            BeamSection::Rectangular(s) => {
                let (b, h) = (s.width, s.height);

                let area = b * h;
                let i = b * h.powi(3) / 12.0;
                let y_top = h / 2.0;
                let y_bot = h / 2.0;
                let perimeter = 2.0 * (b + h);

                assemble(area, i, y_top, y_bot, perimeter)
            }
            BeamSection::TBeam(s) => {
                let (bw, bf, hf, h) = (s.bw, s.bf, s.hf, s.h);
                let hw = h - hf;

                let area = bf * hf + bw * hw;

                // Centroid from bottom
                let y_bar = (bf * hf * (h - hf / 2.0) + bw * hw * (hw / 2.0)) / area;
                let y_bot = y_bar;
                let y_top = h - y_bar;

                let i_flange =
                    bf * hf.powi(3) / 12.0 + bf * hf * ((h - hf / 2.0) - y_bar).powi(2);
                let i_web = bw * hw.powi(3) / 12.0 + bw * hw * ((hw / 2.0) - y_bar).powi(2);
                let i = i_flange + i_web;

                let perimeter = 2.0 * h + 2.0 * bf + 2.0 * (bf - bw);

                assemble(area, i, y_top, y_bot, perimeter)
            }
            BeamSection::IBeam(s) => {
                let (bw, bf_top, bf_bot) = (s.bw, s.bf_top, s.bf_bot);
                let (hf_top, hf_bot, h) = (s.hf_top, s.hf_bot, s.h);
                let hw = h - hf_top - hf_bot;

                let a_top = bf_top * hf_top;
                let a_web = bw * hw;
                let a_bot = bf_bot * hf_bot;
                let area = a_top + a_web + a_bot;

                // Centroid from bottom
                let y_bar = (a_bot * (hf_bot / 2.0)
                    + a_web * (hf_bot + hw / 2.0)
                    + a_top * (h - hf_top / 2.0))
                    / area;
                let y_bot = y_bar;
                let y_top = h - y_bar;

                let i_bot =
                    bf_bot * hf_bot.powi(3) / 12.0 + a_bot * ((hf_bot / 2.0) - y_bar).powi(2);
                let i_web =
                    bw * hw.powi(3) / 12.0 + a_web * ((hf_bot + hw / 2.0) - y_bar).powi(2);
                let i_top =
                    bf_top * hf_top.powi(3) / 12.0 + a_top * ((h - hf_top / 2.0) - y_bar).powi(2);
                let i = i_bot + i_web + i_top;

                let perimeter =
                    2.0 * h + bf_top + bf_bot + 2.0 * (bf_top - bw) + 2.0 * (bf_bot - bw);

                assemble(area, i, y_top, y_bot, perimeter)
            }
            BeamSection::BoxGirder(s) => {
                let (b_top, b_bot) = (s.b_top, s.b_bot);
                let (t_top, t_bot, t_web, h) = (s.t_top, s.t_bot, s.t_web, s.h);

                let h_int = h - t_top - t_bot;

                let a_top = b_top * t_top;
                let a_bot = b_bot * t_bot;
                let a_webs = 2.0 * t_web * h_int;
                let area = a_top + a_bot + a_webs;

                // Centroid from bottom
                let y_bar = (a_bot * (t_bot / 2.0)
                    + a_webs * (t_bot + h_int / 2.0)
                    + a_top * (h - t_top / 2.0))
                    / area;
                let y_bot = y_bar;
                let y_top = h - y_bar;

                let i_bot =
                    b_bot * t_bot.powi(3) / 12.0 + a_bot * ((t_bot / 2.0) - y_bar).powi(2);
                let i_webs = 2.0
                    * (t_web * h_int.powi(3) / 12.0
                        + a_webs / 2.0 * ((t_bot + h_int / 2.0) - y_bar).powi(2));
                let i_top =
                    b_top * t_top.powi(3) / 12.0 + a_top * ((h - t_top / 2.0) - y_bar).powi(2);
                let i = i_bot + i_webs + i_top;

                let perimeter = 2.0 * (b_top + b_bot) + 4.0 * h_int;

                assemble(area, i, y_top, y_bot, perimeter)
            }
        }
    }
}

fn assemble(area: f64, i: f64, y_top: f64, y_bot: f64, perimeter: f64) -> SectionProperties {
    SectionProperties {
        area,
        moment_of_inertia: i,
        y_top,
        y_bot,
        z_top: i / y_top,
        z_bot: i / y_bot,
        perimeter,
    }
}
