//! # Material Definitions
//!
//! Material property types for prestressed concrete design per EC2.
//!
//! ## Material Types
//!
//! - **Concrete**: characteristic strength plus the derived strength and
//!   stiffness set of EC2 Table 3.1
//! - **Prestressing steel**: strand properties and relaxation behavior per
//!   EC2 3.3
//!
//! ## Example
//!
//! ```rust
//! use camber_core::materials::{ConcreteGrade, PrestressingSteel};
//!
//! let concrete = ConcreteGrade::new(40.0);
//! println!("fctm = {:.2} MPa, Ecm = {:.1} GPa", concrete.fctm, concrete.ecm);
//!
//! let steel = PrestressingSteel::y1860s7();
//! assert_eq!(steel.fpk, 1860.0);
//! ```

pub mod concrete;
pub mod steel;

pub use concrete::ConcreteGrade;
pub use steel::{PrestressingSteel, RelaxationClass, StrandType};
