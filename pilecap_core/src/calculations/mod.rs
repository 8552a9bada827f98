//! # Pile Cap Calculations
//!
//! The design is split into stages. Each stage is a pure function with its
//! own JSON-serializable result:
//!
//! - [`geometry`] - Factored loads, cap dimensions, effective depth
//! - [`reactions`] - Pile reaction and capacity check
//! - [`flexure`] - Moment, required steel, bar selection
//! - [`shear`] - One-way and punching shear
//!
//! [`pile_cap`] chains them:
//!
//! - `PileCapInput` - Input parameters (JSON-serializable)
//! - `PileCapResult` - Complete design (JSON-serializable)
//! - `compute_design(input, steel, concrete, bars)` - Pure calculation function
//!
//! Stage results expose `warnings()`; a failed check never aborts the design.

pub mod flexure;
pub mod geometry;
pub mod pile_cap;
pub mod reactions;
pub mod shear;
pub mod warnings;

pub use flexure::{BarLayout, BarSelection, FlexureParams, FlexureResult};
pub use geometry::{CapDimensions, LoadSummary};
pub use pile_cap::{
    calculate, compute_design, compute_design_with_settings, MaterialSummary, PileCapInput,
    PileCapResult,
};
pub use reactions::PileReactions;
pub use shear::ShearResult;
pub use warnings::{BarLayer, DesignWarning};
