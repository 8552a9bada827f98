//! # pilecap_core - Two-Pile Cap Design Engine
//!
//! `pilecap_core` designs reinforced-concrete pile caps resting on two piles,
//! using Thai TIS material and rebar tables with ACI 318 strength design.
//! All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types for bad input and unknown codes
//! - **Warnings, not aborts**: A failed check still returns a full design
//!
//! ## Quick Start
//!
//! ```rust
//! use pilecap_core::{calculate, PileCapInput};
//!
//! let input = PileCapInput::reference();
//! let result = calculate(&input).unwrap();
//!
//! assert_eq!(result.main_bars.count, 6);
//! assert!(result.passes());
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("max_pile_reaction_kn"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Design stages and the orchestrator
//! - [`equations`] - Pure formulas and the equation registry
//! - [`loads`] - Load types, cases and factored combinations
//! - [`materials`] - Steel grades, concrete grades and rebar tables
//! - [`report`] - Step-by-step calculation report
//! - [`settings`] - Tunable code factors
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod report;
pub mod settings;
pub mod units;

pub use calculations::{calculate, compute_design, DesignWarning, PileCapInput, PileCapResult};
pub use errors::{CalcError, CalcResult};
pub use materials::Standards;
pub use settings::DesignSettings;
