//! Protective-device sizing for residential circuits.
//!
//! A TOML-driven bracket engine that maps a circuit's declared load to a
//! breaker rating, cable spec and RCD rating, and maps the installation's
//! total load to a main breaker and supply cable.
//!
//! # Architecture
//!
//! - **Catalog**: Bracket ladders and category overrides, embedded at compile
//!   time or loaded from a user file
//! - **Overrides**: Checked first; a high-draw load gets a fixed device pair
//! - **Ladder**: Ascending half-open brackets, upper bound inclusive
//!
//! # Example
//!
//! ```ignore
//! use smartcircuit_tauri::sizing::{recommend, recommend_main, LoadCategory, LoadSpecification};
//!
//! let rec = recommend(&LoadSpecification::new(3.5, LoadCategory::Generic))?;
//! assert_eq!(rec.breaker_rating, "16A C");
//!
//! let main = recommend_main(21.5)?;
//! assert_eq!(main.breaker_rating, "40A 2P");
//! ```

mod engine;
mod load_kind;
mod rules;
mod types;

pub use engine::{recommend, recommend_main, SizingEngine};
pub use load_kind::{load_kinds, LoadGroup, LoadKind, LoadKindInfo};
pub use rules::{default_catalog, load_catalog};
pub use types::*;
