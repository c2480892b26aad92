//! Sabermetric formulas and stat field definitions.
//!
//! Everything in this module is pure: derived metrics are computed from a [`StatLine`]
//! snapshot on read and never stored. External stat keys (leaderboard `stat`, list `ordering`,
//! update payload fields) are resolved through the explicit enums in [`field`] instead of
//! reflective field lookups.

pub mod classification;
pub mod field;
pub mod formula;
pub mod summary;
pub mod update;

pub use formula::{DerivedStats, StatLine};
