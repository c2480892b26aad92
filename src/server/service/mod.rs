//! Service layer for business logic.
//!
//! Services sit between the HTTP controllers and the repositories. They resolve client
//! supplied keys and IDs, run the record store queries and turn the results into API views
//! with their derived metrics.

pub mod comparison;
pub mod player;
pub mod stats;
pub mod view;
