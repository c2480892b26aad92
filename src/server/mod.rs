//! Server application core modules.
//!
//! This module contains all server-side functionality for Slugger: HTTP routing, the career
//! stats record store, the derived-statistics formulas and the leaderboard, summary and
//! comparison queries built on top of them.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod stats;
pub mod util;
