//! Shared test harness for the Slugger workspace.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares the tables and fixtures a test
//! needs, then the resulting [`TestContext`] exposes the in-memory database and fixture helpers
//! while the test runs.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::player::factory, model::CareerStatsModel, model::PlayerModel, TestBuilder,
        TestContext, TestError,
    };
    pub use entity::sea_orm_active_enums::Position;
}
