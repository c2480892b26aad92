//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use entity::sea_orm_active_enums::Position;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{
    context::TestContext,
    error::TestError,
    fixtures::player::factory,
    model::CareerStatsModel,
};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// player fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_player_tables: bool,

    // (name, position, stat line)
    players: Vec<(String, Position, Option<CareerStatsModel>)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_player_tables: false,
            players: Vec::new(),
        }
    }

    /// Add the `player` and `career_stats` tables to the test database.
    pub fn with_player_tables(mut self) -> Self {
        self.include_player_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use slugger_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), slugger_test_utils::TestError> {
    /// let test = TestBuilder::new().with_table(Player).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a player without a career stats record.
    pub fn with_player(mut self, name: impl Into<String>, position: Position) -> Self {
        self.players.push((name.into(), position, None));
        self
    }

    /// Insert a player along with the provided career stat line.
    ///
    /// The `id`, `player_id` and timestamp fields of `stats` are ignored.
    pub fn with_player_stats(
        mut self,
        name: impl Into<String>,
        position: Position,
        stats: CareerStatsModel,
    ) -> Self {
        self.players.push((name.into(), position, Some(stats)));
        self
    }

    /// Insert Babe Ruth, Hank Aaron and Willie Mays with their real career lines.
    pub fn with_legends(self) -> Self {
        self.with_player_stats("Babe Ruth", Position::Outfield, factory::babe_ruth_stats())
            .with_player_stats("Hank Aaron", Position::Outfield, factory::hank_aaron_stats())
            .with_player_stats(
                "Willie Mays",
                Position::CenterField,
                factory::willie_mays_stats(),
            )
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Tables are created first (player tables if requested, then custom tables), then players
    /// are inserted in the order they were declared.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_player_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Player),
                schema.create_table_from_entity(entity::prelude::CareerStats),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for (name, position, stats) in self.players {
            match stats {
                Some(stats) => {
                    setup
                        .player()
                        .insert_player_with_stats(&name, position, stats)
                        .await?;
                }
                None => {
                    setup.player().insert_player(&name, position).await?;
                }
            }
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
