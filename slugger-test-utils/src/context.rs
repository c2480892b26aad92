//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder` for test execution. The
//! context owns an in-memory SQLite database and remembers the players inserted while it was
//! being built so tests can look them up by name.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{error::TestError, model::PlayerModel};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_player_tables().with_legends().build().await?;
///
/// let ruth = test.player_by_name("Babe Ruth")?;
/// test.player().insert_player("Test Player", Position::Shortstop).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,

    /// Players inserted by the builder or by fixtures, in insertion order
    pub(crate) players: Vec<PlayerModel>,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main slugger crate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Look up a player previously inserted through the builder or fixtures.
    ///
    /// # Returns
    /// - `Ok(PlayerModel)` - The inserted player record
    /// - `Err(TestError::MissingFixture)` - No player with that name was inserted
    pub fn player_by_name(&self, name: &str) -> Result<PlayerModel, TestError> {
        self.players
            .iter()
            .find(|player| player.name == name)
            .cloned()
            .ok_or_else(|| TestError::MissingFixture(name.to_string()))
    }
}

impl TestContext {
    /// Create a new test context backed by a fresh in-memory SQLite database.
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            players: Vec::new(),
        })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
