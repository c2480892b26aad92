//! Player queries: lookups, the filtered list, leaderboards and threshold queries.

use chrono::Utc;
use entity::sea_orm_active_enums::Position;
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, ExprTrait, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    model::db::{CareerStatsModel, PlayerModel},
    stats::field::ListOrdering,
};

/// Largest `LIMIT` every supported backend binds without overflow
const MAX_QUERY_LIMIT: u64 = i64::MAX as u64;

/// Filters accepted by [`PlayerRepository::list`].
#[derive(Debug, Clone, Default)]
pub struct PlayerListFilter {
    /// Exact position match
    pub position: Option<Position>,
    /// Case-insensitive substring of the player name
    pub search: Option<String>,
}

/// One page of players along with the total across all pages.
pub struct PlayerPage {
    /// Players on the requested page, each with their stats if recorded
    pub players: Vec<(PlayerModel, Option<CareerStatsModel>)>,
    /// Number of players matching the filter
    pub total: u64,
    /// Number of pages at the requested page size
    pub pages: u64,
}

/// Repository for players and their joined career stats.
pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    /// Creates a new instance of [`PlayerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new player
    ///
    /// Fails if a player with the same name already exists.
    pub async fn create(
        &self,
        name: &str,
        position: Position,
        description: Option<String>,
    ) -> Result<PlayerModel, DbErr> {
        let now = Utc::now().naive_utc();

        let player = entity::player::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            position: ActiveValue::Set(position),
            description: ActiveValue::Set(description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        player.insert(self.db).await
    }

    /// Gets a player by ID along with their career stats, if recorded
    pub async fn get_by_id(
        &self,
        player_id: i32,
    ) -> Result<Option<(PlayerModel, Option<CareerStatsModel>)>, DbErr> {
        entity::prelude::Player::find_by_id(player_id)
            .find_also_related(entity::prelude::CareerStats)
            .one(self.db)
            .await
    }

    /// Gets a player by their exact name
    pub async fn get_by_name(&self, name: &str) -> Result<Option<PlayerModel>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Lists one page of players matching `filter`.
    ///
    /// Players without stats are included. Sorting by a stat column always breaks ties by name.
    ///
    /// # Arguments
    /// - `page_index` - Zero-based page index
    pub async fn list(
        &self,
        filter: &PlayerListFilter,
        ordering: ListOrdering,
        page_size: u64,
        page_index: u64,
    ) -> Result<PlayerPage, DbErr> {
        let mut query = entity::prelude::Player::find()
            .find_also_related(entity::prelude::CareerStats);

        if let Some(position) = filter.position {
            query = query.filter(entity::player::Column::Position.eq(position));
        }

        if let Some(search) = filter.search.as_deref().filter(|search| !search.is_empty()) {
            query = query.filter(name_contains(search));
        }

        let order = if ordering.descending {
            Order::Desc
        } else {
            Order::Asc
        };

        query = match ordering.stats_column() {
            Some(column) => query
                .order_by(column, order)
                .order_by_asc(entity::player::Column::Name),
            None => query.order_by(entity::player::Column::Name, order),
        };

        let paginator = query.paginate(self.db, page_size);
        let counts = paginator.num_items_and_pages().await?;
        let players = paginator.fetch_page(page_index).await?;

        Ok(PlayerPage {
            players,
            total: counts.number_of_items,
            pages: counts.number_of_pages,
        })
    }

    /// Top `limit` players with stats, descending by `column`, ties broken by name
    ///
    /// Limits beyond what the backend can bind as a signed 64-bit integer are clamped.
    pub async fn leaderboard(
        &self,
        column: entity::career_stats::Column,
        limit: u64,
    ) -> Result<Vec<(PlayerModel, CareerStatsModel)>, DbErr> {
        let limit = Ord::min(limit, MAX_QUERY_LIMIT);

        let rows = entity::prelude::Player::find()
            .find_also_related(entity::prelude::CareerStats)
            .filter(entity::career_stats::Column::Id.is_not_null())
            .order_by_desc(column)
            .order_by_asc(entity::player::Column::Name)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(with_stats(rows))
    }

    /// Players with stats matching `condition`, in name order
    ///
    /// `condition` may reference both player and career stats columns.
    pub async fn find_with_stats(
        &self,
        condition: Condition,
        limit: Option<u64>,
    ) -> Result<Vec<(PlayerModel, CareerStatsModel)>, DbErr> {
        let rows = entity::prelude::Player::find()
            .find_also_related(entity::prelude::CareerStats)
            .filter(entity::career_stats::Column::Id.is_not_null())
            .filter(condition)
            .order_by_asc(entity::player::Column::Name)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(with_stats(rows))
    }

    /// Deletes a player, cascading to their career stats
    ///
    /// Returns OK regardless of the player existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, player_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Player::delete_by_id(player_id)
            .exec(self.db)
            .await
    }
}

/// Case-insensitive substring match on player name, portable across backends
fn name_contains(search: &str) -> Expr {
    let escaped = search
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    Expr::expr(Func::lower(Expr::col((
        entity::player::Entity,
        entity::player::Column::Name,
    ))))
    .like(LikeExpr::new(format!("%{}%", escaped)).escape('\\'))
}

// Rows come from a left join filtered on a non-null stats id
fn with_stats(
    rows: Vec<(PlayerModel, Option<CareerStatsModel>)>,
) -> Vec<(PlayerModel, CareerStatsModel)> {
    rows.into_iter()
        .filter_map(|(player, stats)| stats.map(|stats| (player, stats)))
        .collect()
}
