//! Player detail, list and stat update service.


use entity::sea_orm_active_enums::Position;
use sea_orm::DatabaseConnection;
use serde_json::{Map, Value};

use crate::{
    model::player::{PlayerDto, PlayerPageDto},
    server::{
        data::{
            career_stats::CareerStatsRepository,
            player::{PlayerListFilter, PlayerRepository},
        },
        error::{player::PlayerError, Error},
        service::view::{list_item_dto, player_dto},
        stats::{field::ListOrdering, update::StatsUpdate},
        util::pagination::{page_link, PageRequest},
    },
};

/// Path the player list is served from, used to build page links
pub const PLAYER_LIST_PATH: &str = "/players/";

/// Raw query parameters of the player list.
#[derive(Debug, Clone, Default)]
pub struct PlayerListQuery {
    /// 1-based page number
    pub page: Option<u64>,
    /// Page size override
    pub limit: Option<u64>,
    /// Position code filter, empty means no filter
    pub position: Option<String>,
    /// Name substring filter
    pub search: Option<String>,
    /// Ordering key such as `-home_runs`
    pub ordering: Option<String>,
}

impl PlayerListQuery {
    /// Query parameters other than `page` that page links must carry over
    fn link_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(position) = &self.position {
            params.push(("position", position.clone()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        if let Some(ordering) = &self.ordering {
            params.push(("ordering", ordering.clone()));
        }

        params
    }
}

/// Service for reading players and updating their career stats.
pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    /// Creates a new instance of [`PlayerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a player with their career stats and derived metrics.
    ///
    /// # Arguments
    /// - `player_id` - Player ID exactly as supplied in the request path
    ///
    /// # Returns
    /// - `Ok(PlayerDto)` - Player found
    /// - `Err(Error::PlayerError(PlayerNotFound))` - ID isn't an integer or no such player
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_player(&self, player_id: &str) -> Result<PlayerDto, Error> {
        let player_repo = PlayerRepository::new(self.db);

        let id = parse_player_id(player_id)?;
        let (player, stats) = player_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| PlayerError::PlayerNotFound(player_id.to_string()))?;

        Ok(player_dto(player, stats))
    }

    /// Lists one page of players.
    ///
    /// # Returns
    /// - `Ok(PlayerPageDto)` - Requested page with total count and neighbouring page links
    /// - `Err(Error::PlayerError(InvalidPosition))` - Position filter isn't a known code
    /// - `Err(Error::PlayerError(InvalidPage))` - Page 0 or past the last page
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn list_players(&self, query: &PlayerListQuery) -> Result<PlayerPageDto, Error> {
        let player_repo = PlayerRepository::new(self.db);

        let position = match query.position.as_deref() {
            None | Some("") => None,
            Some(code) => Some(
                Position::from_code(code)
                    .ok_or_else(|| PlayerError::InvalidPosition(code.to_string()))?,
            ),
        };
        let filter = PlayerListFilter {
            position,
            search: query.search.clone(),
        };
        let ordering = query
            .ordering
            .as_deref()
            .map(ListOrdering::parse)
            .unwrap_or_default();

        let request = PageRequest::new(query.page, query.limit);
        let index = request
            .index()
            .ok_or(PlayerError::InvalidPage(request.page))?;

        let page = player_repo
            .list(&filter, ordering, request.page_size, index)
            .await?;

        // An empty result set still has a first page
        if request.page > page.pages.max(1) {
            return Err(PlayerError::InvalidPage(request.page).into());
        }

        let params = query.link_params();
        let next = if request.page < page.pages {
            Some(page_link(PLAYER_LIST_PATH, &params, request.page + 1)?)
        } else {
            None
        };
        let previous = if request.page > 1 {
            Some(page_link(PLAYER_LIST_PATH, &params, request.page - 1)?)
        } else {
            None
        };

        let results = page
            .players
            .iter()
            .map(|(player, stats)| list_item_dto(player, stats.as_ref()))
            .collect();

        Ok(PlayerPageDto {
            count: page.total,
            next,
            previous,
            results,
        })
    }

    /// Overwrites the supplied stat fields of a player and returns the updated player.
    ///
    /// Fields missing from `body` keep their stored values. Nothing is written when any
    /// supplied field fails validation.
    ///
    /// # Returns
    /// - `Ok(PlayerDto)` - Updated player with recomputed derived metrics
    /// - `Err(Error::PlayerError(PlayerNotFound))` - Unknown player ID
    /// - `Err(Error::PlayerError(StatsNotFound))` - Player has no stats record to update
    /// - `Err(Error::PlayerError(InvalidStats))` - One or more fields failed validation
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn update_stats(
        &self,
        player_id: &str,
        body: &Map<String, Value>,
    ) -> Result<PlayerDto, Error> {
        let player_repo = PlayerRepository::new(self.db);
        let stats_repo = CareerStatsRepository::new(self.db);

        let id = parse_player_id(player_id)?;
        let (player, stats) = player_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| PlayerError::PlayerNotFound(player_id.to_string()))?;
        let stats = stats.ok_or(PlayerError::StatsNotFound(player.id))?;

        let update = StatsUpdate::from_json(body).map_err(PlayerError::InvalidStats)?;

        let stats = stats_repo.update(stats, &update).await?;

        tracing::info!(
            player_id = %player.id,
            fields = update.counts.len() + update.rates.len(),
            "Updated career stats for {}",
            player.name
        );

        Ok(player_dto(player, Some(stats)))
    }
}

/// Parse a player ID from a request, unparseable IDs are simply not found
pub(crate) fn parse_player_id(player_id: &str) -> Result<i32, PlayerError> {
    player_id
        .trim()
        .parse::<i32>()
        .map_err(|_| PlayerError::PlayerNotFound(player_id.to_string()))
}
