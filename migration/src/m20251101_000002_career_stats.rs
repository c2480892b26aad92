use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_player::Player;

static IDX_CAREER_STATS_HOME_RUNS: &str = "idx-career_stats-home_runs";
static IDX_CAREER_STATS_BATTING_AVG: &str = "idx-career_stats-batting_avg";
static IDX_CAREER_STATS_OPS: &str = "idx-career_stats-ops";
static FK_CAREER_STATS_PLAYER_ID: &str = "fk-career_stats-player_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CareerStats::Table)
                    .if_not_exists()
                    .col(pk_auto(CareerStats::Id))
                    .col(integer_uniq(CareerStats::PlayerId))
                    .col(integer(CareerStats::Games))
                    .col(integer(CareerStats::AtBats))
                    .col(integer(CareerStats::Runs))
                    .col(integer(CareerStats::Hits))
                    .col(integer(CareerStats::Doubles))
                    .col(integer(CareerStats::Triples))
                    .col(integer(CareerStats::HomeRuns))
                    .col(integer(CareerStats::Rbis))
                    .col(integer(CareerStats::Walks))
                    .col(integer(CareerStats::Strikeouts))
                    .col(integer(CareerStats::StolenBases))
                    .col(integer_null(CareerStats::CaughtStealing))
                    .col(decimal_len(CareerStats::BattingAvg, 5, 3))
                    .col(decimal_len(CareerStats::OnBasePct, 5, 3))
                    .col(decimal_len(CareerStats::SluggingPct, 5, 3))
                    .col(decimal_len(CareerStats::Ops, 5, 3))
                    .col(timestamp(CareerStats::CreatedAt))
                    .col(timestamp(CareerStats::UpdatedAt))
                    // Stats rows only exist for as long as their player does
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CAREER_STATS_PLAYER_ID)
                            .from(CareerStats::Table, CareerStats::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            (IDX_CAREER_STATS_HOME_RUNS, CareerStats::HomeRuns),
            (IDX_CAREER_STATS_BATTING_AVG, CareerStats::BattingAvg),
            (IDX_CAREER_STATS_OPS, CareerStats::Ops),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(CareerStats::Table)
                        .col((column, IndexOrder::Desc))
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            IDX_CAREER_STATS_OPS,
            IDX_CAREER_STATS_BATTING_AVG,
            IDX_CAREER_STATS_HOME_RUNS,
        ] {
            manager
                .drop_index(
                    Index::drop()
                        .name(name)
                        .table(CareerStats::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(CareerStats::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CareerStats {
    Table,
    Id,
    PlayerId,
    Games,
    AtBats,
    Runs,
    Hits,
    Doubles,
    Triples,
    HomeRuns,
    Rbis,
    Walks,
    Strikeouts,
    StolenBases,
    CaughtStealing,
    BattingAvg,
    OnBasePct,
    SluggingPct,
    Ops,
    CreatedAt,
    UpdatedAt,
}
