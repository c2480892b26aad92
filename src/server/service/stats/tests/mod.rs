use slugger_test_utils::prelude::*;

use crate::server::service::stats::StatsService;


async fn legends() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_player_tables()
        .with_legends()
        .build()
        .await
}
