use axum::{
    extract::{Query, State},
    response::Json,
};
use sqlx::sqlite::SqlitePool;

use crate::db::PlayerLookup;
use crate::error::ApiError;
use crate::game::daily;
use crate::models::Player;
use crate::routes::ModeQuery;

// GET /api/players?mode=men - List the roster for a category
pub async fn get_players(
    State(pool): State<SqlitePool>,
    Query(params): Query<ModeQuery>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let category = params.category()?;

    let players = pool
        .list_players(category)
        .await?
        .into_iter()
        .map(|row| row.into_player())
        .collect();

    Ok(Json(players))
}

// GET /api/player-of-the-day?mode=women - Today's target player
pub async fn get_player_of_the_day(
    State(pool): State<SqlitePool>,
    Query(params): Query<ModeQuery>,
) -> Result<Json<Player>, ApiError> {
    let category = params.category()?;
    let player = daily::player_of_the_day(&pool, daily::todays_date(), category).await?;

    Ok(Json(player))
}
