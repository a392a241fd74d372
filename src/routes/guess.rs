use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;

use crate::error::ApiError;
use crate::game::daily;
use crate::game::feedback::GuessResult;
use crate::routes::parse_mode;

// Query parameters for submitting a guess
#[derive(Deserialize)]
pub struct GuessQuery {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    mode: Option<String>,
}

// GET /api/guess?name=Earvin%20Ngapeth&mode=men - Score a guess against today's player
pub async fn guess_player(
    State(pool): State<SqlitePool>,
    Query(params): Query<GuessQuery>,
) -> Result<Json<GuessResult>, ApiError> {
    let category = parse_mode(params.mode.as_deref())?;

    let result = daily::score_guess(
        &pool,
        params.name.as_deref(),
        daily::todays_date(),
        category,
    )
    .await?;

    tracing::debug!(guess = %result.guess.name, is_correct = result.is_correct, "Scored guess");

    Ok(Json(result))
}
