use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;

use crate::models::{Category, NewPlayer, PlayerRow};

const PLAYER_COLUMNS: &str = "id, name, nationality, position, birthdate, age, height_cm, \
     picture_url, team_name, jersey_number, sex";

/// Read access to the roster, as needed by the daily game
#[async_trait]
pub trait PlayerLookup: Send + Sync {
    async fn list_eligible_ids(&self, category: Category) -> Result<Vec<i64>, sqlx::Error>;

    async fn find_by_id(&self, player_id: i64) -> Result<Option<PlayerRow>, sqlx::Error>;

    /// Case-insensitive exact name match within a category
    async fn find_by_name(
        &self,
        name: &str,
        category: Category,
    ) -> Result<Option<PlayerRow>, sqlx::Error>;

    async fn list_players(&self, category: Category) -> Result<Vec<PlayerRow>, sqlx::Error>;
}

#[async_trait]
impl PlayerLookup for SqlitePool {
    async fn list_eligible_ids(&self, category: Category) -> Result<Vec<i64>, sqlx::Error> {
        get_player_ids(self, category).await
    }

    async fn find_by_id(&self, player_id: i64) -> Result<Option<PlayerRow>, sqlx::Error> {
        get_player_by_id(self, player_id).await
    }

    async fn find_by_name(
        &self,
        name: &str,
        category: Category,
    ) -> Result<Option<PlayerRow>, sqlx::Error> {
        search_player(self, name, category).await
    }

    async fn list_players(&self, category: Category) -> Result<Vec<PlayerRow>, sqlx::Error> {
        get_players_by_category(self, category).await
    }
}

/// Create the players table when it doesn't exist yet
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS players (
               id INTEGER PRIMARY KEY AUTOINCREMENT,
               name TEXT NOT NULL,
               nationality TEXT NOT NULL,
               position TEXT,
               birthdate TEXT,
               age INTEGER,
               height_cm INTEGER,
               picture_url TEXT,
               team_name TEXT,
               jersey_number INTEGER,
               sex TEXT,
               UNIQUE (name, team_name)
           )"#
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn insert_player(pool: &SqlitePool, player: &NewPlayer) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"INSERT INTO players
               (name, nationality, position, birthdate, age, height_cm,
                picture_url, team_name, jersey_number, sex)
           VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#
    )
    .bind(&player.name)
    .bind(&player.nationality)
    .bind(&player.position)
    .bind(&player.birthdate)
    .bind(player.age)
    .bind(player.height_cm)
    .bind(&player.picture_url)
    .bind(&player.team_name)
    .bind(player.jersey_number)
    .bind(&player.sex)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

// Player queries
pub async fn get_player_ids(
    pool: &SqlitePool,
    category: Category,
) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"SELECT id FROM players WHERE sex = ? ORDER BY id"#
    )
    .bind(category.sex_code())
    .fetch_all(pool)
    .await
}

pub async fn get_players_by_category(
    pool: &SqlitePool,
    category: Category,
) -> Result<Vec<PlayerRow>, sqlx::Error> {
    sqlx::query_as::<_, PlayerRow>(&format!(
        "SELECT {PLAYER_COLUMNS} FROM players WHERE sex = ? ORDER BY name"
    ))
    .bind(category.sex_code())
    .fetch_all(pool)
    .await
}

pub async fn get_player_by_id(
    pool: &SqlitePool,
    player_id: i64,
) -> Result<Option<PlayerRow>, sqlx::Error> {
    sqlx::query_as::<_, PlayerRow>(&format!(
        "SELECT {PLAYER_COLUMNS} FROM players WHERE id = ?"
    ))
    .bind(player_id)
    .fetch_optional(pool)
    .await
}

/// Case-insensitive exact name match within a category.
///
/// SQLite's `LOWER()` only folds ASCII, so names like "Zehra Güneş" are
/// compared after Unicode lowercasing in Rust. Lowest id wins on duplicates.
pub async fn search_player(
    pool: &SqlitePool,
    name: &str,
    category: Category,
) -> Result<Option<PlayerRow>, sqlx::Error> {
    let wanted = name.trim().to_lowercase();

    let rows = sqlx::query_as::<_, PlayerRow>(&format!(
        "SELECT {PLAYER_COLUMNS} FROM players WHERE sex = ? ORDER BY id"
    ))
    .bind(category.sex_code())
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .find(|row| row.name.trim().to_lowercase() == wanted))
}

/// Cheap connectivity probe for the health endpoint
pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|_| ())
}
