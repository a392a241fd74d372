use chrono::{NaiveDate, Utc};

use crate::db::PlayerLookup;
use crate::error::ApiError;
use crate::game::feedback::{self, GuessResult};
use crate::game::selector;
use crate::models::{Category, Player};

/// Current calendar day in UTC; the target only changes at UTC midnight
pub fn todays_date() -> NaiveDate {
    Utc::now().date_naive()
}

/// Materialize the target player for `date` and `category`
pub async fn player_of_the_day<L: PlayerLookup + ?Sized>(
    lookup: &L,
    date: NaiveDate,
    category: Category,
) -> Result<Player, ApiError> {
    let ids = lookup.list_eligible_ids(category).await?;
    let chosen = selector::select_daily_target(date, category, &ids)?;

    let row = lookup.find_by_id(chosen).await?.ok_or_else(|| {
        tracing::warn!(player_id = chosen, "Selected player vanished from roster");
        ApiError::no_player()
    })?;

    Ok(row.into_player())
}

/// Look up a guessed name in `category` and score it against the day's target
pub async fn score_guess<L: PlayerLookup + ?Sized>(
    lookup: &L,
    name: Option<&str>,
    date: NaiveDate,
    category: Category,
) -> Result<GuessResult, ApiError> {
    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::BadRequest("No name provided".to_string()))?;

    let guess = lookup
        .find_by_name(name, category)
        .await?
        .ok_or_else(|| {
            tracing::info!(name, ?category, "Guess did not match any player");
            ApiError::NotFound("Player not found for this mode".to_string())
        })?
        .into_player();

    let target = player_of_the_day(lookup, date, category).await?;

    Ok(feedback::evaluate_guess(guess, &target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerRow;
    use async_trait::async_trait;

    struct InMemoryRoster(Vec<PlayerRow>);

    fn row(id: i64, name: &str, sex: &str) -> PlayerRow {
        PlayerRow {
            id,
            name: name.to_string(),
            nationality: "Brazil".to_string(),
            position: Some("Libero".to_string()),
            birthdate: None,
            age: Some(24 + id),
            height_cm: Some(180 + id),
            picture_url: None,
            team_name: Some("Brazil".to_string()),
            jersey_number: Some(id),
            sex: Some(sex.to_string()),
        }
    }

    impl InMemoryRoster {
        fn in_category(&self, category: Category) -> impl Iterator<Item = &PlayerRow> {
            self.0
                .iter()
                .filter(move |p| p.sex.as_deref() == Some(category.sex_code()))
        }
    }

    #[async_trait]
    impl PlayerLookup for InMemoryRoster {
        async fn list_eligible_ids(&self, category: Category) -> Result<Vec<i64>, sqlx::Error> {
            Ok(self.in_category(category).map(|p| p.id).collect())
        }

        async fn find_by_id(&self, player_id: i64) -> Result<Option<PlayerRow>, sqlx::Error> {
            Ok(self.0.iter().find(|p| p.id == player_id).cloned())
        }

        async fn find_by_name(
            &self,
            name: &str,
            category: Category,
        ) -> Result<Option<PlayerRow>, sqlx::Error> {
            let wanted = name.to_lowercase();
            Ok(self
                .in_category(category)
                .find(|p| p.name.to_lowercase() == wanted)
                .cloned())
        }

        async fn list_players(&self, category: Category) -> Result<Vec<PlayerRow>, sqlx::Error> {
            Ok(self.in_category(category).cloned().collect())
        }
    }

    fn roster() -> InMemoryRoster {
        InMemoryRoster(vec![
            row(1, "Bruno Rezende", "M"),
            row(2, "Ricardo Lucarelli", "M"),
            row(3, "Darlan Souza", "M"),
            row(4, "Gabi Guimaraes", "F"),
            row(5, "Carol Gattaz", "F"),
            row(6, "Zehra Güneş", "F"),
        ])
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    #[tokio::test]
    async fn target_stays_in_category() {
        let roster = roster();
        let women = player_of_the_day(&roster, day(), Category::Women).await.unwrap();
        assert_eq!(women.sex.as_deref(), Some("F"));

        let men = player_of_the_day(&roster, day(), Category::Men).await.unwrap();
        assert_eq!(men.sex.as_deref(), Some("M"));
    }

    #[tokio::test]
    async fn empty_category_is_not_found() {
        let roster = InMemoryRoster(vec![row(1, "Bruno Rezende", "M")]);
        let err = player_of_the_day(&roster, day(), Category::Women).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(msg) if msg == "No player found"));
    }

    #[tokio::test]
    async fn correct_guess_is_case_insensitive() {
        let roster = roster();
        let target = player_of_the_day(&roster, day(), Category::Men).await.unwrap();

        let shouted = target.name.to_uppercase();
        let result = score_guess(&roster, Some(&shouted), day(), Category::Men)
            .await
            .unwrap();

        assert!(result.is_correct);
        assert_eq!(result.guess.id, target.id);
    }

    #[tokio::test]
    async fn non_ascii_names_ignore_case() {
        let roster = roster();
        let result = score_guess(&roster, Some("ZEHRA GÜNEŞ"), day(), Category::Women)
            .await
            .unwrap();

        assert_eq!(result.guess.id, 6);
    }

    #[tokio::test]
    async fn blank_name_is_bad_request() {
        let roster = roster();
        for name in [None, Some(""), Some("   ")] {
            let err = score_guess(&roster, name, day(), Category::Men).await.unwrap_err();
            assert!(matches!(err, ApiError::BadRequest(_)));
        }
    }

    #[tokio::test]
    async fn guess_from_other_category_is_not_found() {
        let roster = roster();
        let err = score_guess(&roster, Some("Gabi Guimaraes"), day(), Category::Men)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(msg) if msg == "Player not found for this mode"));
    }
}
