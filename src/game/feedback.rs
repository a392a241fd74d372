//! Scoring a guess against the daily target.

use serde::{Deserialize, Serialize};

use crate::models::Player;

pub const AGE_THRESHOLD: i64 = 2;
pub const HEIGHT_THRESHOLD: i64 = 5;
pub const JERSEY_THRESHOLD: i64 = 3;

/// Outcome for a numeric attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericFeedback {
    Match,
    Higher,
    Lower,
    HigherFar,
    LowerFar,
    Unknown,
}

/// Compare `guess` with `target`. Misses within `close_threshold` are "near".
pub fn compare_numeric(
    guess: Option<i64>,
    target: Option<i64>,
    close_threshold: i64,
) -> NumericFeedback {
    let (Some(guess), Some(target)) = (guess, target) else {
        return NumericFeedback::Unknown;
    };

    let diff = guess - target;
    match (diff, diff.abs() <= close_threshold) {
        (0, _) => NumericFeedback::Match,
        (d, true) if d > 0 => NumericFeedback::Higher,
        (_, true) => NumericFeedback::Lower,
        (d, false) if d > 0 => NumericFeedback::HigherFar,
        (_, false) => NumericFeedback::LowerFar,
    }
}

/// Per-attribute feedback for one guess
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub name: String,
    pub nationality: bool,
    pub position: bool,
    pub team: bool,
    pub sex: bool,
    pub continent: bool,
    pub age: NumericFeedback,
    pub height: NumericFeedback,
    pub jersey_number: NumericFeedback,
}

/// Response body for a scored guess
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessResult {
    pub guess: Player,
    pub feedback: Feedback,
    pub is_correct: bool,
}

/// Attribute feedback for `guess` against `target`.
///
/// Both sides of an unmapped nationality resolve to the same "Unknown"
/// continent and therefore count as a continent match.
pub fn compare(guess: &Player, target: &Player) -> Feedback {
    Feedback {
        name: guess.name.clone(),
        nationality: guess.nationality == target.nationality,
        position: guess.position == target.position,
        team: guess.team_name == target.team_name,
        sex: guess.sex == target.sex,
        continent: guess.continent == target.continent,
        age: compare_numeric(guess.age, target.age, AGE_THRESHOLD),
        height: compare_numeric(guess.height_cm, target.height_cm, HEIGHT_THRESHOLD),
        jersey_number: compare_numeric(
            guess.jersey_number,
            target.jersey_number,
            JERSEY_THRESHOLD,
        ),
    }
}

/// Score a guess. Correctness is decided by id alone.
pub fn evaluate_guess(guess: Player, target: &Player) -> GuessResult {
    let feedback = compare(&guess, target);
    let is_correct = guess.id == target.id;

    GuessResult {
        guess,
        feedback,
        is_correct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerRow;

    fn player(id: i64, name: &str, nationality: &str) -> Player {
        PlayerRow {
            id,
            name: name.to_string(),
            nationality: nationality.to_string(),
            position: Some("Setter".to_string()),
            birthdate: Some("1999-04-02".to_string()),
            age: Some(25),
            height_cm: Some(190),
            picture_url: None,
            team_name: Some(nationality.to_string()),
            jersey_number: Some(10),
            sex: Some("M".to_string()),
        }
        .into_player()
    }

    #[test]
    fn age_examples() {
        let age = |guess: i64| compare_numeric(Some(guess), Some(25), AGE_THRESHOLD);

        assert_eq!(age(27), NumericFeedback::Higher);
        assert_eq!(age(28), NumericFeedback::HigherFar);
        assert_eq!(age(25), NumericFeedback::Match);
        assert_eq!(age(23), NumericFeedback::Lower);
        assert_eq!(age(22), NumericFeedback::LowerFar);
    }

    #[test]
    fn threshold_boundaries() {
        use NumericFeedback::*;

        for threshold in [AGE_THRESHOLD, HEIGHT_THRESHOLD, JERSEY_THRESHOLD] {
            let target = Some(100);
            let at = |offset: i64| compare_numeric(Some(100 + offset), target, threshold);

            assert_eq!(at(threshold), Higher);
            assert_eq!(at(threshold + 1), HigherFar);
            assert_eq!(at(-threshold), Lower);
            assert_eq!(at(-threshold - 1), LowerFar);
        }
    }

    #[test]
    fn missing_values_are_unknown() {
        for (guess, target) in [(None, Some(10)), (Some(10), None), (None, None)] {
            assert_eq!(
                compare_numeric(guess, target, JERSEY_THRESHOLD),
                NumericFeedback::Unknown
            );
        }
    }

    #[test]
    fn guessing_the_target_matches_everything() {
        let target = player(1, "Earvin Ngapeth", "France");
        let result = evaluate_guess(target.clone(), &target);

        assert!(result.is_correct);
        let fb = result.feedback;
        assert!(fb.nationality && fb.position && fb.team && fb.sex && fb.continent);
        assert_eq!(fb.age, NumericFeedback::Match);
        assert_eq!(fb.height, NumericFeedback::Match);
        assert_eq!(fb.jersey_number, NumericFeedback::Match);
    }

    #[test]
    fn different_player_same_continent() {
        let target = player(1, "Earvin Ngapeth", "France");
        let mut guess = player(2, "Wilfredo Leon", "Poland");
        guess.age = Some(31);
        guess.height_cm = Some(187);
        guess.jersey_number = None;

        let result = evaluate_guess(guess, &target);
        assert!(!result.is_correct);

        let fb = result.feedback;
        assert_eq!(fb.name, "Wilfredo Leon");
        assert!(!fb.nationality);
        assert!(!fb.team);
        assert!(fb.continent);
        assert!(fb.position);
        assert_eq!(fb.age, NumericFeedback::HigherFar);
        assert_eq!(fb.height, NumericFeedback::Lower);
        assert_eq!(fb.jersey_number, NumericFeedback::Unknown);
    }

    #[test]
    fn unknown_continents_compare_equal() {
        let target = player(1, "A", "Atlantis");
        let guess = player(2, "B", "Lemuria");

        let fb = compare(&guess, &target);
        assert!(fb.continent);
        assert!(!fb.nationality);
    }

    #[test]
    fn identical_attributes_without_same_id_is_not_correct() {
        let target = player(1, "Twin", "Italy");
        let duplicate = player(2, "Twin", "Italy");

        assert!(!evaluate_guess(duplicate, &target).is_correct);
    }

    #[test]
    fn numeric_feedback_serializes_snake_case() {
        let json = serde_json::to_string(&NumericFeedback::HigherFar).unwrap();
        assert_eq!(json, "\"higher_far\"");
    }
}
