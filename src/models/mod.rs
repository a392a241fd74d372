use serde::{Deserialize, Serialize};

use crate::game::countries;

/// Roster partition used to scope selection and lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Men,
    Women,
}

impl Category {
    /// Value stored in the `sex` column
    pub fn sex_code(self) -> &'static str {
        match self {
            Category::Men => "M",
            Category::Women => "F",
        }
    }

    /// Parses the `mode` query parameter. A missing mode means the men's roster.
    pub fn from_mode(mode: Option<&str>) -> Option<Category> {
        match mode.map(str::trim) {
            None | Some("") | Some("men") => Some(Category::Men),
            Some("women") => Some(Category::Women),
            Some(_) => None,
        }
    }
}

/// Row from the players table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct PlayerRow {
    pub id: i64,
    pub name: String,
    pub nationality: String,
    pub position: Option<String>,
    pub birthdate: Option<String>,
    pub age: Option<i64>,
    pub height_cm: Option<i64>,
    pub picture_url: Option<String>,
    pub team_name: Option<String>,
    pub jersey_number: Option<i64>,
    pub sex: Option<String>,
}

impl PlayerRow {
    /// Convert database row to API response format, attaching continent and flag
    pub fn into_player(self) -> Player {
        let continent = countries::continent_for(&self.nationality).to_string();
        let flag = countries::flag_for(&self.nationality).to_string();

        Player {
            id: self.id,
            name: self.name,
            nationality: self.nationality,
            position: self.position,
            birthdate: self.birthdate,
            age: self.age,
            height_cm: self.height_cm,
            picture_url: self.picture_url,
            team_name: self.team_name,
            jersey_number: self.jersey_number,
            sex: self.sex,
            continent,
            flag,
        }
    }
}

/// Player as served by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub nationality: String,
    pub position: Option<String>,
    pub birthdate: Option<String>,
    pub age: Option<i64>,
    pub height_cm: Option<i64>,
    pub picture_url: Option<String>,
    pub team_name: Option<String>,
    pub jersey_number: Option<i64>,
    pub sex: Option<String>,
    pub continent: String,
    pub flag: String,
}

/// New roster entry, used for fixtures and local seeding
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub nationality: String,
    pub position: Option<String>,
    pub birthdate: Option<String>,
    pub age: Option<i64>,
    pub height_cm: Option<i64>,
    pub picture_url: Option<String>,
    pub team_name: Option<String>,
    pub jersey_number: Option<i64>,
    pub sex: Option<String>,
}
