use serde::Deserialize;

use crate::error::ApiError;
use crate::models::Category;

pub mod guess;
pub mod health;
pub mod players;

// Query parameters shared by the roster endpoints
#[derive(Deserialize)]
pub struct ModeQuery {
    #[serde(default)]
    mode: Option<String>,
}

impl ModeQuery {
    pub fn category(&self) -> Result<Category, ApiError> {
        parse_mode(self.mode.as_deref())
    }
}

pub(crate) fn parse_mode(mode: Option<&str>) -> Result<Category, ApiError> {
    Category::from_mode(mode).ok_or_else(|| ApiError::BadRequest("Invalid mode".to_string()))
}
