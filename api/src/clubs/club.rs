use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Club {
    pub id: i64,
    pub name: String,
    pub nickname: String,
}

/// Body of both create and update. Update replaces both fields.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClubParams {
    pub name: String,
    pub nickname: String,
}

impl ClubParams {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_input("name must not be empty"));
        }
        if self.nickname.trim().is_empty() {
            return Err(AppError::invalid_input("nickname must not be empty"));
        }
        Ok(())
    }
}
