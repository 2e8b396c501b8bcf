use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub date: String,
    pub timestamp: DateTime<Local>,
    pub steps: u64,
    pub walking: f64,
    pub money_spent: f64,
    pub learned: String,
    pub goals: String,
}

// Serialized journal shape: a JSON object keyed by YYYY-MM-DD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Journal {
    pub days: BTreeMap<String, ActivityRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub steps: u64,
    pub walking: f64,
    pub money_spent: f64,
    pub learned: String,
    pub goals: String,
}

impl NewEntry {
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.walking.is_finite() || self.walking < 0.0 {
            return Err(AppError::validation("walking must be a non-negative number"));
        }
        if !self.money_spent.is_finite() || self.money_spent < 0.0 {
            return Err(AppError::validation("moneySpent must be a non-negative number"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Week,
    Month,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub filter: Filter,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub created: bool,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub date: String,
    pub today: Option<ActivityRecord>,
    pub history: Vec<ActivityRecord>,
}
