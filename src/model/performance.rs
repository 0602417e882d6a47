use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceGoal {
    pub id: String,
    pub employee_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub target_date: Option<NaiveDate>,
    /// 0..=100.
    pub progress: u8,
    pub status: GoalStatus,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum GoalStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReview {
    pub id: String,
    pub employee_id: String,
    pub reviewer: String,
    pub period: String,
    pub rating: f64,
    #[serde(default)]
    pub comments: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub employee_id: String,
    pub from: String,
    pub category: String,
    pub message: String,
    pub given_on: NaiveDate,
}
