use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Addressed communication between two roster members.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub from: String,
    pub to: String,
    pub subject: String,
    pub content: String,
    pub sent_on: NaiveDate,
    #[serde(default)]
    pub read: bool,
}
