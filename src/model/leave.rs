use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: String,
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: String,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Caller-supplied; not derived from the date range.
    pub days: f64,
    #[serde(default)]
    pub reason: String,
    pub status: LeaveStatus,
    pub applied_on: NaiveDate,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveBalance {
    pub casual: BalanceEntry,
    pub sick: BalanceEntry,
    pub earned: BalanceEntry,
}

impl LeaveBalance {
    /// Balance granted to an employee with no stored entry.
    pub fn default_grant() -> Self {
        Self {
            casual: BalanceEntry::fresh(12),
            sick: BalanceEntry::fresh(10),
            earned: BalanceEntry::fresh(15),
        }
    }
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceEntry {
    pub total: u32,
    pub used: u32,
    pub remaining: u32,
}

impl BalanceEntry {
    pub fn fresh(total: u32) -> Self {
        Self {
            total,
            used: 0,
            remaining: total,
        }
    }

    pub fn used(total: u32, used: u32) -> Self {
        Self {
            total,
            used,
            remaining: total.saturating_sub(used),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveTypeInfo {
    pub code: String,
    pub name: String,
    pub max_days: u32,
}

pub static LEAVE_TYPES: Lazy<Vec<LeaveTypeInfo>> = Lazy::new(|| {
    vec![
        LeaveTypeInfo {
            code: "casual".to_string(),
            name: "Casual Leave".to_string(),
            max_days: 12,
        },
        LeaveTypeInfo {
            code: "sick".to_string(),
            name: "Sick Leave".to_string(),
            max_days: 10,
        },
        LeaveTypeInfo {
            code: "earned".to_string(),
            name: "Earned Leave".to_string(),
            max_days: 15,
        },
    ]
});
