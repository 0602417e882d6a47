use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-employee compensation breakdown. Read-only in this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryStructure {
    pub employee_id: String,
    pub basic: f64,
    pub hra: f64,
    pub conveyance: f64,
    pub special_allowance: f64,
    pub pf: f64,
    pub tax: f64,
    pub gross: f64,
    pub net: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payslip {
    pub id: String,
    pub employee_id: String,
    pub month: String,
    pub basic: f64,
    pub allowances: f64,
    pub deductions: f64,
    pub net_pay: f64,
    pub status: PayslipStatus,
    pub paid_on: Option<NaiveDate>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PayslipStatus {
    Paid,
    Unpaid,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollSummary {
    pub month: String,
    pub total_gross: f64,
    pub total_deductions: f64,
    pub total_net_salary: f64,
    pub employees_paid: u32,
}
