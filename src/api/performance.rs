use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::boundary::{Backend, Reply, Request};
use crate::error::ServiceError;
use crate::model::performance::{Feedback, GoalStatus, PerformanceGoal, PerformanceReview};
use crate::query;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoal {
    pub employee_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
}

pub fn goals(backend: &mut Backend, req: Request) -> Result<Reply, ServiceError> {
    let employee_id = req.query.get("employeeId");

    let matches: Vec<&PerformanceGoal> = backend
        .store
        .goals
        .all()
        .iter()
        .filter(|goal| query::fk_filter(employee_id, &goal.employee_id))
        .collect();

    Ok(Reply::ok(&matches))
}

/// New goals always start at zero progress, In Progress.
pub fn create_goal(backend: &mut Backend, req: Request) -> Result<Reply, ServiceError> {
    let payload: CreateGoal = req.payload()?;

    let goal = PerformanceGoal {
        id: String::new(),
        employee_id: payload.employee_id,
        title: payload.title,
        description: payload.description,
        target_date: payload.target_date,
        progress: 0,
        status: GoalStatus::InProgress,
    };

    let created = backend.store.goals.insert(goal);
    info!(id = %created.id, "performance goal created");
    Ok(Reply::created(created, "Goal created successfully"))
}

pub fn reviews(backend: &mut Backend, req: Request) -> Result<Reply, ServiceError> {
    let employee_id = req.query.get("employeeId");

    let matches: Vec<&PerformanceReview> = backend
        .store
        .reviews
        .all()
        .iter()
        .filter(|review| query::fk_filter(employee_id, &review.employee_id))
        .collect();

    Ok(Reply::ok(&matches))
}

pub fn feedback(backend: &mut Backend, req: Request) -> Result<Reply, ServiceError> {
    let employee_id = req.query.get("employeeId");

    let matches: Vec<&Feedback> = backend
        .store
        .feedback
        .all()
        .iter()
        .filter(|fb| query::fk_filter(employee_id, &fb.employee_id))
        .collect();

    Ok(Reply::ok(&matches))
}
