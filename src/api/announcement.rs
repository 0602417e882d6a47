use chrono::Local;
use serde::Deserialize;
use tracing::info;

use crate::boundary::{Backend, Reply, Request};
use crate::error::ServiceError;
use crate::model::announcement::{Announcement, AnnouncementStatus};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncement {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub posted_by: String,
}

/// Only Active announcements are ever listed; archived ones stay stored
/// but invisible.
pub fn list(backend: &mut Backend, _req: Request) -> Result<Reply, ServiceError> {
    let matches: Vec<&Announcement> = backend
        .store
        .announcements
        .all()
        .iter()
        .filter(|ann| ann.status == AnnouncementStatus::Active)
        .collect();

    Ok(Reply::ok(&matches))
}

pub fn create(backend: &mut Backend, req: Request) -> Result<Reply, ServiceError> {
    let payload: CreateAnnouncement = req.payload()?;

    let announcement = Announcement {
        id: String::new(),
        title: payload.title,
        content: payload.content,
        category: payload.category,
        posted_by: payload.posted_by,
        posted_on: Local::now().date_naive(),
        status: AnnouncementStatus::Active,
    };

    let created = backend.store.announcements.insert(announcement);
    info!(id = %created.id, "announcement posted");
    Ok(Reply::created(created, "Announcement created successfully"))
}
