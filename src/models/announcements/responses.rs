use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::announcements::entities::Announcement;

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct AnnouncementListResponse {
    pub items: Vec<Announcement>,
    pub pagination: PaginationInfo,
}
