use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::notifications::entities::Notification;

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct NotificationListResponse {
    pub items: Vec<Notification>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct UnreadCountResponse {
    pub unread_count: i64,
}
