use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 公告，class_id 为空表示全校公告
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct Announcement {
    pub id: i64,
    pub author_id: i64,
    pub class_id: Option<i64>,
    pub title: String,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
