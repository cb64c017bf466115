use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    // 通知类型，如 "announcement" / "mark" / "report"
    pub notification_type: String,
    pub title: String,
    pub content: String,
    // 关联资源，用于前端跳转
    pub reference_type: Option<String>,
    pub reference_id: Option<i64>,
    pub is_read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
