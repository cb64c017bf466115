use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 创建通知（服务内部使用，公告/成绩发布时扇出）
#[derive(Debug, Clone)]
pub struct CreateNotificationRequest {
    pub user_id: i64,
    pub notification_type: String,
    pub title: String,
    pub content: String,
    pub reference_type: Option<String>,
    pub reference_id: Option<i64>,
}

// 通知列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct NotificationQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub unread_only: Option<bool>,
}
