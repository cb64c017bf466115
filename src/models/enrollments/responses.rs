use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::enrollments::entities::Enrollment;

// 名册条目：注册记录 + 学生账号摘要（一次批量查询组装，非逐条回查）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentEntry {
    #[serde(flatten)]
    #[ts(flatten)]
    pub enrollment: Enrollment,
    pub username: Option<String>,
    pub display_name: Option<String>,
}

// 班级名册响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentListResponse {
    pub items: Vec<EnrollmentEntry>,
    pub pagination: PaginationInfo,
}
