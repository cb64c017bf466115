use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 注册学生到班级请求（管理员）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct CreateEnrollmentRequest {
    pub class_id: i64,
    pub student_id: i64,
}

// 班级名册查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
}
