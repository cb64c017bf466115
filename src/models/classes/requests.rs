use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 班级查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    // 仅管理员生效：列表中包含已软删除的班级
    #[serde(default)]
    pub include_deleted: bool,
}

// 创建班级请求
//
// # teacher_id 字段说明
// - **教师创建**：可选字段，不填写则自动使用当前登录教师的 ID
// - **管理员创建**：必填字段，用于指定负责该班级的教师
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct CreateClassRequest {
    pub teacher_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
}

// 更新班级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub teacher_id: Option<i64>,
}

// 班级列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct ClassListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub teacher_id: Option<i64>,
    pub search: Option<String>,
    pub include_deleted: bool,
}
