use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;
use crate::models::users::entities::{UserRole, UserStatus};

// 创建用户请求（注册与管理员创建共用）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: UserRole,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

fn default_role() -> UserRole {
    UserRole::Student
}

// 更新用户请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

// 用户列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

// 用户列表查询（用于存储层）
#[derive(Debug, Clone)]
pub struct UserListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

impl From<UserQueryParams> for UserListQuery {
    fn from(params: UserQueryParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            limit: Some(params.pagination.limit),
            search: params.search,
            role: params.role,
            status: params.status,
        }
    }
}
