use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::classes::entities::Class;

// 班级列表响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassListResponse {
    pub items: Vec<Class>,
    pub pagination: PaginationInfo,
}
