use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::profiles::entities::{StudentProfile, TeacherProfile};
use crate::models::users::entities::User;

// 当前用户资料视图：账号信息 + 角色专属资料
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/profile.ts")]
pub struct ProfileResponse {
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_profile: Option<StudentProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_profile: Option<TeacherProfile>,
}
