use serde::Deserialize;
use ts_rs::TS;

// 学生资料提交请求（补全后 profile_complete 置位）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/profile.ts")]
pub struct SubmitStudentProfileRequest {
    pub admission_no: String,
    pub guardian_name: String,
    pub guardian_phone: String,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub class_id: Option<i64>,
}

// 教师资料提交请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/profile.ts")]
pub struct SubmitTeacherProfileRequest {
    pub employee_no: String,
    pub qualification: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
}
