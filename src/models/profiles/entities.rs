use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生资料
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/profile.ts")]
pub struct StudentProfile {
    pub id: i64,
    pub user_id: i64,
    pub admission_no: String,
    pub guardian_name: String,
    pub guardian_phone: String,
    // YYYY-MM-DD
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub class_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 教师资料
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/profile.ts")]
pub struct TeacherProfile {
    pub id: i64,
    pub user_id: i64,
    pub employee_no: String,
    pub qualification: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
