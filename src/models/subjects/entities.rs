use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 科目，(class_id, subject_name) 唯一，teacher_id 为任课教师
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct Subject {
    pub id: i64,
    pub class_id: i64,
    pub teacher_id: i64,
    pub subject_name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
