use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 成绩记录，(student_id, exam_id, subject_id) 唯一，冲突时覆盖更新
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mark.ts")]
pub struct Mark {
    pub id: i64,
    pub student_id: i64,
    pub exam_id: i64,
    pub subject_id: i64,
    pub score: f64,
    pub remarks: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
