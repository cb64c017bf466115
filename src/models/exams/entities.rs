use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct Exam {
    pub id: i64,
    pub class_id: i64,
    pub exam_name: String,
    // YYYY-MM-DD
    pub exam_date: String,
    pub max_marks: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
