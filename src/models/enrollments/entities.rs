use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生-班级注册记录，(class_id, student_id) 唯一
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct Enrollment {
    pub id: i64,
    pub class_id: i64,
    pub student_id: i64,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}
