use serde::Deserialize;
use ts_rs::TS;

// 录入/覆盖成绩请求（PUT，自然键冲突时幂等更新）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mark.ts")]
pub struct UpsertMarkRequest {
    pub student_id: i64,
    pub exam_id: i64,
    pub subject_id: i64,
    pub score: f64,
    pub remarks: Option<String>,
}

// 成绩查询：按学生，或按考试+可选科目
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mark.ts")]
pub struct MarkQueryParams {
    pub student_id: Option<i64>,
    pub exam_id: Option<i64>,
    pub subject_id: Option<i64>,
}
