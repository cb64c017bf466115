use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct CreateExamRequest {
    pub class_id: i64,
    pub exam_name: String,
    pub exam_date: String,
    pub max_marks: f64,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct UpdateExamRequest {
    pub exam_name: Option<String>,
    pub exam_date: Option<String>,
    pub max_marks: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct ExamQueryParams {
    pub class_id: Option<i64>,
}
