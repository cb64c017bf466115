use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct CreateSubjectRequest {
    pub class_id: i64,
    pub teacher_id: i64,
    pub subject_name: String,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct UpdateSubjectRequest {
    pub teacher_id: Option<i64>,
    pub subject_name: Option<String>,
}

// 科目列表查询（按班级或教师过滤）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectQueryParams {
    pub class_id: Option<i64>,
    pub teacher_id: Option<i64>,
}
