use serde::Deserialize;
use ts_rs::TS;

// 生成某班级某次考试的成绩报告
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct GenerateReportsRequest {
    pub class_id: i64,
    pub exam_id: i64,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ReportQueryParams {
    pub student_id: Option<i64>,
    pub exam_id: Option<i64>,
}

// 服务层算好的单个学生报告行，交给存储层批量落库
#[derive(Debug, Clone)]
pub struct ReportDraft {
    pub student_id: i64,
    pub exam_id: i64,
    pub average_score: f64,
    pub total_score: f64,
    pub rank: Option<i64>,
    pub remarks: Option<String>,
    pub generated_by: i64,
}
