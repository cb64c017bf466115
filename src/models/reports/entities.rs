use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考试成绩报告：按学生汇总的均分/总分/名次
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct PerformanceReport {
    pub id: i64,
    pub student_id: i64,
    pub exam_id: i64,
    pub average_score: f64,
    pub total_score: f64,
    // 按总分密集排名，缺考学生无名次
    pub rank: Option<i64>,
    pub remarks: Option<String>,
    pub generated_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
