use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::PaginationInfo;

// 管理端总览
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct OverviewResponse {
    pub student_count: i64,
    pub teacher_count: i64,
    pub class_count: i64,
    pub subject_count: i64,
    // 全校出勤率（百分比，保留两位小数）；考勤数据缺失时为 0
    pub attendance_rate: f64,
}

// 班级学业概况
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct ClassAcademics {
    pub class_id: i64,
    pub class_name: String,
    // 该班全部成绩的百分比均值
    pub average_percentage: f64,
    pub mark_count: i64,
}

// 教师工作量
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct TeacherWorkload {
    pub teacher_id: i64,
    pub username: String,
    pub display_name: Option<String>,
    pub class_count: i64,
    pub subject_count: i64,
}

// 学业分析响应：班级均分、薄弱班级（升序）、教师工作量
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct AcademicsResponse {
    pub class_averages: Vec<ClassAcademics>,
    pub weak_classes: Vec<ClassAcademics>,
    pub weak_class_threshold: f64,
    pub teacher_workloads: Vec<TeacherWorkload>,
}

// 名册条目：学生 + 出勤率 + 成绩均分
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct RosterStudent {
    pub student_id: i64,
    pub username: String,
    pub display_name: Option<String>,
    pub attendance_rate: f64,
    pub average_score: Option<f64>,
}

// 教师名册响应（分页）
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct RosterResponse {
    pub class_id: i64,
    pub items: Vec<RosterStudent>,
    pub pagination: PaginationInfo,
}
