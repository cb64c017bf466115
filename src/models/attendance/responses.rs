use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 单个学生的考勤汇总
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceSummary {
    pub student_id: i64,
    pub total_days: i64,
    pub present_days: i64,
    // 出勤率（百分比，保留两位小数）
    pub attendance_rate: f64,
}
