use serde::Deserialize;
use ts_rs::TS;

use crate::models::attendance::entities::AttendanceStatus;

// 单条考勤录入（PUT，自然键冲突时幂等更新）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct UpsertAttendanceRequest {
    pub class_id: i64,
    pub student_id: i64,
    pub date: String,
    pub status: AttendanceStatus,
}

// 整班批量录入：同一天为每个学生写入一条记录
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct BulkAttendanceRequest {
    pub class_id: i64,
    pub date: String,
    pub entries: Vec<BulkAttendanceEntry>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct BulkAttendanceEntry {
    pub student_id: i64,
    pub status: AttendanceStatus,
}

// 考勤查询：按班级+日期，或按学生
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceQueryParams {
    pub class_id: Option<i64>,
    pub student_id: Option<i64>,
    pub date: Option<String>,
}
