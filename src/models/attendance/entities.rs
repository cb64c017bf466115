use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考勤状态
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl<'de> Deserialize<'de> for AttendanceStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::custom(format!(
                "无效的考勤状态: '{s}'. 支持的状态: present, absent, late"
            )))
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "present"),
            AttendanceStatus::Absent => write!(f, "absent"),
            AttendanceStatus::Late => write!(f, "late"),
        }
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            "late" => Ok(AttendanceStatus::Late),
            _ => Err(format!("Invalid attendance status: {s}")),
        }
    }
}

impl AttendanceStatus {
    // 迟到计入出勤
    pub fn counts_as_present(&self) -> bool {
        matches!(self, AttendanceStatus::Present | AttendanceStatus::Late)
    }
}

// 考勤记录，(class_id, student_id, date) 唯一，冲突时覆盖更新
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceRecord {
    pub id: i64,
    pub class_id: i64,
    pub student_id: i64,
    // YYYY-MM-DD
    pub date: String,
    pub status: AttendanceStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for s in ["present", "absent", "late"] {
            let status: AttendanceStatus = s.parse().unwrap();
            assert_eq!(status.to_string(), s);
        }
        assert!("holiday".parse::<AttendanceStatus>().is_err());
    }

    #[test]
    fn test_late_counts_as_present() {
        assert!(AttendanceStatus::Late.counts_as_present());
        assert!(!AttendanceStatus::Absent.counts_as_present());
    }
}
