use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct Class {
    // 班级ID
    pub id: i64,
    // 班级名称
    pub class_name: String,
    // 班级描述
    pub description: Option<String>,
    // 班主任（教师）ID
    pub teacher_id: i64,
    // 软删除标记，管理员可恢复
    pub deleted_at: Option<chrono::DateTime<chrono::Utc>>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Class {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
