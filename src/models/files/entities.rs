use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 已上传文件（头像等），通过 download_token 下载
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct File {
    pub id: i64,
    pub download_token: String,
    pub original_name: String,
    #[serde(skip_serializing)]
    #[ts(skip)]
    pub stored_name: String,
    pub file_size: i64,
    pub file_type: String,
    pub uploaded_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
