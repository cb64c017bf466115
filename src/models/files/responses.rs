use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 上传成功响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct FileUploadResponse {
    pub download_token: String,
    pub file_name: String,
    pub size: i64,
    pub content_type: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
