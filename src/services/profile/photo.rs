use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs;
use std::io::Write;
use std::{fs::File, path::Path};
use uuid::Uuid;

use super::ProfileService;
use crate::config::AppConfig;
use crate::errors::CampusError;
use crate::middlewares::RequireJWT;
use crate::models::ErrorCode;
use crate::models::{ApiResponse, files::responses::FileUploadResponse};
use crate::utils::validate_magic_bytes;

/// 头像照片上传
///
/// multipart 中只接受一个 `file` 字段，扩展名白名单 + 首块魔术字节双重校验，
/// 入库后把 avatar_url 指向下载地址。
pub async fn handle_upload_photo(
    service: &ProfileService,
    req: &HttpRequest,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let upload_dir = &config.upload.dir;
    let max_size = config.upload.max_size;
    let allowed_types = &config.upload.allowed_types;

    let user_id = match RequireJWT::extract_user_id(req) {
        Some(id) => id,
        None => {
            return Ok(
                HttpResponse::Unauthorized().json(ApiResponse::<()>::error_empty(
                    ErrorCode::Unauthorized,
                    "用户未登录",
                )),
            );
        }
    };

    // 确保上传目录存在
    if !Path::new(upload_dir).exists()
        && let Err(e) = fs::create_dir_all(upload_dir)
    {
        tracing::error!("{}", CampusError::file_operation(format!("{e}")));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                ErrorCode::FileUploadFailed,
                "创建上传目录失败",
            )),
        );
    }

    let mut original_name = String::new();
    let mut file_size: i64 = 0;
    let mut file_uploaded = false;
    let mut file_type = String::new();
    let mut stored_name = String::new();

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name == "file" {
            if file_uploaded {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::MultifileUploadNotAllowed,
                    "Only one file can be uploaded at a time",
                )));
            }
            file_uploaded = true;

            original_name = content_disposition
                .and_then(|cd| cd.get_filename())
                .map(|s| s.to_string())
                .unwrap_or_default();

            // 扩展名白名单，仅图片
            let extension = Path::new(&original_name)
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| format!(".{}", ext.to_lowercase()))
                .unwrap_or_default();

            if !allowed_types.iter().any(|t| t.to_lowercase() == extension) {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::FileTypeNotAllowed,
                    "仅支持图片文件",
                )));
            }

            // MIME 类型仅用于存储记录，不作为校验依据
            file_type = field
                .content_type()
                .map(|ct| ct.to_string())
                .unwrap_or_default();

            stored_name = format!("{}-{}.bin", chrono::Utc::now().timestamp(), Uuid::new_v4());
            let file_path = format!("{upload_dir}/{stored_name}");
            let mut f = match File::create(&file_path) {
                Ok(file) => file,
                Err(e) => {
                    tracing::error!("{}", CampusError::file_operation(format!("{e}")));
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::<()>::error_empty(ErrorCode::FileUploadFailed, "文件创建失败"),
                    ));
                }
            };

            let mut total_size: usize = 0;
            let mut first_chunk = true;
            while let Some(chunk) = field.next().await {
                // 流中断时清掉写了一半的文件再上抛
                let data = match chunk {
                    Ok(data) => data,
                    Err(e) => {
                        let _ = fs::remove_file(&file_path);
                        return Err(e.into());
                    }
                };

                // 第一个 chunk 时验证魔术字节
                if first_chunk {
                    first_chunk = false;
                    if !validate_magic_bytes(&data, &extension) {
                        let _ = fs::remove_file(&file_path);
                        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::FileTypeNotAllowed,
                            "文件内容与扩展名不匹配",
                        )));
                    }
                }

                total_size += data.len();
                if total_size > max_size {
                    let _ = fs::remove_file(&file_path);
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::FileSizeExceeded,
                        "File size exceeds the limit",
                    )));
                }
                if let Err(e) = f.write_all(&data) {
                    let _ = fs::remove_file(&file_path);
                    return Err(e.into());
                }
            }
            file_size = total_size as i64;
        }
    }

    if !file_uploaded {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "No file found in upload payload",
        )));
    }

    let storage = service.get_storage(req);
    let download_token = Uuid::new_v4().to_string();

    let db_file = match storage
        .create_file(
            &download_token,
            &original_name,
            &stored_name,
            file_size,
            &file_type,
            user_id,
        )
        .await
    {
        Ok(file) => file,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::FileUploadFailed,
                    format!("Failed to save file record: {e}"),
                )),
            );
        }
    };

    // 更新头像地址
    let avatar_url = format!("/api/v1/files/{}", db_file.download_token);
    if let Err(e) = storage.set_avatar_url(user_id, &avatar_url).await {
        tracing::error!("Failed to update avatar url for user {}: {}", user_id, e);
    }

    let response = FileUploadResponse {
        download_token: db_file.download_token,
        file_name: db_file.original_name,
        size: db_file.file_size,
        content_type: db_file.file_type,
        created_at: db_file.created_at,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "头像上传成功")))
}
