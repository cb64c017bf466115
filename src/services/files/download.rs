use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::FileService;
use crate::config::AppConfig;
use crate::errors::CampusError;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_download(
    service: &FileService,
    request: &HttpRequest,
    file_token: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let db_file = match storage.get_file_by_token(&file_token).await {
        Ok(Some(f)) => f,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "File not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("File query failed: {e}"),
                )),
            );
        }
    };

    let config = AppConfig::get();
    let file_path = format!("{}/{}", config.upload.dir, db_file.stored_name);

    if !Path::new(&file_path).exists() {
        return Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::NotFound, "文件不存在")));
    }

    let mut file = match File::open(&file_path) {
        Ok(f) => f,
        Err(e) => {
            tracing::error!("{:?}", CampusError::file_operation(format!("{e:?}")));
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "File open failed",
                )),
            );
        }
    };

    let mut buf = Vec::new();
    if file.read_to_end(&mut buf).is_err() {
        tracing::error!("{:?}", CampusError::file_operation("File read failed"));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "File read failed",
            )),
        );
    }

    // 头像在浏览器内联展示，退化为通用二进制流
    let content_type = if db_file.file_type.is_empty() {
        "application/octet-stream".to_string()
    } else {
        db_file.file_type.clone()
    };

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, content_type))
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}\"", db_file.original_name),
        ))
        .body(buf))
}
