//! JSON / Query 参数解析错误处理器
//!
//! 注册到 actix 的 JsonConfig / QueryConfig，
//! 保证参数错误也返回统一的响应包格式。

use actix_web::{HttpRequest, HttpResponse, error::InternalError};

use crate::models::{ApiResponse, ErrorCode};

pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let message = format!("Invalid JSON payload: {err}");
    let body = ApiResponse::error_empty(ErrorCode::BadRequest, &message);
    InternalError::from_response(message, HttpResponse::BadRequest().json(body)).into()
}

pub fn query_error_handler(
    err: actix_web::error::QueryPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let message = format!("Invalid query parameters: {err}");
    let body = ApiResponse::error_empty(ErrorCode::BadRequest, &message);
    InternalError::from_response(message, HttpResponse::BadRequest().json(body)).into()
}
