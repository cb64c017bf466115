//! 路径参数安全提取器
//!
//! 将路径段解析失败统一转换为 JSON 格式的 400 响应，
//! 避免 actix 默认的纯文本错误页。

use actix_web::{
    FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError,
};
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(message: &str) -> actix_web::Error {
    let body = ApiResponse::error_empty(ErrorCode::BadRequest, message);
    InternalError::from_response(
        message.to_string(),
        HttpResponse::BadRequest().json(body),
    )
    .into()
}

/// 从路径中提取正整数 ID
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = req
            .match_info()
            .iter()
            .last()
            .map(|(_, value)| value)
            .ok_or_else(|| bad_request("Missing path parameter"))
            .and_then(|raw| {
                raw.parse::<i64>()
                    .map_err(|_| bad_request("Path parameter must be an integer"))
            })
            .and_then(|id| {
                if id > 0 {
                    Ok(SafeIDI64(id))
                } else {
                    Err(bad_request("Path parameter must be positive"))
                }
            });
        ready(result)
    }
}

/// 从路径中提取文件下载令牌（UUID 格式）
pub struct SafeDownloadToken(pub String);

impl FromRequest for SafeDownloadToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = req
            .match_info()
            .iter()
            .last()
            .map(|(_, value)| value.to_string())
            .ok_or_else(|| bad_request("Missing download token"))
            .and_then(|token| {
                let valid = !token.is_empty()
                    && token.len() <= 64
                    && token
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-');
                if valid {
                    Ok(SafeDownloadToken(token))
                } else {
                    Err(bad_request("Invalid download token"))
                }
            });
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_safe_id_takes_last_path_segment() {
        let req = TestRequest::default()
            .param("class_id", "42")
            .to_http_request();
        let id = SafeIDI64::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert_eq!(id.0, 42);
    }

    #[actix_web::test]
    async fn test_safe_id_rejects_bad_input() {
        let req = TestRequest::default()
            .param("class_id", "abc")
            .to_http_request();
        assert!(
            SafeIDI64::from_request(&req, &mut Payload::None)
                .await
                .is_err()
        );

        let req = TestRequest::default()
            .param("class_id", "0")
            .to_http_request();
        assert!(
            SafeIDI64::from_request(&req, &mut Payload::None)
                .await
                .is_err()
        );
    }

    #[actix_web::test]
    async fn test_download_token_charset() {
        let req = TestRequest::default()
            .param("file_token", "0d9ab41c-7f70-4b80-a6b1-2c1f43aa2917")
            .to_http_request();
        let token = SafeDownloadToken::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert_eq!(token.0, "0d9ab41c-7f70-4b80-a6b1-2c1f43aa2917");

        let req = TestRequest::default()
            .param("file_token", "../etc/passwd")
            .to_http_request();
        assert!(
            SafeDownloadToken::from_request(&req, &mut Payload::None)
                .await
                .is_err()
        );
    }
}
