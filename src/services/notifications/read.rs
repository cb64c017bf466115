use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

use super::NotificationService;

pub async fn handle_mark_read(
    service: &NotificationService,
    notification_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    match storage.mark_notification_read(user_id, notification_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("通知已读"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotificationNotFound,
            "通知不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("标记通知已读失败: {e}"),
            )),
        ),
    }
}

pub async fn handle_mark_all_read(
    service: &NotificationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    match storage.mark_all_notifications_read(user_id).await {
        Ok(count) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            count,
            "All notifications marked as read",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("批量标记已读失败: {e}"),
            )),
        ),
    }
}

pub async fn handle_delete_notification(
    service: &NotificationService,
    notification_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    match storage.delete_notification(user_id, notification_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("通知删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotificationNotFound,
            "通知不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除通知失败: {e}"),
            )),
        ),
    }
}
