use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

use super::ClassService;

pub async fn handle_delete_class(
    service: &ClassService,
    class_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let class = match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => class,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "班级不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询班级失败: {e}"),
                )),
            );
        }
    };

    let caller_role = RequireJWT::extract_user_role(request);
    let caller_id = RequireJWT::extract_user_id(request);
    if caller_role != Some(UserRole::Admin) && caller_id != Some(class.teacher_id) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::ClassPermissionDenied,
            "没有权限删除该班级",
        )));
    }

    match storage.soft_delete_class(class_id).await {
        Ok(true) => {
            tracing::info!("Class {} soft-deleted", class_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("班级已删除")))
        }
        // 已处于删除状态
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassDeleted,
            "班级已被删除",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ClassDeleteFailed,
                format!("删除班级失败: {e}"),
            )),
        ),
    }
}
