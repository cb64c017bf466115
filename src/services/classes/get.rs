use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

use super::ClassService;

pub async fn handle_get_class(
    service: &ClassService,
    class_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => {
            // 已软删除的班级只对管理员可见
            if class.is_deleted() && RequireJWT::extract_user_role(request) != Some(UserRole::Admin)
            {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::ClassNotFound,
                    "班级不存在",
                )));
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                class,
                "Class retrieved successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "班级不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询班级失败: {e}"),
            )),
        ),
    }
}
