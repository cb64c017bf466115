use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::classes::requests::UpdateClassRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

use super::ClassService;

pub async fn handle_update_class(
    service: &ClassService,
    class_id: i64,
    update_request: UpdateClassRequest,
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

    // 管理员或该班教师可修改
    let caller_role = RequireJWT::extract_user_role(request);
    let caller_id = RequireJWT::extract_user_id(request);
    let is_admin = caller_role == Some(UserRole::Admin);
    if !is_admin && caller_id != Some(class.teacher_id) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::ClassPermissionDenied,
            "没有权限修改该班级",
        )));
    }

    // 换教师只有管理员可以做
    if update_request.teacher_id.is_some() && !is_admin {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::ClassPermissionDenied,
            "只有管理员可以更换班级教师",
        )));
    }

    match storage.update_class(class_id, update_request).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            class,
            "班级更新成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "班级不存在",
        ))),
        Err(e) if e.is_unique_violation() => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ClassAlreadyExists,
                "班级名称已存在",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新班级失败: {e}"),
            )),
        ),
    }
}
