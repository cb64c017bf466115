use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

use super::ClassService;

// 管理员建班必须指定教师，教师建班只能指定自己
pub async fn handle_create_class(
    service: &ClassService,
    create_request: CreateClassRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let caller = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let teacher_id = match caller.role {
        UserRole::Admin => match create_request.teacher_id {
            Some(id) => id,
            None => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "管理员创建班级必须指定教师",
                )));
            }
        },
        UserRole::Teacher => {
            if let Some(id) = create_request.teacher_id
                && id != caller.id
            {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::ClassPermissionDenied,
                    "教师只能创建自己负责的班级",
                )));
            }
            caller.id
        }
        UserRole::Student => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "学生不能创建班级",
            )));
        }
    };

    // 被指派的用户必须是教师
    match storage.get_user_by_id(teacher_id).await {
        Ok(Some(user)) if user.role == UserRole::Teacher => {}
        Ok(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "指定的教师不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询教师失败: {e}"),
                )),
            );
        }
    }

    match storage.create_class(teacher_id, create_request).await {
        Ok(class) => {
            tracing::info!("Class {} created by user {}", class.class_name, caller.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(class, "班级创建成功")))
        }
        Err(e) if e.is_unique_violation() => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ClassAlreadyExists,
                "班级名称已存在",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ClassCreationFailed,
                format!("创建班级失败: {e}"),
            )),
        ),
    }
}
