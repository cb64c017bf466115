use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::users::requests::CreateUserRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_username};

use super::UserService;

// 管理员创建用户，可直接指定角色与展示名
pub async fn handle_create_user(
    service: &UserService,
    mut create_request: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_username(&create_request.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    if let Err(msg) = validate_email(&create_request.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    if let Err(msg) = validate_password_simple(&create_request.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
    }

    create_request.password = match hash_password(&create_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserCreationFailed,
                    format!("密码哈希失败: {e}"),
                )),
            );
        }
    };

    match storage.create_user(create_request).await {
        Ok(user) => {
            tracing::info!("User {} created by admin", user.username);
            Ok(HttpResponse::Created().json(ApiResponse::success(user, "用户创建成功")))
        }
        Err(e) if e.is_unique_violation() => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserAlreadyExists,
                "用户名或邮箱已存在",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UserCreationFailed,
                format!("创建用户失败: {e}"),
            )),
        ),
    }
}
