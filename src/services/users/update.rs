use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::users::requests::UpdateUserRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple};

use super::UserService;

pub async fn handle_update_user(
    service: &UserService,
    user_id: i64,
    mut update_request: UpdateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref email) = update_request.email {
        if let Err(msg) = validate_email(email) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
        }

        // 邮箱被其他用户占用时拒绝
        if let Ok(Some(existing)) = storage.get_user_by_email(email).await
            && existing.id != user_id
        {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserEmailAlreadyExists,
                "该邮箱已被使用",
            )));
        }
    }

    if let Some(ref password) = update_request.password {
        if let Err(msg) = validate_password_simple(password) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
        }

        match hash_password(password) {
            Ok(hash) => update_request.password = Some(hash),
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("密码哈希失败: {e}"),
                    )),
                );
            }
        }
    }

    match storage.update_user(user_id, update_request).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            user,
            "用户信息更新成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "用户不存在",
        ))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserUpdateFailed,
            format!("更新用户信息失败: {e}"),
        ))),
    }
}
