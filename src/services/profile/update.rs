use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::auth::requests::UpdateProfileRequest;
use crate::models::users::requests::UpdateUserRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::ProfileService;

pub async fn handle_update_profile(
    service: &ProfileService,
    update_data: UpdateProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 只允许改展示名和头像，角色/状态等字段无权修改
    let storage_update = UpdateUserRequest {
        email: None,
        password: None,
        role: None,
        status: None,
        display_name: update_data.display_name,
        avatar_url: update_data.avatar_url,
    };

    match storage.update_user(current_user.id, storage_update).await {
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
