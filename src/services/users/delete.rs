use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

use super::UserService;

pub async fn handle_delete_user(
    service: &UserService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 不允许删除当前登录账号
    if let Some(current_id) = RequireJWT::extract_user_id(request)
        && current_id == user_id
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::CanNotDeleteCurrentUser,
            "不能删除当前登录的账号",
        )));
    }

    match storage.delete_user(user_id).await {
        Ok(true) => {
            tracing::info!("User {} deleted", user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("用户删除成功")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "用户不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UserDeleteFailed,
                format!("删除用户失败: {e}"),
            )),
        ),
    }
}
