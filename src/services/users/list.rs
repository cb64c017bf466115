use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::users::requests::UserQueryParams;
use crate::models::{ApiResponse, ErrorCode};

use super::UserService;

pub async fn handle_list_users(
    service: &UserService,
    params: UserQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_users_with_pagination(params.into()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "User list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询用户列表失败: {e}"),
            )),
        ),
    }
}
