use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::classes::requests::{ClassListQuery, ClassQueryParams};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

use super::ClassService;

pub async fn handle_list_classes(
    service: &ClassService,
    params: ClassQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let caller_role = RequireJWT::extract_user_role(request);
    let caller_id = RequireJWT::extract_user_id(request);

    // include_deleted 仅管理员生效，教师只看到自己的班级
    let is_admin = caller_role == Some(UserRole::Admin);
    let teacher_filter = match caller_role {
        Some(UserRole::Teacher) => caller_id,
        _ => None,
    };

    let query = ClassListQuery {
        page: Some(params.pagination.page),
        limit: Some(params.pagination.limit),
        teacher_id: teacher_filter,
        search: params.search,
        include_deleted: params.include_deleted && is_admin,
    };

    match storage.list_classes_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Class list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询班级列表失败: {e}"),
            )),
        ),
    }
}
