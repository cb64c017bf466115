use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::profiles::responses::ProfileResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

use super::ProfileService;

pub async fn handle_get_profile(
    service: &ProfileService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 按角色附加专属档案，管理员只有账号信息
    let (student_profile, teacher_profile) = match user.role {
        UserRole::Student => match storage.get_student_profile(user.id).await {
            Ok(profile) => (profile, None),
            Err(e) => {
                return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学生档案失败: {e}"),
                )));
            }
        },
        UserRole::Teacher => match storage.get_teacher_profile(user.id).await {
            Ok(profile) => (None, profile),
            Err(e) => {
                return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询教师档案失败: {e}"),
                )));
            }
        },
        UserRole::Admin => (None, None),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ProfileResponse {
            user,
            student_profile,
            teacher_profile,
        },
        "Profile retrieved successfully",
    )))
}
