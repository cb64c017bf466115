use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::attendance::requests::AttendanceQueryParams;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

use super::AttendanceService;

pub async fn handle_list_attendance(
    service: &AttendanceService,
    mut params: AttendanceQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 学生只能查询自己的考勤
    if RequireJWT::extract_user_role(request) == Some(UserRole::Student) {
        match RequireJWT::extract_user_id(request) {
            Some(id) => params.student_id = Some(id),
            None => {
                return Ok(HttpResponse::Unauthorized()
                    .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
            }
        }
    }

    match storage.list_attendance(params).await {
        Ok(records) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            records,
            "Attendance list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询考勤失败: {e}"),
            )),
        ),
    }
}
