use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

use super::AttendanceService;

pub async fn handle_attendance_summary(
    service: &AttendanceService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 学生只能查看自己的汇总
    if RequireJWT::extract_user_role(request) == Some(UserRole::Student)
        && RequireJWT::extract_user_id(request) != Some(student_id)
    {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只能查看自己的出勤汇总",
        )));
    }

    match storage.attendance_summary(student_id).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            summary,
            "Attendance summary retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询出勤汇总失败: {e}"),
            )),
        ),
    }
}
