use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::enrollments::requests::CreateEnrollmentRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

use super::EnrollmentService;

pub async fn handle_create_enrollment(
    service: &EnrollmentService,
    create_request: CreateEnrollmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 班级必须存在且未删除
    match storage.get_class_by_id(create_request.class_id).await {
        Ok(Some(class)) if !class.is_deleted() => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "班级不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询班级失败: {e}"),
                )),
            );
        }
    }

    // 被注册的用户必须是学生
    match storage.get_user_by_id(create_request.student_id).await {
        Ok(Some(user)) if user.role == UserRole::Student => {}
        Ok(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "指定的学生不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学生失败: {e}"),
                )),
            );
        }
    }

    match storage.create_enrollment(create_request).await {
        Ok(enrollment) => {
            tracing::info!(
                "Student {} enrolled into class {}",
                enrollment.student_id,
                enrollment.class_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(enrollment, "注册成功")))
        }
        Err(e) if e.is_unique_violation() => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::EnrollmentAlreadyExists,
                "该学生已在此班级注册",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::EnrollmentFailed,
                format!("注册失败: {e}"),
            )),
        ),
    }
}
