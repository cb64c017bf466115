use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::profiles::requests::{
    SubmitStudentProfileRequest, SubmitTeacherProfileRequest,
};
use crate::models::users::entities::{User, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_date, validate_phone};

use super::ProfileService;

// 角色校验 + 重复提交检查，两类档案共用
fn check_submitter(request: &HttpRequest, required_role: UserRole) -> Result<User, HttpResponse> {
    let user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Err(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    if user.role != required_role {
        return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "当前角色不能提交该类档案",
        )));
    }

    if user.profile_complete {
        return Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::ProfileAlreadySubmitted,
            "档案已提交",
        )));
    }

    Ok(user)
}

pub async fn handle_submit_student(
    service: &ProfileService,
    mut submit_request: SubmitStudentProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match check_submitter(request, UserRole::Student) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    if let Err(msg) = validate_phone(&submit_request.guardian_phone) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    if let Some(ref date) = submit_request.date_of_birth {
        match validate_date(date) {
            Ok(normalized) => submit_request.date_of_birth = Some(normalized),
            Err(msg) => {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
            }
        }
    }

    match storage.submit_student_profile(user.id, submit_request).await {
        Ok(profile) => {
            tracing::info!("Student profile submitted for user {}", user.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(profile, "学生档案提交成功")))
        }
        Err(e) if e.is_unique_violation() => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::Conflict,
                "学号已被占用",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("提交学生档案失败: {e}"),
            )),
        ),
    }
}

pub async fn handle_submit_teacher(
    service: &ProfileService,
    submit_request: SubmitTeacherProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match check_submitter(request, UserRole::Teacher) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    if let Some(ref phone) = submit_request.phone
        && let Err(msg) = validate_phone(phone)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    match storage.submit_teacher_profile(user.id, submit_request).await {
        Ok(profile) => {
            tracing::info!("Teacher profile submitted for user {}", user.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(profile, "教师档案提交成功")))
        }
        Err(e) if e.is_unique_violation() => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::Conflict,
                "工号已被占用",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("提交教师档案失败: {e}"),
            )),
        ),
    }
}
