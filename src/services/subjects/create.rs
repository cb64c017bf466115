use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::subjects::requests::CreateSubjectRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

use super::SubjectService;

pub async fn handle_create_subject(
    service: &SubjectService,
    create_request: CreateSubjectRequest,
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

    // 任课教师必须是教师账号
    match storage.get_user_by_id(create_request.teacher_id).await {
        Ok(Some(user)) if user.role == UserRole::Teacher => {}
        Ok(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "指定的教师不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询教师失败: {e}"),
                )),
            );
        }
    }

    match storage.create_subject(create_request).await {
        Ok(subject) => {
            tracing::info!(
                "Subject {} created for class {}",
                subject.subject_name,
                subject.class_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(subject, "科目创建成功")))
        }
        Err(e) if e.is_unique_violation() => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::SubjectAlreadyExists,
                "该班级下已有同名科目",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建科目失败: {e}"),
            )),
        ),
    }
}
