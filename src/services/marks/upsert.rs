use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::marks::requests::UpsertMarkRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

use super::MarkService;

pub async fn handle_upsert_mark(
    service: &MarkService,
    upsert_request: UpsertMarkRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let caller = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 科目必须存在，且只有任课教师或管理员能录成绩
    let subject = match storage.get_subject_by_id(upsert_request.subject_id).await {
        Ok(Some(subject)) => subject,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                "科目不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询科目失败: {e}"),
                )),
            );
        }
    };

    if caller.role != UserRole::Admin && subject.teacher_id != caller.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只有任课教师或管理员可以录入成绩",
        )));
    }

    // 分数必须落在 [0, 满分] 区间
    let exam = match storage.get_exam_by_id(upsert_request.exam_id).await {
        Ok(Some(exam)) => exam,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ExamNotFound,
                "考试不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询考试失败: {e}"),
                )),
            );
        }
    };

    if upsert_request.score < 0.0 || upsert_request.score > exam.max_marks {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MarkOutOfRange,
            format!("分数必须在 0 到 {} 之间", exam.max_marks),
        )));
    }

    match storage.upsert_mark(upsert_request).await {
        Ok(mark) => {
            tracing::info!(
                "Mark saved for student {} exam {} subject {}",
                mark.student_id,
                mark.exam_id,
                mark.subject_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(mark, "成绩保存成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::MarkSaveFailed,
                format!("保存成绩失败: {e}"),
            )),
        ),
    }
}
