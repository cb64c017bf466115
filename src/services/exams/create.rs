use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::exams::requests::CreateExamRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_date;

use super::ExamService;

pub async fn handle_create_exam(
    service: &ExamService,
    mut create_request: CreateExamRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match validate_date(&create_request.exam_date) {
        Ok(normalized) => create_request.exam_date = normalized,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
        }
    }

    if create_request.max_marks <= 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "满分必须大于 0",
        )));
    }

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

    match storage.create_exam(create_request).await {
        Ok(exam) => {
            tracing::info!("Exam {} created for class {}", exam.exam_name, exam.class_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(exam, "考试创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建考试失败: {e}"),
            )),
        ),
    }
}
