use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::exams::requests::UpdateExamRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_date;

use super::ExamService;

pub async fn handle_update_exam(
    service: &ExamService,
    exam_id: i64,
    mut update_request: UpdateExamRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref date) = update_request.exam_date {
        match validate_date(date) {
            Ok(normalized) => update_request.exam_date = Some(normalized),
            Err(msg) => {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
            }
        }
    }

    if let Some(max_marks) = update_request.max_marks
        && max_marks <= 0.0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "满分必须大于 0",
        )));
    }

    match storage.update_exam(exam_id, update_request).await {
        Ok(Some(exam)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            exam,
            "考试更新成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExamNotFound,
            "考试不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新考试失败: {e}"),
            )),
        ),
    }
}
