use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::exams::requests::ExamQueryParams;
use crate::models::{ApiResponse, ErrorCode};

use super::ExamService;

pub async fn handle_list_exams(
    service: &ExamService,
    params: ExamQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_exams(params).await {
        Ok(exams) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            exams,
            "Exam list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询考试列表失败: {e}"),
            )),
        ),
    }
}

pub async fn handle_get_exam(
    service: &ExamService,
    exam_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_exam_by_id(exam_id).await {
        Ok(Some(exam)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            exam,
            "Exam retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExamNotFound,
            "考试不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询考试失败: {e}"),
            )),
        ),
    }
}
