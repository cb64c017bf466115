use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::ExamService;

pub async fn handle_delete_exam(
    service: &ExamService,
    exam_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_exam(exam_id).await {
        Ok(true) => {
            tracing::info!("Exam {} deleted", exam_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("考试删除成功")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExamNotFound,
            "考试不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除考试失败: {e}"),
            )),
        ),
    }
}
