use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::SubjectService;

pub async fn handle_delete_subject(
    service: &SubjectService,
    subject_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_subject(subject_id).await {
        Ok(true) => {
            tracing::info!("Subject {} deleted", subject_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("科目删除成功")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "科目不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除科目失败: {e}"),
            )),
        ),
    }
}
