use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::subjects::requests::UpdateSubjectRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::SubjectService;

pub async fn handle_update_subject(
    service: &SubjectService,
    subject_id: i64,
    update_request: UpdateSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_subject(subject_id, update_request).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            subject,
            "科目更新成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "科目不存在",
        ))),
        Err(e) if e.is_unique_violation() => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::SubjectAlreadyExists,
                "该班级下已有同名科目",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新科目失败: {e}"),
            )),
        ),
    }
}
