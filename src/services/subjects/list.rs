use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::subjects::requests::SubjectQueryParams;
use crate::models::{ApiResponse, ErrorCode};

use super::SubjectService;

pub async fn handle_list_subjects(
    service: &SubjectService,
    params: SubjectQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_subjects(params).await {
        Ok(subjects) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            subjects,
            "Subject list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询科目列表失败: {e}"),
            )),
        ),
    }
}

pub async fn handle_get_subject(
    service: &SubjectService,
    subject_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_subject_by_id(subject_id).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            subject,
            "Subject retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "科目不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询科目失败: {e}"),
            )),
        ),
    }
}
