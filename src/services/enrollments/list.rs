use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::enrollments::requests::EnrollmentQueryParams;
use crate::models::{ApiResponse, ErrorCode};

use super::EnrollmentService;

pub async fn handle_list_by_class(
    service: &EnrollmentService,
    class_id: i64,
    params: EnrollmentQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let (page, limit) = params.pagination.normalized();

    match storage.list_enrollments_by_class(class_id, page, limit).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Enrollment list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询班级名册失败: {e}"),
            )),
        ),
    }
}
