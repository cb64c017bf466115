use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::EnrollmentService;

pub async fn handle_delete_enrollment(
    service: &EnrollmentService,
    enrollment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_enrollment(enrollment_id).await {
        Ok(true) => {
            tracing::info!("Enrollment {} removed", enrollment_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("已移出班级")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentNotFound,
            "注册记录不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("移除注册失败: {e}"),
            )),
        ),
    }
}
