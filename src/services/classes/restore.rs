use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::ClassService;

// 路由层已限定管理员
pub async fn handle_restore_class(
    service: &ClassService,
    class_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.restore_class(class_id).await {
        Ok(true) => {
            tracing::info!("Class {} restored", class_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("班级已恢复")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "班级不存在或未被删除",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("恢复班级失败: {e}"),
            )),
        ),
    }
}
