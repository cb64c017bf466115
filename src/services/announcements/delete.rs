use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

use super::AnnouncementService;

pub async fn handle_delete_announcement(
    service: &AnnouncementService,
    announcement_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let announcement = match storage.get_announcement_by_id(announcement_id).await {
        Ok(Some(announcement)) => announcement,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AnnouncementNotFound,
                "公告不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询公告失败: {e}"),
                )),
            );
        }
    };

    // 作者或管理员可删除
    let caller_role = RequireJWT::extract_user_role(request);
    let caller_id = RequireJWT::extract_user_id(request);
    if caller_role != Some(UserRole::Admin) && caller_id != Some(announcement.author_id) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只有作者或管理员可以删除公告",
        )));
    }

    match storage.delete_announcement(announcement_id).await {
        Ok(true) => {
            tracing::info!("Announcement {} deleted", announcement_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("公告删除成功")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AnnouncementNotFound,
            "公告不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除公告失败: {e}"),
            )),
        ),
    }
}
