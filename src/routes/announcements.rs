use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::announcements::requests::{AnnouncementQueryParams, CreateAnnouncementRequest};
use crate::models::users::entities::UserRole;
use crate::services::AnnouncementService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AnnouncementService 实例
static ANNOUNCEMENT_SERVICE: Lazy<AnnouncementService> = Lazy::new(AnnouncementService::new_lazy);

pub async fn create_announcement(
    req: HttpRequest,
    announcement_data: web::Json<CreateAnnouncementRequest>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .create_announcement(announcement_data.into_inner(), &req)
        .await
}

pub async fn list_announcements(
    req: HttpRequest,
    query: web::Query<AnnouncementQueryParams>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .list_announcements(query.into_inner(), &req)
        .await
}

pub async fn delete_announcement(
    req: HttpRequest,
    announcement_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .delete_announcement(announcement_id.0, &req)
        .await
}

// 配置路由
pub fn configure_announcements_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/announcements")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_announcements))
                    .route(
                        web::post()
                            .to(create_announcement)
                            // 发布公告需要教师或管理员权限，范围在服务层校验
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            )
            .route(
                "/{announcement_id}",
                web::delete().to(delete_announcement),
            ),
    );
}
