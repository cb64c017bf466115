use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::common::pagination::PaginationQuery;
use crate::models::users::entities::UserRole;
use crate::services::AnalyticsService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AnalyticsService 实例
static ANALYTICS_SERVICE: Lazy<AnalyticsService> = Lazy::new(AnalyticsService::new_lazy);

pub async fn overview(request: HttpRequest) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE.overview(&request).await
}

pub async fn academics(request: HttpRequest) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE.academics(&request).await
}

pub async fn roster(
    req: HttpRequest,
    class_id: SafeIDI64,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE
        .roster(class_id.0, query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_analytics_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/analytics")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("/roster")
                    // 教师只能查看自己班级的名册，归属在服务层校验
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("/{class_id}", web::get().to(roster)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("/overview", web::get().to(overview))
                    .route("/academics", web::get().to(academics)),
            ),
    );
}
