use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::reports::requests::{GenerateReportsRequest, ReportQueryParams};
use crate::models::users::entities::UserRole;
use crate::services::ReportService;

// 懒加载的全局 ReportService 实例
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

pub async fn generate_reports(
    req: HttpRequest,
    generate_data: web::Json<GenerateReportsRequest>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .generate_reports(generate_data.into_inner(), &req)
        .await
}

pub async fn list_reports(
    req: HttpRequest,
    query: web::Query<ReportQueryParams>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.list_reports(query.into_inner(), &req).await
}

// 配置路由
pub fn configure_reports_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reports")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_reports))
            .service(
                web::resource("/generate").route(
                    web::post()
                        .to(generate_reports)
                        .wrap(RateLimit::report_generation())
                        // 生成报告需要教师或管理员权限
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
            ),
    );
}
