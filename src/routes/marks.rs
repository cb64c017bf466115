use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::marks::requests::{MarkQueryParams, UpsertMarkRequest};
use crate::models::users::entities::UserRole;
use crate::services::MarkService;

// 懒加载的全局 MarkService 实例
static MARK_SERVICE: Lazy<MarkService> = Lazy::new(MarkService::new_lazy);

pub async fn upsert_mark(
    req: HttpRequest,
    mark_data: web::Json<UpsertMarkRequest>,
) -> ActixResult<HttpResponse> {
    MARK_SERVICE.upsert_mark(mark_data.into_inner(), &req).await
}

pub async fn list_marks(
    req: HttpRequest,
    query: web::Query<MarkQueryParams>,
) -> ActixResult<HttpResponse> {
    MARK_SERVICE.list_marks(query.into_inner(), &req).await
}

// 配置路由
pub fn configure_marks_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/marks")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_marks))
                    .route(
                        web::put()
                            .to(upsert_mark)
                            // 录入成绩需要教师或管理员权限，科目归属在服务层校验
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            ),
    );
}
