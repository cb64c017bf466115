use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::enrollments::requests::{CreateEnrollmentRequest, EnrollmentQueryParams};
use crate::models::users::entities::UserRole;
use crate::services::EnrollmentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 EnrollmentService 实例
static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);

pub async fn create_enrollment(
    req: HttpRequest,
    enrollment_data: web::Json<CreateEnrollmentRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .create_enrollment(enrollment_data.into_inner(), &req)
        .await
}

pub async fn list_by_class(
    req: HttpRequest,
    class_id: SafeIDI64,
    query: web::Query<EnrollmentQueryParams>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .list_by_class(class_id.0, query.into_inner(), &req)
        .await
}

pub async fn delete_enrollment(
    req: HttpRequest,
    enrollment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .delete_enrollment(enrollment_id.0, &req)
        .await
}

// 配置路由
pub fn configure_enrollments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/enrollments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(
                    web::post()
                        .to(create_enrollment)
                        // 仅管理员可以为学生办理入班
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/class/{class_id}").route(
                    web::get()
                        .to(list_by_class)
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
            )
            .service(
                web::resource("/{enrollment_id}").route(
                    web::delete()
                        .to(delete_enrollment)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            ),
    );
}
