use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::{
    AttendanceQueryParams, BulkAttendanceRequest, UpsertAttendanceRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AttendanceService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn upsert_attendance(
    req: HttpRequest,
    attendance_data: web::Json<UpsertAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .upsert_attendance(attendance_data.into_inner(), &req)
        .await
}

pub async fn bulk_upsert(
    req: HttpRequest,
    bulk_data: web::Json<BulkAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .bulk_upsert(bulk_data.into_inner(), &req)
        .await
}

pub async fn list_attendance(
    req: HttpRequest,
    query: web::Query<AttendanceQueryParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_attendance(query.into_inner(), &req)
        .await
}

pub async fn attendance_summary(
    req: HttpRequest,
    student_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .attendance_summary(student_id.0, &req)
        .await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_attendance))
                    .route(
                        web::put()
                            .to(upsert_attendance)
                            // 记录考勤需要教师或管理员权限，班级归属在服务层校验
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            )
            .service(
                web::resource("/bulk").route(
                    web::post()
                        .to(bulk_upsert)
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
            )
            .route(
                "/summary/{student_id}",
                web::get().to(attendance_summary),
            ),
    );
}
