use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::exams::requests::{CreateExamRequest, ExamQueryParams, UpdateExamRequest};
use crate::models::users::entities::UserRole;
use crate::services::ExamService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ExamService 实例
static EXAM_SERVICE: Lazy<ExamService> = Lazy::new(ExamService::new_lazy);

pub async fn create_exam(
    req: HttpRequest,
    exam_data: web::Json<CreateExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.create_exam(exam_data.into_inner(), &req).await
}

pub async fn list_exams(
    req: HttpRequest,
    query: web::Query<ExamQueryParams>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_exams(query.into_inner(), &req).await
}

pub async fn get_exam(req: HttpRequest, exam_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.get_exam(exam_id.0, &req).await
}

pub async fn update_exam(
    req: HttpRequest,
    exam_id: SafeIDI64,
    update_data: web::Json<UpdateExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .update_exam(exam_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_exam(req: HttpRequest, exam_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.delete_exam(exam_id.0, &req).await
}

// 配置路由
pub fn configure_exams_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/exams")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .service(
                        web::resource("")
                            .route(web::get().to(list_exams))
                            .route(web::post().to(create_exam)),
                    )
                    .service(
                        web::resource("/{exam_id}")
                            .route(web::get().to(get_exam))
                            .route(web::put().to(update_exam))
                            .route(web::delete().to(delete_exam)),
                    ),
            ),
    );
}
