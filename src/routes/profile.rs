use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::auth::requests::UpdateProfileRequest;
use crate::models::profiles::requests::{SubmitStudentProfileRequest, SubmitTeacherProfileRequest};
use crate::services::ProfileService;

// 懒加载的全局 ProfileService 实例
static PROFILE_SERVICE: Lazy<ProfileService> = Lazy::new(ProfileService::new_lazy);

pub async fn get_profile(request: HttpRequest) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE.get_profile(&request).await
}

pub async fn update_profile(
    req: HttpRequest,
    update_data: web::Json<UpdateProfileRequest>,
) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE
        .update_profile(update_data.into_inner(), &req)
        .await
}

pub async fn submit_student_profile(
    req: HttpRequest,
    submit_data: web::Json<SubmitStudentProfileRequest>,
) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE
        .submit_student_profile(submit_data.into_inner(), &req)
        .await
}

pub async fn submit_teacher_profile(
    req: HttpRequest,
    submit_data: web::Json<SubmitTeacherProfileRequest>,
) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE
        .submit_teacher_profile(submit_data.into_inner(), &req)
        .await
}

pub async fn upload_photo(
    req: HttpRequest,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE.upload_photo(&req, payload).await
}

// 配置路由
pub fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/profile")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(get_profile))
                    .route(web::put().to(update_profile)),
            )
            .route("/student", web::post().to(submit_student_profile))
            .route("/teacher", web::post().to(submit_teacher_profile))
            .route(
                "/photo",
                web::post().to(upload_photo).wrap(RateLimit::photo_upload()),
            ),
    );
}
