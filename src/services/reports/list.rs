use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::reports::requests::ReportQueryParams;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

use super::ReportService;

pub async fn handle_list_reports(
    service: &ReportService,
    mut params: ReportQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 学生只能查询自己的报告
    if RequireJWT::extract_user_role(request) == Some(UserRole::Student) {
        match RequireJWT::extract_user_id(request) {
            Some(id) => params.student_id = Some(id),
            None => {
                return Ok(HttpResponse::Unauthorized()
                    .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
            }
        }
    }

    match storage.list_reports(params).await {
        Ok(reports) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            reports,
            "Report list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询成绩报告失败: {e}"),
            )),
        ),
    }
}
