use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::announcements::requests::AnnouncementQueryParams;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

use super::AnnouncementService;

pub async fn handle_list_announcements(
    service: &AnnouncementService,
    params: AnnouncementQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let caller = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 可见班级集合：学生取在册班级，教师取自己负责的班级，管理员全部
    let class_ids: Vec<i64> = match caller.role {
        UserRole::Student => match storage.list_student_class_ids(caller.id).await {
            Ok(ids) => ids,
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询在册班级失败: {e}"),
                    )),
                );
            }
        },
        UserRole::Teacher | UserRole::Admin => match storage.list_all_classes().await {
            Ok(classes) => classes
                .into_iter()
                .filter(|c| caller.role == UserRole::Admin || c.teacher_id == caller.id)
                .map(|c| c.id)
                .collect(),
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询班级失败: {e}"),
                    )),
                );
            }
        },
    };

    // 指定班级过滤时仍受可见范围约束
    let class_ids = match params.class_id {
        Some(id) if class_ids.contains(&id) => vec![id],
        Some(_) => Vec::new(),
        None => class_ids,
    };

    let (page, limit) = params.pagination.normalized();

    match storage
        .list_announcements_visible(&class_ids, page, limit)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Announcement list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询公告列表失败: {e}"),
            )),
        ),
    }
}
