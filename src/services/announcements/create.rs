use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::announcements::requests::CreateAnnouncementRequest;
use crate::models::notifications::requests::CreateNotificationRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

use super::AnnouncementService;

pub async fn handle_create_announcement(
    service: &AnnouncementService,
    create_request: CreateAnnouncementRequest,
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

    if create_request.title.trim().is_empty() || create_request.content.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "标题和内容不能为空",
        )));
    }

    match create_request.class_id {
        // 全校公告仅管理员
        None => {
            if caller.role != UserRole::Admin {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "只有管理员可以发布全校公告",
                )));
            }
        }
        // 班级公告：班级教师或管理员
        Some(class_id) => {
            let class = match storage.get_class_by_id(class_id).await {
                Ok(Some(class)) if !class.is_deleted() => class,
                Ok(_) => {
                    return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                        ErrorCode::ClassNotFound,
                        "班级不存在",
                    )));
                }
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("查询班级失败: {e}"),
                        ),
                    ));
                }
            };

            if caller.role != UserRole::Admin && class.teacher_id != caller.id {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "只有班级教师或管理员可以发布班级公告",
                )));
            }
        }
    }

    let announcement = match storage.create_announcement(caller.id, create_request).await {
        Ok(announcement) => announcement,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("发布公告失败: {e}"),
                )),
            );
        }
    };

    // 班级公告向在册学生扇出通知，失败只记录不回滚公告
    if let Some(class_id) = announcement.class_id {
        match storage.list_enrolled_student_ids(class_id).await {
            Ok(student_ids) => {
                let notifications: Vec<CreateNotificationRequest> = student_ids
                    .into_iter()
                    .map(|student_id| CreateNotificationRequest {
                        user_id: student_id,
                        notification_type: "announcement".to_string(),
                        title: announcement.title.clone(),
                        content: announcement.content.clone(),
                        reference_type: Some("announcement".to_string()),
                        reference_id: Some(announcement.id),
                    })
                    .collect();

                match storage.create_notifications(notifications).await {
                    Ok(count) => {
                        tracing::info!(
                            "Announcement {} fanned out to {} students",
                            announcement.id,
                            count
                        );
                    }
                    Err(e) => {
                        tracing::error!(
                            "Notification fan-out failed for announcement {}: {}",
                            announcement.id,
                            e
                        );
                    }
                }
            }
            Err(e) => {
                tracing::error!(
                    "Failed to list enrolled students for class {}: {}",
                    class_id,
                    e
                );
            }
        }
    }

    Ok(HttpResponse::Created().json(ApiResponse::success(announcement, "公告发布成功")))
}
