use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::models::analytics::responses::OverviewResponse;
use crate::models::users::entities::UserRole;

use super::AnalyticsService;

// 单项聚合失败降级为 0，不让整个总览接口失败
pub async fn handle_overview(
    service: &AnalyticsService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student_count = match storage.count_users_by_role(&UserRole::Student).await {
        Ok(count) => count as i64,
        Err(e) => {
            tracing::warn!("Student count aggregate failed: {}", e);
            0
        }
    };

    let teacher_count = match storage.count_users_by_role(&UserRole::Teacher).await {
        Ok(count) => count as i64,
        Err(e) => {
            tracing::warn!("Teacher count aggregate failed: {}", e);
            0
        }
    };

    let class_count = match storage.count_classes().await {
        Ok(count) => count as i64,
        Err(e) => {
            tracing::warn!("Class count aggregate failed: {}", e);
            0
        }
    };

    let subject_count = match storage.count_subjects().await {
        Ok(count) => count as i64,
        Err(e) => {
            tracing::warn!("Subject count aggregate failed: {}", e);
            0
        }
    };

    let attendance_rate = match storage.attendance_totals().await {
        Ok((total, present)) if total > 0 => {
            (present as f64 / total as f64 * 10000.0).round() / 100.0
        }
        Ok(_) => 0.0,
        Err(e) => {
            tracing::warn!("Attendance aggregate failed: {}", e);
            0.0
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        OverviewResponse {
            student_count,
            teacher_count,
            class_count,
            subject_count,
            attendance_rate,
        },
        "Overview retrieved successfully",
    )))
}
