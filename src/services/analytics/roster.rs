use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use crate::middlewares::RequireJWT;
use crate::models::analytics::responses::{RosterResponse, RosterStudent};
use crate::models::attendance::requests::AttendanceQueryParams;
use crate::models::common::pagination::PaginationQuery;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

use super::AnalyticsService;

/// 教师名册：当前页学生的出勤率与成绩均分
///
/// 名册分页查询之外只发两次批量查询（本班考勤、本页学生成绩），
/// 在内存里按学生归并，不对每个学生单独回查。
pub async fn handle_roster(
    service: &AnalyticsService,
    class_id: i64,
    pagination: PaginationQuery,
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

    let class = match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) if !class.is_deleted() => class,
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "班级不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询班级失败: {e}"),
                )),
            );
        }
    };

    if caller.role != UserRole::Admin && class.teacher_id != caller.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只能查看自己班级的名册",
        )));
    }

    let (page, limit) = pagination.normalized();
    let enrollments = match storage.list_enrollments_by_class(class_id, page, limit).await {
        Ok(response) => response,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询班级名册失败: {e}"),
                )),
            );
        }
    };

    let student_ids: Vec<i64> = enrollments
        .items
        .iter()
        .map(|entry| entry.enrollment.student_id)
        .collect();

    // 本班考勤，按学生归并为 (总数, 出勤数)
    let mut attendance_tallies: HashMap<i64, (i64, i64)> = HashMap::new();
    match storage
        .list_attendance(AttendanceQueryParams {
            class_id: Some(class_id),
            student_id: None,
            date: None,
        })
        .await
    {
        Ok(records) => {
            for record in records {
                let entry = attendance_tallies.entry(record.student_id).or_insert((0, 0));
                entry.0 += 1;
                if record.status.counts_as_present() {
                    entry.1 += 1;
                }
            }
        }
        Err(e) => {
            tracing::warn!("Roster attendance aggregate failed: {}", e);
        }
    }

    // 本页学生的全部成绩，按学生归并为 (总分, 条数)
    let mut mark_tallies: HashMap<i64, (f64, i64)> = HashMap::new();
    match storage.list_marks_by_students(&student_ids).await {
        Ok(marks) => {
            for mark in marks {
                let entry = mark_tallies.entry(mark.student_id).or_insert((0.0, 0));
                entry.0 += mark.score;
                entry.1 += 1;
            }
        }
        Err(e) => {
            tracing::warn!("Roster mark aggregate failed: {}", e);
        }
    }

    let items: Vec<RosterStudent> = enrollments
        .items
        .into_iter()
        .map(|entry| {
            let student_id = entry.enrollment.student_id;
            let attendance_rate = match attendance_tallies.get(&student_id) {
                Some((total, present)) if *total > 0 => {
                    (*present as f64 / *total as f64 * 10000.0).round() / 100.0
                }
                _ => 0.0,
            };
            let average_score = mark_tallies
                .get(&student_id)
                .map(|(sum, count)| (sum / *count as f64 * 100.0).round() / 100.0);

            RosterStudent {
                student_id,
                username: entry.username.unwrap_or_default(),
                display_name: entry.display_name,
                attendance_rate,
                average_score,
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        RosterResponse {
            class_id,
            items,
            pagination: enrollments.pagination,
        },
        "Roster retrieved successfully",
    )))
}
