use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::middlewares::RequireJWT;
use crate::models::attendance::requests::{
    BulkAttendanceRequest, UpsertAttendanceRequest,
};
use crate::models::users::entities::{User, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::validate::validate_date;

use super::AttendanceService;

// 班级存在性 + 录入权限（班级教师或管理员）检查
async fn check_class_and_permission(
    storage: &Arc<dyn Storage>,
    class_id: i64,
    caller: &User,
) -> Result<(), HttpResponse> {
    let class = match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) if !class.is_deleted() => class,
        Ok(_) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "班级不存在",
            )));
        }
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询班级失败: {e}"),
                )),
            );
        }
    };

    if caller.role != UserRole::Admin && class.teacher_id != caller.id {
        return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只有班级教师或管理员可以录入考勤",
        )));
    }

    Ok(())
}

pub async fn handle_upsert_attendance(
    service: &AttendanceService,
    mut upsert_request: UpsertAttendanceRequest,
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

    match validate_date(&upsert_request.date) {
        Ok(normalized) => upsert_request.date = normalized,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::AttendanceDateInvalid, msg)));
        }
    }

    if let Err(response) =
        check_class_and_permission(&storage, upsert_request.class_id, &caller).await
    {
        return Ok(response);
    }

    match storage.upsert_attendance(upsert_request).await {
        Ok(record) => Ok(HttpResponse::Ok().json(ApiResponse::success(record, "考勤保存成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::AttendanceSaveFailed,
                format!("保存考勤失败: {e}"),
            )),
        ),
    }
}

pub async fn handle_bulk_upsert(
    service: &AttendanceService,
    bulk_request: BulkAttendanceRequest,
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

    let date = match validate_date(&bulk_request.date) {
        Ok(normalized) => normalized,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::AttendanceDateInvalid, msg)));
        }
    };

    if let Err(response) =
        check_class_and_permission(&storage, bulk_request.class_id, &caller).await
    {
        return Ok(response);
    }

    // 逐条覆盖写入，单条失败立即中断
    let mut saved = 0u64;
    for entry in bulk_request.entries {
        let upsert_request = UpsertAttendanceRequest {
            class_id: bulk_request.class_id,
            student_id: entry.student_id,
            date: date.clone(),
            status: entry.status,
        };

        if let Err(e) = storage.upsert_attendance(upsert_request).await {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AttendanceSaveFailed,
                    format!("批量保存考勤失败（已保存 {saved} 条）: {e}"),
                )),
            );
        }
        saved += 1;
    }

    tracing::info!(
        "Bulk attendance saved: class {} date {} ({} records)",
        bulk_request.class_id,
        date,
        saved
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(saved, "考勤批量保存成功")))
}
