pub mod list;
pub mod summary;
pub mod upsert;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::{
    AttendanceQueryParams, BulkAttendanceRequest, UpsertAttendanceRequest,
};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 单条考勤录入，班级教师或管理员
    pub async fn upsert_attendance(
        &self,
        upsert_request: UpsertAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        upsert::handle_upsert_attendance(self, upsert_request, request).await
    }

    // 整班批量录入，同一天逐条覆盖写入
    pub async fn bulk_upsert(
        &self,
        bulk_request: BulkAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        upsert::handle_bulk_upsert(self, bulk_request, request).await
    }

    pub async fn list_attendance(
        &self,
        params: AttendanceQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_attendance(self, params, request).await
    }

    // 单个学生的出勤汇总
    pub async fn attendance_summary(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        summary::handle_attendance_summary(self, student_id, request).await
    }
}
