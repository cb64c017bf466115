pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::enrollments::requests::{CreateEnrollmentRequest, EnrollmentQueryParams};
use crate::storage::Storage;

pub struct EnrollmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl EnrollmentService {
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

    // 注册学生到班级（管理员）
    pub async fn create_enrollment(
        &self,
        create_request: CreateEnrollmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_enrollment(self, create_request, request).await
    }

    // 班级名册（分页，批量补全学生账号信息）
    pub async fn list_by_class(
        &self,
        class_id: i64,
        params: EnrollmentQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_by_class(self, class_id, params, request).await
    }

    pub async fn delete_enrollment(
        &self,
        enrollment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::handle_delete_enrollment(self, enrollment_id, request).await
    }
}
