pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod restore;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classes::requests::{ClassQueryParams, CreateClassRequest, UpdateClassRequest};
use crate::storage::Storage;

pub struct ClassService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassService {
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

    pub async fn create_class(
        &self,
        create_request: CreateClassRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_class(self, create_request, request).await
    }

    pub async fn list_classes(
        &self,
        params: ClassQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_classes(self, params, request).await
    }

    pub async fn get_class(
        &self,
        class_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::handle_get_class(self, class_id, request).await
    }

    pub async fn update_class(
        &self,
        class_id: i64,
        update_request: UpdateClassRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update_class(self, class_id, update_request, request).await
    }

    // 软删除，deleted_at 置为当前时间
    pub async fn delete_class(
        &self,
        class_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::handle_delete_class(self, class_id, request).await
    }

    // 恢复软删除的班级（管理员）
    pub async fn restore_class(
        &self,
        class_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        restore::handle_restore_class(self, class_id, request).await
    }
}
