pub mod list;
pub mod upsert;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::marks::requests::{MarkQueryParams, UpsertMarkRequest};
use crate::storage::Storage;

pub struct MarkService {
    storage: Option<Arc<dyn Storage>>,
}

impl MarkService {
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

    // 录入/覆盖成绩，任课教师或管理员
    pub async fn upsert_mark(
        &self,
        upsert_request: UpsertMarkRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        upsert::handle_upsert_mark(self, upsert_request, request).await
    }

    // 成绩查询，学生只能查自己
    pub async fn list_marks(
        &self,
        params: MarkQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_marks(self, params, request).await
    }
}
