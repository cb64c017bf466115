pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::announcements::requests::{AnnouncementQueryParams, CreateAnnouncementRequest};
use crate::storage::Storage;

pub struct AnnouncementService {
    storage: Option<Arc<dyn Storage>>,
}

impl AnnouncementService {
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

    // 发布公告，班级公告向在册学生扇出通知
    pub async fn create_announcement(
        &self,
        create_request: CreateAnnouncementRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_announcement(self, create_request, request).await
    }

    // 按可见范围分页列出公告
    pub async fn list_announcements(
        &self,
        params: AnnouncementQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_announcements(self, params, request).await
    }

    pub async fn delete_announcement(
        &self,
        announcement_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::handle_delete_announcement(self, announcement_id, request).await
    }
}
