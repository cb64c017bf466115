pub mod list;
pub mod read;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::notifications::requests::NotificationQueryParams;
use crate::storage::Storage;

pub struct NotificationService {
    storage: Option<Arc<dyn Storage>>,
}

impl NotificationService {
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

    pub async fn list_notifications(
        &self,
        params: NotificationQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_notifications(self, params, request).await
    }

    pub async fn unread_count(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_unread_count(self, request).await
    }

    pub async fn mark_read(
        &self,
        notification_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        read::handle_mark_read(self, notification_id, request).await
    }

    pub async fn mark_all_read(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        read::handle_mark_all_read(self, request).await
    }

    pub async fn delete_notification(
        &self,
        notification_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        read::handle_delete_notification(self, notification_id, request).await
    }
}
