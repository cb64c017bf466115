pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::subjects::requests::{
    CreateSubjectRequest, SubjectQueryParams, UpdateSubjectRequest,
};
use crate::storage::Storage;

pub struct SubjectService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubjectService {
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

    pub async fn create_subject(
        &self,
        create_request: CreateSubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_subject(self, create_request, request).await
    }

    pub async fn list_subjects(
        &self,
        params: SubjectQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_subjects(self, params, request).await
    }

    pub async fn get_subject(
        &self,
        subject_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_get_subject(self, subject_id, request).await
    }

    pub async fn update_subject(
        &self,
        subject_id: i64,
        update_request: UpdateSubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update_subject(self, subject_id, update_request, request).await
    }

    pub async fn delete_subject(
        &self,
        subject_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::handle_delete_subject(self, subject_id, request).await
    }
}
