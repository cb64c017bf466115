pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::exams::requests::{CreateExamRequest, ExamQueryParams, UpdateExamRequest};
use crate::storage::Storage;

pub struct ExamService {
    storage: Option<Arc<dyn Storage>>,
}

impl ExamService {
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

    pub async fn create_exam(
        &self,
        create_request: CreateExamRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_exam(self, create_request, request).await
    }

    pub async fn list_exams(
        &self,
        params: ExamQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_exams(self, params, request).await
    }

    pub async fn get_exam(&self, exam_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_get_exam(self, exam_id, request).await
    }

    pub async fn update_exam(
        &self,
        exam_id: i64,
        update_request: UpdateExamRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update_exam(self, exam_id, update_request, request).await
    }

    pub async fn delete_exam(
        &self,
        exam_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::handle_delete_exam(self, exam_id, request).await
    }
}
