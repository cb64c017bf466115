pub mod generate;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::reports::requests::{GenerateReportsRequest, ReportQueryParams};
use crate::storage::Storage;

pub struct ReportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportService {
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

    // 为某班级某次考试生成成绩报告（均分/总分/名次）
    pub async fn generate_reports(
        &self,
        generate_request: GenerateReportsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        generate::handle_generate_reports(self, generate_request, request).await
    }

    pub async fn list_reports(
        &self,
        params: ReportQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_reports(self, params, request).await
    }
}
