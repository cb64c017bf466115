pub mod academics;
pub mod overview;
pub mod roster;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::common::pagination::PaginationQuery;
use crate::storage::Storage;

pub struct AnalyticsService {
    storage: Option<Arc<dyn Storage>>,
}

impl AnalyticsService {
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

    // 全校总览：实体计数 + 出勤率，单项失败降级为 0
    pub async fn overview(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        overview::handle_overview(self, request).await
    }

    // 学业分析：班级均分、薄弱班级、教师工作量
    pub async fn academics(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        academics::handle_academics(self, request).await
    }

    // 教师班级名册，逐学生附带出勤率与成绩均分
    pub async fn roster(
        &self,
        class_id: i64,
        pagination: PaginationQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        roster::handle_roster(self, class_id, pagination, request).await
    }
}
