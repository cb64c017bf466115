pub mod get;
pub mod photo;
pub mod submit;
pub mod update;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::auth::requests::UpdateProfileRequest;
use crate::models::profiles::requests::{
    SubmitStudentProfileRequest, SubmitTeacherProfileRequest,
};
use crate::storage::Storage;

pub struct ProfileService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProfileService {
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

    // 当前用户资料（账号 + 角色专属档案）
    pub async fn get_profile(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::handle_get_profile(self, request).await
    }

    // 更新展示名/头像
    pub async fn update_profile(
        &self,
        update_request: UpdateProfileRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update_profile(self, update_request, request).await
    }

    // 提交学生档案
    pub async fn submit_student_profile(
        &self,
        submit_request: SubmitStudentProfileRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::handle_submit_student(self, submit_request, request).await
    }

    // 提交教师档案
    pub async fn submit_teacher_profile(
        &self,
        submit_request: SubmitTeacherProfileRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::handle_submit_teacher(self, submit_request, request).await
    }

    // 上传头像照片
    pub async fn upload_photo(
        &self,
        request: &HttpRequest,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        photo::handle_upload_photo(self, request, payload).await
    }
}
