use super::SeaOrmStorage;
use crate::entity::files::{ActiveModel, Column, Entity as Files};
use crate::errors::{CampusError, Result};
use crate::models::files::entities::File;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    #[allow(clippy::too_many_arguments)]
    pub async fn create_file_impl(
        &self,
        download_token: &str,
        original_name: &str,
        stored_name: &str,
        file_size: i64,
        file_type: &str,
        uploaded_by: i64,
    ) -> Result<File> {
        let active = ActiveModel {
            download_token: Set(download_token.to_string()),
            original_name: Set(original_name.to_string()),
            stored_name: Set(stored_name.to_string()),
            file_size: Set(file_size),
            file_type: Set(file_type.to_string()),
            uploaded_by: Set(uploaded_by),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("保存文件记录失败: {e}")))?;

        Ok(model.into_file())
    }

    pub async fn get_file_by_token_impl(&self, token: &str) -> Result<Option<File>> {
        let model = Files::find()
            .filter(Column::DownloadToken.eq(token))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询文件记录失败: {e}")))?;

        Ok(model.map(|m| m.into_file()))
    }
}
