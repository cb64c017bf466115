//! 文件记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "files")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub download_token: String,
    pub original_name: String,
    pub stored_name: String,
    pub file_size: i64,
    pub file_type: String,
    pub uploaded_by: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UploadedBy",
        to = "super::users::Column::Id"
    )]
    Uploader,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Uploader.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_file(self) -> crate::models::files::entities::File {
        use crate::models::files::entities::File;
        use chrono::{DateTime, Utc};

        File {
            id: self.id,
            download_token: self.download_token,
            original_name: self.original_name,
            stored_name: self.stored_name,
            file_size: self.file_size,
            file_type: self.file_type,
            uploaded_by: self.uploaded_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
