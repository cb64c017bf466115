//! 学生资料实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    #[sea_orm(unique)]
    pub admission_no: String,
    pub guardian_name: String,
    pub guardian_phone: String,
    pub date_of_birth: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,
    pub class_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student_profile(self) -> crate::models::profiles::entities::StudentProfile {
        use crate::models::profiles::entities::StudentProfile;
        use chrono::{DateTime, Utc};

        StudentProfile {
            id: self.id,
            user_id: self.user_id,
            admission_no: self.admission_no,
            guardian_name: self.guardian_name,
            guardian_phone: self.guardian_phone,
            date_of_birth: self.date_of_birth,
            address: self.address,
            class_id: self.class_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
