//! 成绩报告实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "performance_reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub exam_id: i64,
    pub average_score: f64,
    pub total_score: f64,
    pub rank: Option<i32>,
    pub remarks: Option<String>,
    pub generated_by: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::exams::Entity",
        from = "Column::ExamId",
        to = "super::exams::Column::Id"
    )]
    Exam,
}

impl Related<super::exams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_report(self) -> crate::models::reports::entities::PerformanceReport {
        use crate::models::reports::entities::PerformanceReport;
        use chrono::{DateTime, Utc};

        PerformanceReport {
            id: self.id,
            student_id: self.student_id,
            exam_id: self.exam_id,
            average_score: self.average_score,
            total_score: self.total_score,
            rank: self.rank.map(i64::from),
            remarks: self.remarks,
            generated_by: self.generated_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
