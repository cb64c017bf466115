use super::SeaOrmStorage;
use crate::entity::exams::{ActiveModel, Column, Entity as Exams};
use crate::errors::{CampusError, Result};
use crate::models::exams::{
    entities::Exam,
    requests::{CreateExamRequest, ExamQueryParams, UpdateExamRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建考试
    pub async fn create_exam_impl(&self, req: CreateExamRequest) -> Result<Exam> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(req.class_id),
            exam_name: Set(req.exam_name),
            exam_date: Set(req.exam_date),
            max_marks: Set(req.max_marks),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("创建考试失败: {e}")))?;

        Ok(result.into_exam())
    }

    /// 通过 ID 获取考试
    pub async fn get_exam_by_id_impl(&self, id: i64) -> Result<Option<Exam>> {
        let result = Exams::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询考试失败: {e}")))?;

        Ok(result.map(|m| m.into_exam()))
    }

    /// 列出考试，按日期倒序
    pub async fn list_exams_impl(&self, query: ExamQueryParams) -> Result<Vec<Exam>> {
        let mut select = Exams::find();

        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        let exams = select
            .order_by_desc(Column::ExamDate)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询考试列表失败: {e}")))?;

        Ok(exams.into_iter().map(|m| m.into_exam()).collect())
    }

    /// 更新考试
    pub async fn update_exam_impl(
        &self,
        id: i64,
        update: UpdateExamRequest,
    ) -> Result<Option<Exam>> {
        let existing = self.get_exam_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(exam_name) = update.exam_name {
            model.exam_name = Set(exam_name);
        }

        if let Some(exam_date) = update.exam_date {
            model.exam_date = Set(exam_date);
        }

        if let Some(max_marks) = update.max_marks {
            model.max_marks = Set(max_marks);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("更新考试失败: {e}")))?;

        self.get_exam_by_id_impl(id).await
    }

    /// 删除考试
    pub async fn delete_exam_impl(&self, id: i64) -> Result<bool> {
        let result = Exams::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("删除考试失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
