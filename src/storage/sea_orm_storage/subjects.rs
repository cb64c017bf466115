use super::SeaOrmStorage;
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::errors::{CampusError, Result};
use crate::models::subjects::{
    entities::Subject,
    requests::{CreateSubjectRequest, SubjectQueryParams, UpdateSubjectRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建科目，(class_id, subject_name) 唯一索引兜底防重
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(req.class_id),
            teacher_id: Set(req.teacher_id),
            subject_name: Set(req.subject_name),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("创建科目失败: {e}")))?;

        Ok(result.into_subject())
    }

    /// 通过 ID 获取科目
    pub async fn get_subject_by_id_impl(&self, id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 列出科目
    pub async fn list_subjects_impl(&self, query: SubjectQueryParams) -> Result<Vec<Subject>> {
        let mut select = Subjects::find();

        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        let subjects = select
            .order_by_asc(Column::SubjectName)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询科目列表失败: {e}")))?;

        Ok(subjects.into_iter().map(|m| m.into_subject()).collect())
    }

    /// 更新科目
    pub async fn update_subject_impl(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let existing = self.get_subject_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(teacher_id);
        }

        if let Some(subject_name) = update.subject_name {
            model.subject_name = Set(subject_name);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("更新科目失败: {e}")))?;

        self.get_subject_by_id_impl(id).await
    }

    /// 删除科目
    pub async fn delete_subject_impl(&self, id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("删除科目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计科目数量
    pub async fn count_subjects_impl(&self) -> Result<u64> {
        let count = Subjects::find()
            .count(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("统计科目数量失败: {e}")))?;

        Ok(count)
    }
}
