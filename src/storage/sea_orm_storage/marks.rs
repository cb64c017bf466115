use super::SeaOrmStorage;
use crate::entity::marks::{ActiveModel, Column, Entity as Marks};
use crate::entity::prelude::Exams;
use crate::errors::{CampusError, Result};
use crate::models::{
    exams::entities::Exam,
    marks::{
        entities::Mark,
        requests::{MarkQueryParams, UpsertMarkRequest},
    },
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 按 (student, exam, subject) 写入成绩，已有记录则覆盖分数与备注
    pub async fn upsert_mark_impl(&self, req: UpsertMarkRequest) -> Result<Mark> {
        let now = chrono::Utc::now().timestamp();

        let existing = Marks::find()
            .filter(Column::StudentId.eq(req.student_id))
            .filter(Column::ExamId.eq(req.exam_id))
            .filter(Column::SubjectId.eq(req.subject_id))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询成绩失败: {e}")))?;

        let saved = match existing {
            Some(model) => {
                let mut active: ActiveModel = model.into();
                active.score = Set(req.score);
                active.remarks = Set(req.remarks);
                active.updated_at = Set(now);
                active
                    .update(&self.db)
                    .await
                    .map_err(|e| CampusError::database_operation(format!("更新成绩失败: {e}")))?
            }
            None => {
                let active = ActiveModel {
                    student_id: Set(req.student_id),
                    exam_id: Set(req.exam_id),
                    subject_id: Set(req.subject_id),
                    score: Set(req.score),
                    remarks: Set(req.remarks),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                active
                    .insert(&self.db)
                    .await
                    .map_err(|e| CampusError::database_operation(format!("录入成绩失败: {e}")))?
            }
        };

        Ok(saved.into_mark())
    }

    /// 条件查询成绩
    pub async fn list_marks_impl(&self, query: MarkQueryParams) -> Result<Vec<Mark>> {
        let mut select = Marks::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(exam_id) = query.exam_id {
            select = select.filter(Column::ExamId.eq(exam_id));
        }

        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        let marks = select
            .order_by_desc(Column::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询成绩列表失败: {e}")))?;

        Ok(marks.into_iter().map(|m| m.into_mark()).collect())
    }

    /// 批量按学生查成绩
    pub async fn list_marks_by_students_impl(&self, student_ids: &[i64]) -> Result<Vec<Mark>> {
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        let marks = Marks::find()
            .filter(Column::StudentId.is_in(student_ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("批量查询成绩失败: {e}")))?;

        Ok(marks.into_iter().map(|m| m.into_mark()).collect())
    }

    /// 全量成绩及其所属考试，班级均分统计用
    pub async fn list_marks_with_exams_impl(&self) -> Result<Vec<(Mark, Exam)>> {
        let rows = Marks::find()
            .find_also_related(Exams)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询成绩与考试失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(mark, exam)| exam.map(|e| (mark.into_mark(), e.into_exam())))
            .collect())
    }
}
