use super::SeaOrmStorage;
use crate::entity::performance_reports::{ActiveModel, Column, Entity as PerformanceReports};
use crate::errors::{CampusError, Result};
use crate::models::reports::{
    entities::PerformanceReport,
    requests::{ReportDraft, ReportQueryParams},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 按 (student, exam) 覆盖写入一批报告，重新生成时更新既有行
    pub async fn upsert_performance_reports_impl(&self, rows: Vec<ReportDraft>) -> Result<u64> {
        let now = chrono::Utc::now().timestamp();
        let mut written = 0u64;

        for row in rows {
            let existing = PerformanceReports::find()
                .filter(Column::StudentId.eq(row.student_id))
                .filter(Column::ExamId.eq(row.exam_id))
                .one(&self.db)
                .await
                .map_err(|e| CampusError::database_operation(format!("查询成绩报告失败: {e}")))?;

            match existing {
                Some(model) => {
                    let mut active: ActiveModel = model.into();
                    active.average_score = Set(row.average_score);
                    active.total_score = Set(row.total_score);
                    active.rank = Set(row.rank.map(|r| r as i32));
                    active.remarks = Set(row.remarks);
                    active.generated_by = Set(row.generated_by);
                    active
                        .update(&self.db)
                        .await
                        .map_err(|e| {
                            CampusError::database_operation(format!("更新成绩报告失败: {e}"))
                        })?;
                }
                None => {
                    let active = ActiveModel {
                        student_id: Set(row.student_id),
                        exam_id: Set(row.exam_id),
                        average_score: Set(row.average_score),
                        total_score: Set(row.total_score),
                        rank: Set(row.rank.map(|r| r as i32)),
                        remarks: Set(row.remarks),
                        generated_by: Set(row.generated_by),
                        created_at: Set(now),
                        ..Default::default()
                    };
                    active.insert(&self.db).await.map_err(|e| {
                        CampusError::database_operation(format!("写入成绩报告失败: {e}"))
                    })?;
                }
            }

            written += 1;
        }

        Ok(written)
    }

    pub async fn list_reports_impl(
        &self,
        query: ReportQueryParams,
    ) -> Result<Vec<PerformanceReport>> {
        let mut select = PerformanceReports::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(exam_id) = query.exam_id {
            select = select.filter(Column::ExamId.eq(exam_id));
        }

        let reports = select
            .order_by_asc(Column::Rank)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询成绩报告失败: {e}")))?;

        Ok(reports.into_iter().map(|r| r.into_report()).collect())
    }
}
