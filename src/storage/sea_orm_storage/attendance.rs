use super::SeaOrmStorage;
use crate::entity::attendance::{ActiveModel, Column, Entity as Attendance};
use crate::errors::{CampusError, Result};
use crate::models::attendance::{
    entities::{AttendanceRecord, AttendanceStatus},
    requests::{AttendanceQueryParams, UpsertAttendanceRequest},
    responses::AttendanceSummary,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 按 (class, student, date) 写入考勤，已有记录则覆盖状态
    pub async fn upsert_attendance_impl(
        &self,
        req: UpsertAttendanceRequest,
    ) -> Result<AttendanceRecord> {
        let now = chrono::Utc::now().timestamp();

        let existing = Attendance::find()
            .filter(Column::ClassId.eq(req.class_id))
            .filter(Column::StudentId.eq(req.student_id))
            .filter(Column::Date.eq(req.date.clone()))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询考勤失败: {e}")))?;

        let saved = match existing {
            Some(model) => {
                let mut active: ActiveModel = model.into();
                active.status = Set(req.status.to_string());
                active.updated_at = Set(now);
                active
                    .update(&self.db)
                    .await
                    .map_err(|e| CampusError::database_operation(format!("更新考勤失败: {e}")))?
            }
            None => {
                let active = ActiveModel {
                    class_id: Set(req.class_id),
                    student_id: Set(req.student_id),
                    date: Set(req.date),
                    status: Set(req.status.to_string()),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                active
                    .insert(&self.db)
                    .await
                    .map_err(|e| CampusError::database_operation(format!("录入考勤失败: {e}")))?
            }
        };

        Ok(saved.into_attendance_record())
    }

    /// 条件查询考勤记录
    pub async fn list_attendance_impl(
        &self,
        query: AttendanceQueryParams,
    ) -> Result<Vec<AttendanceRecord>> {
        let mut select = Attendance::find();

        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(date) = query.date {
            select = select.filter(Column::Date.eq(date));
        }

        let records = select
            .order_by_desc(Column::Date)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询考勤列表失败: {e}")))?;

        Ok(records
            .into_iter()
            .map(|r| r.into_attendance_record())
            .collect())
    }

    /// 单个学生的考勤汇总，迟到计入出勤
    pub async fn attendance_summary_impl(&self, student_id: i64) -> Result<AttendanceSummary> {
        let records = Attendance::find()
            .filter(Column::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询考勤汇总失败: {e}")))?;

        let total_days = records.len() as i64;
        let present_days = records
            .iter()
            .filter(|r| {
                r.status
                    .parse::<AttendanceStatus>()
                    .map(|s| s.counts_as_present())
                    .unwrap_or(false)
            })
            .count() as i64;

        let attendance_rate = if total_days > 0 {
            (present_days as f64 / total_days as f64 * 10000.0).round() / 100.0
        } else {
            0.0
        };

        Ok(AttendanceSummary {
            student_id,
            total_days,
            present_days,
            attendance_rate,
        })
    }

    /// 全校考勤总量：(总记录数, 出勤记录数)
    pub async fn attendance_totals_impl(&self) -> Result<(u64, u64)> {
        let total = Attendance::find()
            .count(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("统计考勤总数失败: {e}")))?;

        let present = Attendance::find()
            .filter(Column::Status.is_in(["present", "late"]))
            .count(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("统计出勤数失败: {e}")))?;

        Ok((total, present))
    }
}
