use super::SeaOrmStorage;
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::errors::{CampusError, Result};
use crate::models::{
    PaginationInfo,
    enrollments::{
        entities::Enrollment,
        requests::CreateEnrollmentRequest,
        responses::{EnrollmentEntry, EnrollmentListResponse},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// 学生加入班级，(class_id, student_id) 唯一索引兜底防重
    pub async fn create_enrollment_impl(
        &self,
        req: CreateEnrollmentRequest,
    ) -> Result<Enrollment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(req.class_id),
            student_id: Set(req.student_id),
            enrolled_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("创建选课记录失败: {e}")))?;

        Ok(result.into_enrollment())
    }

    /// 获取某学生在某班级的选课记录
    pub async fn get_enrollment_impl(
        &self,
        class_id: i64,
        student_id: i64,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 分页列出班级学生，用户信息一次批量补全
    pub async fn list_enrollments_by_class_impl(
        &self,
        class_id: i64,
        page: u64,
        limit: u64,
    ) -> Result<EnrollmentListResponse> {
        let select = Enrollments::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::EnrolledAt);

        let paginator = select.paginate(&self.db, limit);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询选课总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询选课页数失败: {e}")))?;

        let rows = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map_err(|e| CampusError::database_operation(format!("查询选课列表失败: {e}")))?;

        let student_ids: Vec<i64> = rows.iter().map(|m| m.student_id).collect();
        let users = self.get_users_by_ids_impl(&student_ids).await?;
        let user_map: HashMap<i64, (String, Option<String>)> = users
            .into_iter()
            .map(|u| (u.id, (u.username, u.display_name)))
            .collect();

        let items = rows
            .into_iter()
            .map(|m| {
                let enrollment = m.into_enrollment();
                let (username, display_name) = user_map
                    .get(&enrollment.student_id)
                    .cloned()
                    .map(|(u, d)| (Some(u), d))
                    .unwrap_or((None, None));
                EnrollmentEntry {
                    enrollment,
                    username,
                    display_name,
                }
            })
            .collect();

        Ok(EnrollmentListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: limit as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 某学生所有已加入班级的 ID
    pub async fn list_student_class_ids_impl(&self, student_id: i64) -> Result<Vec<i64>> {
        let ids: Vec<i64> = Enrollments::find()
            .select_only()
            .column(Column::ClassId)
            .filter(Column::StudentId.eq(student_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询学生班级失败: {e}")))?;

        Ok(ids)
    }

    /// 某班级全部学生 ID
    pub async fn list_enrolled_student_ids_impl(&self, class_id: i64) -> Result<Vec<i64>> {
        let ids: Vec<i64> = Enrollments::find()
            .select_only()
            .column(Column::StudentId)
            .filter(Column::ClassId.eq(class_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询班级学生失败: {e}")))?;

        Ok(ids)
    }

    /// 移除选课记录
    pub async fn delete_enrollment_impl(&self, id: i64) -> Result<bool> {
        let result = Enrollments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("删除选课记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
