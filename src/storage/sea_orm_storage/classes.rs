use super::SeaOrmStorage;
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::errors::{CampusError, Result};
use crate::models::{
    PaginationInfo,
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(
        &self,
        teacher_id: i64,
        req: CreateClassRequest,
    ) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            teacher_id: Set(teacher_id),
            class_name: Set(req.name),
            description: Set(req.description),
            deleted_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("创建班级失败: {e}")))?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 分页列出班级
    pub async fn list_classes_with_pagination_impl(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.limit.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Classes::find();

        // 默认隐藏软删除的班级
        if !query.include_deleted {
            select = select.filter(Column::DeletedAt.is_null());
        }

        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::ClassName.contains(&escaped))
                    .add(Column::Description.contains(&escaped)),
            );
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询班级总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询班级页数失败: {e}")))?;

        let classes = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询班级列表失败: {e}")))?;

        Ok(ClassListResponse {
            items: classes.into_iter().map(|m| m.into_class()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出全部未删除班级
    pub async fn list_all_classes_impl(&self) -> Result<Vec<Class>> {
        let classes = Classes::find()
            .filter(Column::DeletedAt.is_null())
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询班级列表失败: {e}")))?;

        Ok(classes.into_iter().map(|m| m.into_class()).collect())
    }

    /// 更新班级
    pub async fn update_class_impl(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        let existing = self.get_class_by_id_impl(class_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(class_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.class_name = Set(name);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(teacher_id);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("更新班级失败: {e}")))?;

        self.get_class_by_id_impl(class_id).await
    }

    /// 软删除班级，已删除的不重复标记
    pub async fn soft_delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Classes::update_many()
            .col_expr(Column::DeletedAt, sea_orm::sea_query::Expr::value(Some(now)))
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(class_id))
            .filter(Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 恢复软删除的班级
    pub async fn restore_class_impl(&self, class_id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Classes::update_many()
            .col_expr(
                Column::DeletedAt,
                sea_orm::sea_query::Expr::value(Option::<i64>::None),
            )
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(class_id))
            .filter(Column::DeletedAt.is_not_null())
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("恢复班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计未删除班级数量
    pub async fn count_classes_impl(&self) -> Result<u64> {
        let count = Classes::find()
            .filter(Column::DeletedAt.is_null())
            .count(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("统计班级数量失败: {e}")))?;

        Ok(count)
    }
}
