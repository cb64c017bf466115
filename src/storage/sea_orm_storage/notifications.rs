use super::SeaOrmStorage;
use crate::entity::notifications::{ActiveModel, Column, Entity as Notifications};
use crate::errors::{CampusError, Result};
use crate::models::{
    PaginationInfo,
    notifications::{
        requests::{CreateNotificationRequest, NotificationQueryParams},
        responses::NotificationListResponse,
    },
};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 批量写入通知，公告/成绩发布时扇出
    pub async fn create_notifications_impl(
        &self,
        notifications: Vec<CreateNotificationRequest>,
    ) -> Result<u64> {
        if notifications.is_empty() {
            return Ok(0);
        }

        let now = chrono::Utc::now().timestamp();
        let count = notifications.len() as u64;

        let actives: Vec<ActiveModel> = notifications
            .into_iter()
            .map(|n| ActiveModel {
                user_id: Set(n.user_id),
                notification_type: Set(n.notification_type),
                title: Set(n.title),
                content: Set(n.content),
                reference_type: Set(n.reference_type),
                reference_id: Set(n.reference_id),
                is_read: Set(false),
                created_at: Set(now),
                ..Default::default()
            })
            .collect();

        Notifications::insert_many(actives)
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("批量写入通知失败: {e}")))?;

        Ok(count)
    }

    pub async fn list_notifications_impl(
        &self,
        user_id: i64,
        query: NotificationQueryParams,
    ) -> Result<NotificationListResponse> {
        let (page, limit) = query.pagination.normalized();

        let mut select = Notifications::find().filter(Column::UserId.eq(user_id));

        if query.unread_only.unwrap_or(false) {
            select = select.filter(Column::IsRead.eq(false));
        }

        let paginator = select
            .order_by_desc(Column::CreatedAt)
            .paginate(&self.db, limit);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询通知总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询通知页数失败: {e}")))?;

        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询通知列表失败: {e}")))?;

        Ok(NotificationListResponse {
            items: items.into_iter().map(|m| m.into_notification()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: limit as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn count_unread_notifications_impl(&self, user_id: i64) -> Result<i64> {
        let count = Notifications::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IsRead.eq(false))
            .count(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("统计未读通知失败: {e}")))?;

        Ok(count as i64)
    }

    /// 标记单条通知已读，按 user_id 限定所有权
    pub async fn mark_notification_read_impl(&self, user_id: i64, id: i64) -> Result<bool> {
        let result = Notifications::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("标记通知已读失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn mark_all_notifications_read_impl(&self, user_id: i64) -> Result<u64> {
        let result = Notifications::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IsRead.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("批量标记已读失败: {e}")))?;

        Ok(result.rows_affected)
    }

    pub async fn delete_notification_impl(&self, user_id: i64, id: i64) -> Result<bool> {
        let result = Notifications::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("删除通知失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
