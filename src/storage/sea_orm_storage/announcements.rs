use super::SeaOrmStorage;
use crate::entity::announcements::{ActiveModel, Column, Entity as Announcements};
use crate::errors::{CampusError, Result};
use crate::models::{
    PaginationInfo,
    announcements::{
        entities::Announcement, requests::CreateAnnouncementRequest,
        responses::AnnouncementListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_announcement_impl(
        &self,
        author_id: i64,
        req: CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        let active = ActiveModel {
            author_id: Set(author_id),
            class_id: Set(req.class_id),
            title: Set(req.title),
            content: Set(req.content),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("创建公告失败: {e}")))?;

        Ok(model.into_announcement())
    }

    pub async fn get_announcement_by_id_impl(&self, id: i64) -> Result<Option<Announcement>> {
        let model = Announcements::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询公告失败: {e}")))?;

        Ok(model.map(|m| m.into_announcement()))
    }

    /// 列出对指定班级集合可见的公告，全校公告（class_id 为空）始终可见
    pub async fn list_announcements_visible_impl(
        &self,
        class_ids: &[i64],
        page: u64,
        limit: u64,
    ) -> Result<AnnouncementListResponse> {
        let mut visibility = Condition::any().add(Column::ClassId.is_null());
        if !class_ids.is_empty() {
            visibility = visibility.add(Column::ClassId.is_in(class_ids.iter().copied()));
        }

        let paginator = Announcements::find()
            .filter(visibility)
            .order_by_desc(Column::CreatedAt)
            .paginate(&self.db, limit);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询公告总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询公告页数失败: {e}")))?;

        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询公告列表失败: {e}")))?;

        Ok(AnnouncementListResponse {
            items: items.into_iter().map(|m| m.into_announcement()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: limit as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn delete_announcement_impl(&self, id: i64) -> Result<bool> {
        let result = Announcements::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("删除公告失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
