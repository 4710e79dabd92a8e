use crate::db::db_service::DbService;
use crate::types::error::AppError;
use crate::types::notice::{DBNoticeCreate, DBNoticePatch};
use crate::utils::token;
use chrono::Utc;
use entity::notice::{ActiveModel as NoticeActive, Column, Entity as Notice, Model as NoticeModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

impl DbService {
    /// Board order: newest `date` first, then newest written first.
    /// `category = None` lists every notice.
    pub async fn list_notices(&self, category: Option<&str>) -> Result<Vec<NoticeModel>, AppError> {
        let mut finder = Notice::find();
        if let Some(category) = category {
            finder = finder.filter(Column::Category.eq(category));
        }
        Ok(finder
            .order_by_desc(Column::Date)
            .order_by_desc(Column::CreatedAt)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn latest_notices(&self, limit: u64) -> Result<Vec<NoticeModel>, AppError> {
        Ok(Notice::find()
            .order_by_desc(Column::Date)
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn list_notice_categories(&self) -> Result<Vec<String>, AppError> {
        Ok(Notice::find()
            .select_only()
            .column(Column::Category)
            .distinct()
            .order_by_asc(Column::Category)
            .into_tuple::<String>()
            .all(&self.database_connection)
            .await?)
    }

    pub async fn get_notice(&self, id: &Uuid) -> Result<NoticeModel, AppError> {
        Ok(Notice::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Notice not found".into()))?)
    }

    pub async fn create_notice(&self, notice: DBNoticeCreate) -> Result<NoticeModel, AppError> {
        let now = Utc::now();
        Ok(NoticeActive {
            id: Set(token::new_id()),
            title: Set(notice.title),
            content: Set(notice.content),
            category: Set(notice.category),
            date: Set(notice.date),
            author_id: Set(notice.author_id),
            author_name: Set(notice.author_name),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?)
    }

    pub async fn update_notice(&self, id: &Uuid, patch: DBNoticePatch) -> Result<NoticeModel, AppError> {
        let mut model: NoticeActive = self.get_notice(id).await?.into();

        if let Some(v) = patch.title {
            model.title = Set(v);
        }
        if let Some(v) = patch.category {
            model.category = Set(v);
        }
        if let Some(v) = patch.content {
            model.content = Set(v);
        }
        if let Some(v) = patch.date {
            model.date = Set(v);
        }
        model.updated_at = Set(Utc::now());

        Ok(model.update(&self.database_connection).await?)
    }

    pub async fn delete_notice(&self, id: &Uuid) -> Result<(), AppError> {
        let res = Notice::delete_by_id(*id)
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
