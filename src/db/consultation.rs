use crate::db::db_service::DbService;
use crate::types::consult::DBConsultCreate;
use crate::types::error::AppError;
use crate::utils::token;
use chrono::Utc;
use entity::consultation::{
    ActiveModel as ConsultActive, Column, Entity as Consultation, Model as ConsultModel,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

impl DbService {
    pub async fn create_consultation(&self, c: DBConsultCreate) -> Result<ConsultModel, AppError> {
        Ok(ConsultActive {
            id: Set(token::new_id()),
            source: Set(c.source.to_string()),
            parent_name: Set(c.parent_name),
            child_name: Set(c.child_name),
            child_age: Set(c.child_age),
            phone: Set(c.phone),
            email: Set(c.email),
            program: Set(c.program),
            message: Set(c.message),
            handled: Set(false),
            created_at: Set(Utc::now()),
        }
        .insert(&self.database_connection)
        .await?)
    }

    /// Newest first; `pending_only` hides handled requests.
    pub async fn list_consultations(&self, pending_only: bool) -> Result<Vec<ConsultModel>, AppError> {
        let mut finder = Consultation::find();
        if pending_only {
            finder = finder.filter(Column::Handled.eq(false));
        }
        Ok(finder
            .order_by_desc(Column::CreatedAt)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn mark_consultation_handled(&self, id: &Uuid) -> Result<ConsultModel, AppError> {
        let current = Consultation::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Consultation not found".into()))?;
        if current.handled {
            return Ok(current);
        }
        let mut am: ConsultActive = current.into();
        am.handled = Set(true);
        Ok(am.update(&self.database_connection).await?)
    }
}
