use crate::db::db_service::DbService;
use crate::{types::{error::AppError, user::DBUserCreate}, utils::token};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel, UserRole};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

impl DbService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.database_connection)
            .await?)
    }

    /// Signup: create user. Email must already be normalized.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::EmailAlreadyInUse);
        }
        let now = Utc::now();

        let inserted = UserActive {
            id: Set(token::new_id()),
            email: Set(payload.email),
            display_name: Set(payload.display_name),
            password_hash: Set(payload.password_hash),
            role: Set(payload.role),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await;

        // Two signups racing past the exists check land on the unique index.
        match inserted.map_err(AppError::from) {
            Ok(user) => Ok(user),
            Err(AppError::AlreadyExists) => Err(AppError::EmailAlreadyInUse),
            Err(e) => Err(e),
        }
    }

    /// Newest accounts first.
    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .order_by_desc(entity::user::Column::CreatedAt)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn is_admin(&self, id: &Uuid) -> Result<bool, AppError> {
        match self.get_user_by_id(id).await {
            Ok(user) => Ok(user.role == UserRole::Admin),
            Err(AppError::NotFound) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub async fn set_user_role(&self, id: &Uuid, role: UserRole) -> Result<UserModel, AppError> {
        let user = self.get_user_by_id(id).await?;
        if user.role == role {
            return Ok(user);
        }
        let mut am: UserActive = user.into();
        am.role = Set(role);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn set_user_as_admin(&self, id: &Uuid) -> Result<UserModel, AppError> {
        self.set_user_role(id, UserRole::Admin).await
    }

    pub async fn remove_admin_role(&self, id: &Uuid) -> Result<UserModel, AppError> {
        self.set_user_role(id, UserRole::User).await
    }

    pub async fn update_display_name(&self, id: &Uuid, name: String) -> Result<UserModel, AppError> {
        let mut am: UserActive = self.get_user_by_id(id).await?.into();
        am.display_name = Set(name);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }
}
