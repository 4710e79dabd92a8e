use crate::db::db_service::DbService;
use crate::types::{error::AppError, session::AuthSession};
use crate::utils::token::{construct_token, encrypt, extract_token_parts, new_id, new_secret, verify};
use chrono::{Duration, Utc};
use entity::session::{ActiveModel as SessionActive, Entity as Session, Model as SessionModel};
use entity::user::{ActiveModel as UserActive, Entity as User};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set, TransactionTrait,
};
use tracing::{info, warn};
use uuid::Uuid;

impl DbService {
    /// Opens a session for `user_id`. Returns the bearer token (shown once)
    /// and the stored row.
    pub async fn create_session(
        &self,
        user_id: Uuid,
        ttl: Duration,
    ) -> Result<(String, SessionModel), AppError> {
        let id = new_id();
        let secret = new_secret();
        let secret_hash = encrypt(&secret)
            .map_err(|e| AppError::Internal(format!("hash session secret: {e}")))?;
        let now = Utc::now();

        let session = SessionActive {
            id: Set(id),
            user_id: Set(user_id),
            secret_hash: Set(secret_hash),
            expires_at: Set(now + ttl),
            created_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?;

        Ok((construct_token(&id, &secret), session))
    }

    /// Maps a bearer token to its session and the user's current record.
    /// Every failure is `Unauthorized`; expired rows are removed on sight.
    pub async fn resolve_session(&self, token: &str) -> Result<AuthSession, AppError> {
        let (session_id, secret) = extract_token_parts(token).ok_or(AppError::Unauthorized)?;

        let session = Session::find_by_id(session_id)
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::Unauthorized)?;

        if session.expires_at <= Utc::now() {
            Session::delete_by_id(session.id)
                .exec(&self.database_connection)
                .await?;
            return Err(AppError::Unauthorized);
        }

        match verify(&secret, &session.secret_hash) {
            Ok(true) => {}
            Ok(false) => {
                warn!(%session_id, "session secret mismatch");
                return Err(AppError::Unauthorized);
            }
            Err(e) => return Err(AppError::Internal(format!("stored session hash unreadable: {e}"))),
        }

        let user = match self.get_user_by_id(&session.user_id).await {
            Ok(user) => user,
            Err(AppError::NotFound) => return Err(AppError::Unauthorized),
            Err(e) => return Err(e),
        };

        Ok(AuthSession { session_id: session.id, user })
    }

    pub async fn get_session(&self, id: &Uuid) -> Result<SessionModel, AppError> {
        Ok(Session::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Session not found".into()))?)
    }

    pub async fn delete_session(&self, id: &Uuid) -> Result<(), AppError> {
        let res = Session::delete_by_id(*id)
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    pub async fn list_user_sessions(&self, user_id: &Uuid) -> Result<Vec<SessionModel>, AppError> {
        Ok(Session::find()
            .filter(entity::session::Column::UserId.eq(*user_id))
            .all(&self.database_connection)
            .await?)
    }

    /// Stores a new password hash and revokes every session of the user
    /// except `keep`, atomically.
    pub async fn change_password(
        &self,
        user_id: &Uuid,
        password_hash: String,
        keep: &Uuid,
    ) -> Result<u64, AppError> {
        let txn = self.database_connection.begin().await?;

        let user = User::find_by_id(*user_id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?;

        let mut am: UserActive = user.into();
        am.password_hash = Set(password_hash);
        am.updated_at = Set(Utc::now());
        am.update(&txn).await?;

        let revoked = Session::delete_many()
            .filter(entity::session::Column::UserId.eq(*user_id))
            .filter(entity::session::Column::Id.ne(*keep))
            .exec(&txn)
            .await?
            .rows_affected;

        txn.commit().await?;
        Ok(revoked)
    }

    /// Hard-delete every expired session.
    pub async fn purge_expired_sessions(&self) -> Result<u64, AppError> {
        let res = Session::delete_many()
            .filter(entity::session::Column::ExpiresAt.lte(Utc::now()))
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected > 0 {
            info!(purged = res.rows_affected, "expired sessions purged");
        }
        Ok(res.rows_affected)
    }
}
