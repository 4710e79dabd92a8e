use crate::db::db_service::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::AuthSession;
use crate::types::user::{MessageRes, RPasswordChange};
use crate::utils::{mail::notify_password_changed, token::{encrypt, verify}, validate};
use actix_web::{post, web};
use std::sync::Arc;
use tracing::{info, warn};

/// Re-checks the current password, stores the new one and signs out every
/// other device. The calling session stays valid.
#[post("/password")]
pub async fn change_password(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    session: AuthSession,
    body: web::Json<RPasswordChange>,
) -> ApiResult<MessageRes> {
    validate::password_present(&body.current_password)?;
    validate::new_password(&body.new_password, &body.confirm_password)?;

    let current_ok = verify(&body.current_password, &session.user.password_hash)
        .map_err(|e| AppError::Internal(format!("stored password hash unreadable: {e}")))?;
    if !current_ok {
        warn!(user_id = %session.user_id(), "password change with wrong current password");
        return Err(AppError::WrongPassword);
    }

    let new_hash = encrypt(&body.new_password)
        .map_err(|e| AppError::Internal(format!("hash password: {e}")))?;
    let revoked = db
        .change_password(&session.user_id(), new_hash, &session.session_id)
        .await?;

    info!(user_id = %session.user_id(), revoked, "password changed");

    notify_password_changed(session.user.email.clone(), session.user.display_name.clone());

    Ok(ApiResponse::Ok(MessageRes {
        message: "Password changed.".to_string(),
    }))
}
