use crate::config::config;
use crate::db::db_service::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LoginRes, RLogin};
use crate::utils::{throttle::LoginThrottle, token::{verify, verify_dummy}, validate};
use actix_web::{post, web};
use chrono::Duration;
use std::sync::Arc;
use tracing::{info, warn};

#[post("/login")]
pub async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    throttle: web::Data<LoginThrottle>,
    body: web::Json<RLogin>,
) -> ApiResult<LoginRes> {
    let email = validate::email(&body.email)?;
    validate::password_present(&body.password)?;

    throttle.try_begin(&email)?;

    // Unknown email and wrong password look the same to the client,
    // in body and in timing.
    let user = match db.find_user_by_email(&email).await? {
        Some(user) => user,
        None => {
            verify_dummy(&body.password);
            return Err(AppError::InvalidCredential);
        }
    };

    let password_ok = verify(&body.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("stored password hash unreadable: {e}")))?;
    if !password_ok {
        warn!(user_id = %user.id, "login with wrong password");
        return Err(AppError::InvalidCredential);
    }
    throttle.clear(&email);

    let ttl = Duration::hours(config().session.ttl_hours);
    let (token, session) = db.create_session(user.id, ttl).await?;

    info!(user_id = %user.id, session_id = %session.id, "user logged in");

    Ok(ApiResponse::Ok(LoginRes {
        token,
        expires_at: session.expires_at,
        user: user.into(),
    }))
}
