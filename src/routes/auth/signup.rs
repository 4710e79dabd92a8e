use crate::config::config;
use crate::db::db_service::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RSignup, UserProfile};
use crate::utils::{token::encrypt, validate};
use actix_web::{post, web};
use entity::user::UserRole;
use std::sync::Arc;
use tracing::info;

/// Creates the account only; the client signs in afterwards.
#[post("/signup")]
pub async fn signup(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    body: web::Json<RSignup>,
) -> ApiResult<UserProfile> {
    let form = body.into_inner();

    let display_name = validate::display_name(&form.name)?;
    let email = validate::email(&form.email)?;
    validate::new_password(&form.password, &form.confirm_password)?;

    let password_hash = encrypt(&form.password)
        .map_err(|e| AppError::Internal(format!("hash password: {e}")))?;

    let role = match config().bootstrap_admin_email.as_deref() {
        Some(admin) if admin == email => UserRole::Admin,
        _ => UserRole::User,
    };

    let user = db
        .create_user(DBUserCreate {
            display_name,
            email,
            password_hash,
            role,
        })
        .await?;

    info!(user_id = %user.id, ?role, "user signed up");

    Ok(ApiResponse::Created(user.into()))
}
