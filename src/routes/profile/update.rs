use crate::db::db_service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::AuthSession;
use crate::types::user::{RProfileUpdate, UserProfile};
use crate::utils::validate;
use actix_web::{patch, web};
use std::sync::Arc;

#[patch("")]
pub async fn update_profile(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    session: AuthSession,
    body: web::Json<RProfileUpdate>,
) -> ApiResult<UserProfile> {
    let name = validate::display_name(&body.name)?;
    let user = db.update_display_name(&session.user_id(), name).await?;
    Ok(ApiResponse::Ok(user.into()))
}
