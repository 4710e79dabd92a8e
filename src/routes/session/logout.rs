use crate::db::db_service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::AuthSession;
use actix_web::{delete, web};
use std::sync::Arc;
use tracing::info;

#[delete("")]
pub async fn logout(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    session: AuthSession,
) -> ApiResult<()> {
    db.delete_session(&session.session_id).await?;
    info!(user_id = %session.user_id(), "user logged out");
    Ok(ApiResponse::NoContent)
}
