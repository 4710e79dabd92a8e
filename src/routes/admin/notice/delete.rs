use crate::db::db_service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::AuthSession;
use actix_web::{delete, web};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[delete("/{id}")]
pub async fn delete_notice(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    session: AuthSession,
    path: web::Path<Uuid>,
) -> ApiResult<()> {
    let id = path.into_inner();
    db.delete_notice(&id).await?;
    info!(notice_id = %id, admin_id = %session.user_id(), "notice deleted");
    Ok(ApiResponse::NoContent)
}
