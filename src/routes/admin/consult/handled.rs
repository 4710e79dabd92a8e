use crate::db::db_service::DbService;
use crate::types::consult::Consultation;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::AuthSession;
use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[post("/{id}/handled")]
pub async fn mark_handled(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    session: AuthSession,
    path: web::Path<Uuid>,
) -> ApiResult<Consultation> {
    let id = path.into_inner();
    let consult = db.mark_consultation_handled(&id).await?;
    info!(consultation_id = %id, admin_id = %session.user_id(), "consultation handled");
    Ok(ApiResponse::Ok(consult.into()))
}
