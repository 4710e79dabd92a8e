use crate::db::db_service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::AuthSession;
use crate::types::user::UserProfile;
use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[post("/{id}/admin")]
pub async fn grant(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    session: AuthSession,
    path: web::Path<Uuid>,
) -> ApiResult<UserProfile> {
    let target = path.into_inner();
    let user = db.set_user_as_admin(&target).await?;
    info!(target_id = %target, admin_id = %session.user_id(), "admin role granted");
    Ok(ApiResponse::Ok(user.into()))
}
