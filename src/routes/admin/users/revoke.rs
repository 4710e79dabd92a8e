use crate::db::db_service::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::AuthSession;
use crate::types::user::UserProfile;
use actix_web::{delete, web};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[delete("/{id}/admin")]
pub async fn revoke(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    session: AuthSession,
    path: web::Path<Uuid>,
) -> ApiResult<UserProfile> {
    let target = path.into_inner();
    // The caller is an admin, so refusing self-demotion keeps at least one.
    if target == session.user_id() {
        return Err(AppError::Conflict("admins cannot remove their own admin role".into()));
    }
    let user = db.remove_admin_role(&target).await?;
    info!(target_id = %target, admin_id = %session.user_id(), "admin role removed");
    Ok(ApiResponse::Ok(user.into()))
}
