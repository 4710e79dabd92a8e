use std::sync::Arc;

use actix_web::{dev::ServiceRequest, web, HttpMessage};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::user::UserRole;
use tracing::warn;

use crate::db::db_service::DbService;
use crate::types::error::AppError;
use crate::types::session::AuthSession;

async fn resolve(req: &ServiceRequest, credentials: &BearerAuth) -> Result<AuthSession, AppError> {
    let db = req
        .app_data::<web::Data<Arc<DbService>>>()
        .cloned()
        .ok_or_else(|| AppError::Internal("database service missing from app data".into()))?;
    db.resolve_session(credentials.token()).await
}

/// Bearer middleware for signed-in users. Stores the [`AuthSession`] in the
/// request extensions.
pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    match resolve(&req, &credentials).await {
        Ok(session) => {
            req.extensions_mut().insert(session);
            Ok(req)
        }
        Err(e) => Err((e.into(), req)),
    }
}

/// Like [`validate_token`], but the user's current role must be admin.
pub async fn validate_admin_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    match resolve(&req, &credentials).await {
        Ok(session) if session.user.role == UserRole::Admin => {
            req.extensions_mut().insert(session);
            Ok(req)
        }
        Ok(session) => {
            warn!(user_id = %session.user.id, path = %req.path(), "non-admin hit admin route");
            Err((AppError::Forbidden.into(), req))
        }
        Err(e) => Err((e.into(), req)),
    }
}
