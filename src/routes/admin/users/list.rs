use crate::db::db_service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserProfile;
use actix_web::{get, web};
use std::sync::Arc;

#[get("")]
pub async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
) -> ApiResult<Vec<UserProfile>> {
    let users = db.list_users().await?;
    Ok(ApiResponse::Ok(users.into_iter().map(UserProfile::from).collect()))
}
