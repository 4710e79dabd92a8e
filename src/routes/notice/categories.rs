use crate::db::db_service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;

#[get("/categories")]
pub async fn categories(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
) -> ApiResult<Vec<String>> {
    Ok(ApiResponse::Ok(db.list_notice_categories().await?))
}
