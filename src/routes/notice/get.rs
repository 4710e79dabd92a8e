use crate::db::db_service::DbService;
use crate::types::notice::Notice;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

#[get("/{id}")]
pub async fn get_notice(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    path: web::Path<Uuid>,
) -> ApiResult<Notice> {
    let notice = db.get_notice(&path.into_inner()).await?;
    Ok(ApiResponse::Ok(notice.into()))
}
