use crate::db::db_service::DbService;
use crate::types::notice::{Notice, NoticeQuery};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;

#[get("")]
pub async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    query: web::Query<NoticeQuery>,
) -> ApiResult<Vec<Notice>> {
    let notices = db.list_notices(query.category_filter()).await?;
    Ok(ApiResponse::Ok(notices.into_iter().map(Notice::from).collect()))
}
