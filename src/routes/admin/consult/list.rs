use crate::db::db_service::DbService;
use crate::types::consult::{ConsultQuery, Consultation};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;

#[get("")]
pub async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    query: web::Query<ConsultQuery>,
) -> ApiResult<Vec<Consultation>> {
    let rows = db.list_consultations(query.pending).await?;
    Ok(ApiResponse::Ok(rows.into_iter().map(Consultation::from).collect()))
}
