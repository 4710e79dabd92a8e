use crate::db::db_service::DbService;
use crate::site::{self, Featured};
use crate::types::notice::Notice;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct Response {
    pub academy: &'static str,
    pub headline: &'static str,
    pub subtitle: &'static str,
    pub highlights: &'static [&'static str],
    pub featured_programs: &'static [Featured],
    pub latest_notices: Vec<Notice>,
}

#[get("/home")]
pub async fn home(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
) -> ApiResult<Response> {
    let latest_notices = db
        .latest_notices(site::HOME_NOTICE_COUNT)
        .await?
        .into_iter()
        .map(Notice::from)
        .collect();

    Ok(ApiResponse::Ok(Response {
        academy: site::ACADEMY_NAME,
        headline: site::HOME_HEADLINE,
        subtitle: site::HOME_SUBTITLE,
        highlights: site::HOME_HIGHLIGHTS,
        featured_programs: site::FEATURED,
        latest_notices,
    }))
}
