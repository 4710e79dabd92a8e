use crate::site::{programs_page, ProgramsPage};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::get;

#[get("/programs")]
pub async fn programs(_req: actix_web::HttpRequest) -> ApiResult<ProgramsPage> {
    Ok(ApiResponse::Ok(programs_page()))
}
