use crate::site::{about_page, AboutPage};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::get;

#[get("/about")]
pub async fn about(_req: actix_web::HttpRequest) -> ApiResult<AboutPage> {
    Ok(ApiResponse::Ok(about_page()))
}
