use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::AuthSession;
use crate::types::user::UserProfile;
use actix_web::get;

#[get("")]
pub async fn get_profile(
    _req: actix_web::HttpRequest,
    session: AuthSession,
) -> ApiResult<UserProfile> {
    Ok(ApiResponse::Ok(session.user.into()))
}
