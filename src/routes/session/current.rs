use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::AuthSession;
use crate::types::user::{SessionRes, UserProfile};
use actix_web::get;

/// Who am I. The role comes from the user row on every call, so a grant or
/// revoke shows up without signing in again.
#[get("")]
pub async fn current(
    _req: actix_web::HttpRequest,
    session: AuthSession,
) -> ApiResult<SessionRes> {
    let user: UserProfile = session.user.into();
    let is_admin = user.is_admin();

    Ok(ApiResponse::Ok(SessionRes { user, is_admin }))
}
