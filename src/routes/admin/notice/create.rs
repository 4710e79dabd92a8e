use crate::db::db_service::DbService;
use crate::types::notice::{today, DBNoticeCreate, Notice, RNoticeCreate, DEFAULT_AUTHOR_NAME};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::AuthSession;
use crate::utils::validate;
use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

#[post("")]
pub async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    session: AuthSession,
    body: web::Json<RNoticeCreate>,
) -> ApiResult<Notice> {
    let title = validate::max_len("title", validate::required("title", &body.title)?, validate::MAX_TITLE_LEN)?;
    let category = validate::max_len("category", validate::required("category", &body.category)?, validate::MAX_CATEGORY_LEN)?;
    let content = validate::required("content", &body.content)?;

    let author_name = match session.user.display_name.trim() {
        "" => DEFAULT_AUTHOR_NAME.to_string(),
        name => name.to_string(),
    };

    let notice = db
        .create_notice(DBNoticeCreate {
            title,
            category,
            content,
            date: today(),
            author_id: session.user_id(),
            author_name,
        })
        .await?;

    info!(notice_id = %notice.id, author_id = %notice.author_id, "notice created");

    Ok(ApiResponse::Created(notice.into()))
}
