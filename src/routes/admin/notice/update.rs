use crate::db::db_service::DbService;
use crate::types::error::AppError;
use crate::types::notice::{today, DBNoticePatch, Notice, RNoticeUpdate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::AuthSession;
use crate::utils::validate;
use actix_web::{put, web};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

impl RNoticeUpdate {
    /// Provided fields must be non-blank; absent ones stay untouched.
    /// Any edit re-dates the notice to today.
    pub fn into_patch(self) -> Result<DBNoticePatch, AppError> {
        let title = self
            .title
            .map(|v| validate::required("title", &v))
            .transpose()?
            .map(|v| validate::max_len("title", v, validate::MAX_TITLE_LEN))
            .transpose()?;
        let category = self
            .category
            .map(|v| validate::required("category", &v))
            .transpose()?
            .map(|v| validate::max_len("category", v, validate::MAX_CATEGORY_LEN))
            .transpose()?;
        let content = self
            .content
            .map(|v| validate::required("content", &v))
            .transpose()?;

        if title.is_none() && category.is_none() && content.is_none() {
            return Err(AppError::BadRequest("nothing to update".into()));
        }

        Ok(DBNoticePatch {
            title,
            category,
            content,
            date: Some(today()),
        })
    }
}

#[put("/{id}")]
pub async fn update(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    session: AuthSession,
    path: web::Path<Uuid>,
    body: web::Json<RNoticeUpdate>,
) -> ApiResult<Notice> {
    let id = path.into_inner();
    let patch = body.into_inner().into_patch()?;
    let notice = db.update_notice(&id, patch).await?;

    info!(notice_id = %id, editor_id = %session.user_id(), "notice updated");

    Ok(ApiResponse::Ok(notice.into()))
}
