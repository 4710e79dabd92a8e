use crate::db::db_service::DbService;
use crate::types::consult::{Consultation, DBConsultCreate, RQuickConsult, SOURCE_HOME};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::{mail::notify_consult_received, validate};
use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

impl RQuickConsult {
    pub fn validate(self) -> Result<DBConsultCreate, AppError> {
        Ok(DBConsultCreate {
            source: SOURCE_HOME,
            parent_name: validate::display_name(&self.name)?,
            child_name: None,
            child_age: None,
            phone: validate::phone(&self.phone)?,
            email: None,
            program: validate::optional("program", self.program.as_deref(), validate::MAX_PROGRAM_LEN)?,
            message: validate::optional("message", self.message.as_deref(), validate::MAX_MESSAGE_LEN)?,
        })
    }
}

/// Home page form: name and phone are enough to call back.
#[post("/quick")]
pub async fn quick(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    body: web::Json<RQuickConsult>,
) -> ApiResult<Consultation> {
    let record = body.into_inner().validate()?;
    let consult: Consultation = db.create_consultation(record).await?.into();

    info!(consultation_id = %consult.id, source = %consult.source, "consultation received");
    notify_consult_received(consult.clone());

    Ok(ApiResponse::Created(consult))
}
