use crate::db::db_service::DbService;
use crate::types::consult::{Consultation, DBConsultCreate, RConsult, SOURCE_CONSULT_PAGE};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::{mail::notify_consult_received, validate};
use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

impl RConsult {
    pub fn validate(self) -> Result<DBConsultCreate, AppError> {
        if !self.agree_term {
            return Err(AppError::Validation(
                "consent to personal data collection is required".into(),
            ));
        }
        Ok(DBConsultCreate {
            source: SOURCE_CONSULT_PAGE,
            parent_name: validate::max_len(
                "parent_name",
                validate::required("parent_name", &self.parent_name)?,
                validate::MAX_NAME_LEN,
            )?,
            child_name: Some(validate::max_len(
                "child_name",
                validate::required("child_name", &self.child_name)?,
                validate::MAX_NAME_LEN,
            )?),
            child_age: Some(validate::max_len(
                "child_age",
                validate::required("child_age", &self.child_age)?,
                validate::MAX_NAME_LEN,
            )?),
            phone: validate::phone(&self.phone)?,
            email: validate::optional_email(self.email.as_deref())?,
            program: validate::optional("program", self.program.as_deref(), validate::MAX_PROGRAM_LEN)?,
            message: validate::optional("message", self.message.as_deref(), validate::MAX_MESSAGE_LEN)?,
        })
    }
}

#[post("")]
pub async fn submit(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    body: web::Json<RConsult>,
) -> ApiResult<Consultation> {
    let record = body.into_inner().validate()?;
    let consult: Consultation = db.create_consultation(record).await?.into();

    info!(consultation_id = %consult.id, source = %consult.source, "consultation received");
    notify_consult_received(consult.clone());

    Ok(ApiResponse::Created(consult))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RConsult {
        RConsult {
            parent_name: " 김부모 ".into(),
            child_name: "김리틀".into(),
            child_age: "초등 2학년".into(),
            phone: "010-1234-5678".into(),
            email: Some("".into()),
            program: Some("창의사고력반".into()),
            message: None,
            agree_term: true,
        }
    }

    #[test]
    fn valid_form_is_cleaned() {
        let r = form().validate().unwrap();
        assert_eq!(r.parent_name, "김부모");
        assert_eq!(r.email, None);
        assert_eq!(r.program.as_deref(), Some("창의사고력반"));
        assert_eq!(r.source, SOURCE_CONSULT_PAGE);
    }

    #[test]
    fn consent_is_required() {
        let mut f = form();
        f.agree_term = false;
        assert!(matches!(f.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn child_fields_are_required() {
        let mut f = form();
        f.child_age = "  ".into();
        assert!(matches!(f.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut f = form();
        f.email = Some("parent-at-example".into());
        assert!(matches!(f.validate(), Err(AppError::InvalidEmail)));
    }
}
