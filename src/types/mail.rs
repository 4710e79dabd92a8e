use serde::Serialize;

/// Resend `POST /emails` payload. Unset optionals are left out of the JSON.
#[derive(Serialize, Debug, Default)]
pub struct SendEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Vec<String>>,
}
