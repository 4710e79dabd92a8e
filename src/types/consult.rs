use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const SOURCE_CONSULT_PAGE: &str = "consult_page";
pub const SOURCE_HOME: &str = "home";

/// Full consultation page form.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RConsult {
    pub parent_name: String,
    pub child_name: String,
    pub child_age: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub agree_term: bool,
}

/// Short form on the home page.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RQuickConsult {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ConsultQuery {
    #[serde(default)]
    pub pending: bool,
}

#[derive(Debug, Clone)]
pub struct DBConsultCreate {
    pub source: &'static str,
    pub parent_name: String,
    pub child_name: Option<String>,
    pub child_age: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub program: Option<String>,
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Consultation {
    pub id: Uuid,
    pub source: String,
    pub parent_name: String,
    pub child_name: Option<String>,
    pub child_age: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub program: Option<String>,
    pub message: Option<String>,
    pub handled: bool,
    pub created_at: DateTime<Utc>,
}

impl From<entity::consultation::Model> for Consultation {
    fn from(m: entity::consultation::Model) -> Self {
        Self {
            id: m.id,
            source: m.source,
            parent_name: m.parent_name,
            child_name: m.child_name,
            child_age: m.child_age,
            phone: m.phone,
            email: m.email,
            program: m.program,
            message: m.message,
            handled: m.handled,
            created_at: m.created_at,
        }
    }
}
