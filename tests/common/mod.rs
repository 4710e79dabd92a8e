#![allow(dead_code)]

use academy_portal::config::{EnvConfig, MailConfig, SessionConfig, CONFIG};
use academy_portal::db::db_service::DbService;
use std::sync::Arc;

pub mod client;

pub const BOOTSTRAP_ADMIN: &str = "owner@littlz.academy";
pub const MAX_LOGIN_ATTEMPTS: u32 = 5;

pub struct TestContext {
    pub db: Arc<DbService>,
}

impl TestContext {
    /// Fresh in-memory database per test, same migrations as production.
    pub async fn new() -> TestContext {
        let _ = CONFIG.set(get_test_config());

        let db = Arc::new(
            DbService::new("sqlite::memory:")
                .await
                .expect("Failed to initialize DbService"),
        );

        TestContext { db }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "sqlite::memory:".to_string(),
        session: SessionConfig {
            ttl_hours: 24,
            max_login_attempts: MAX_LOGIN_ATTEMPTS,
            lockout_secs: 300,
        },
        bootstrap_admin_email: Some(BOOTSTRAP_ADMIN.to_string()),
        mail: MailConfig {
            resend_key: None,
            api_url: "http://127.0.0.1:9/emails".to_string(),
            from: "test@littlz.academy".to_string(),
            consult_notify_to: vec!["staff@littlz.academy".to_string()],
        },
    }
}

// Test data helpers
pub mod test_data {
    use academy_portal::types::consult::{RConsult, RQuickConsult};
    use academy_portal::types::user::RSignup;

    pub const PASSWORD: &str = "littlz-123";

    pub fn sample_signup(email: &str) -> RSignup {
        RSignup {
            name: "김부모".to_string(),
            email: email.to_string(),
            password: PASSWORD.to_string(),
            confirm_password: PASSWORD.to_string(),
        }
    }

    pub fn sample_consult() -> RConsult {
        RConsult {
            parent_name: "김부모".to_string(),
            child_name: "김리틀".to_string(),
            child_age: "초등 3학년".to_string(),
            phone: "010-1234-5678".to_string(),
            email: Some("parent@example.com".to_string()),
            program: Some("창의사고력반".to_string()),
            message: Some("방과 후 수업 문의드립니다.".to_string()),
            agree_term: true,
        }
    }

    pub fn sample_quick_consult() -> RQuickConsult {
        RQuickConsult {
            name: "이부모".to_string(),
            phone: "010 9876 5432".to_string(),
            program: Some("독서논술".to_string()),
            message: None,
        }
    }
}
