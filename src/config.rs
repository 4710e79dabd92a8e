use std::env;
use std::sync::OnceLock;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub session: SessionConfig,
    pub bootstrap_admin_email: Option<String>,
    pub mail: MailConfig,
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub ttl_hours: i64,
    pub max_login_attempts: u32,
    pub lockout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct MailConfig {
    /// Resend API key. Mail is disabled when unset.
    pub resend_key: Option<String>,
    pub api_url: String,
    pub from: String,
    pub consult_notify_to: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_hours: 24 * 7,
            max_login_attempts: 5,
            lockout_secs: 300,
        }
    }
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    fn get_env_opt(key: &str) -> Option<String> {
        env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
    }

    fn get_env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
        Self::get_env_opt(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let defaults = SessionConfig::default();

        EnvConfig {
            port: Self::get_env_or("PORT", 8080),
            db_url: Self::get_env("DATABASE_URL"),
            session: SessionConfig {
                ttl_hours: Self::get_env_or("SESSION_TTL_HOURS", defaults.ttl_hours),
                max_login_attempts: Self::get_env_or("LOGIN_MAX_ATTEMPTS", defaults.max_login_attempts),
                lockout_secs: Self::get_env_or("LOGIN_LOCKOUT_SECS", defaults.lockout_secs),
            },
            bootstrap_admin_email: Self::get_env_opt("BOOTSTRAP_ADMIN_EMAIL")
                .map(|e| e.to_lowercase()),
            mail: MailConfig {
                resend_key: Self::get_env_opt("RESEND_KEY"),
                api_url: Self::get_env_opt("RESEND_API_URL")
                    .unwrap_or_else(|| "https://api.resend.com/emails".to_string()),
                from: Self::get_env_opt("MAIL_FROM")
                    .unwrap_or_else(|| "noreply@littlz.academy".to_string()),
                consult_notify_to: Self::get_env_opt("CONSULT_NOTIFY_TO")
                    .map(|v| {
                        v.split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}
