use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use moka::sync::Cache;
use tracing::warn;

use crate::config::SessionConfig;
use crate::types::error::AppError;

/// Upper bound on tracked emails. Oldest entries are evicted past this.
const MAX_TRACKED_KEYS: u64 = 100_000;

/// Per-email login attempt counter. Each attempt is counted before the
/// password is checked; a success clears the count. Once `max_attempts`
/// pile up inside `window`, further attempts are refused until the window
/// passes.
pub struct LoginThrottle {
    max_attempts: u32,
    window: Duration,
    attempts: Cache<String, Arc<Mutex<Attempts>>>,
}

struct Attempts {
    count: u32,
    first_at: Instant,
}

impl LoginThrottle {
    pub fn new(max_attempts: u32, window: Duration) -> Self {
        Self {
            max_attempts,
            window,
            attempts: Cache::builder()
                .max_capacity(MAX_TRACKED_KEYS)
                .time_to_live(window)
                .build(),
        }
    }

    pub fn from_config(cfg: &SessionConfig) -> Self {
        Self::new(cfg.max_login_attempts, Duration::from_secs(cfg.lockout_secs))
    }

    /// Checks the limit and counts this attempt under one lock, so
    /// concurrent attempts for the same key cannot all slip through.
    pub fn try_begin(&self, key: &str) -> Result<(), AppError> {
        if self.max_attempts == 0 {
            return Ok(());
        }
        let entry = self.attempts.get_with(key.to_string(), || {
            Arc::new(Mutex::new(Attempts { count: 0, first_at: Instant::now() }))
        });
        let mut a = entry.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if a.first_at.elapsed() >= self.window {
            a.count = 0;
            a.first_at = Instant::now();
        }
        if a.count >= self.max_attempts {
            warn!("login throttled");
            return Err(AppError::TooManyRequests);
        }
        a.count += 1;
        Ok(())
    }

    pub fn clear(&self, key: &str) {
        self.attempts.invalidate(key);
    }

    #[cfg(test)]
    fn tracked(&self) -> u64 {
        self.attempts.run_pending_tasks();
        self.attempts.entry_count()
    }
}
