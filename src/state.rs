//! Shared application state: user store and server metadata.

use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::users::UserStore;

/// Shared application state, cloneable across handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    users: UserStore,
    cors_origins: Vec<String>,
    start_time: Instant,
}

impl AppState {
    /// Creates a new application state from config.
    pub fn new(config: &Config) -> Self {
        Self {
            inner: Arc::new(Inner {
                users: UserStore::new(),
                cors_origins: config.cors_origins.clone(),
                start_time: Instant::now(),
            }),
        }
    }

    /// Creates a default state (for tests and ephemeral use).
    pub fn new_in_memory() -> Self {
        Self {
            inner: Arc::new(Inner {
                users: UserStore::new(),
                cors_origins: vec![],
                start_time: Instant::now(),
            }),
        }
    }

    /// Returns a reference to the user store.
    pub fn users(&self) -> &UserStore {
        &self.inner.users
    }

    /// Returns the configured CORS allowed origins.
    pub fn cors_origins(&self) -> &[String] {
        &self.inner.cors_origins
    }

    /// Returns the server uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.inner.start_time.elapsed().as_secs()
    }
}
