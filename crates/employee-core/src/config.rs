//! Dashboard configuration

use std::time::Duration;

/// Deployed backend origin used when nothing overrides it
pub const DEFAULT_API_BASE: &str = "https://employee-backend-h8xx.onrender.com";

/// How long a status message stays on screen
pub const DEFAULT_MESSAGE_TTL: Duration = Duration::from_millis(1800);

/// What to do when the employee list cannot be loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadFailurePolicy {
    /// Keep the stale list and say nothing
    #[default]
    Silent,
    /// Keep the stale list and show a "Load failed!" message
    Notify,
}

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Backend origin, without trailing slash (e.g., "http://localhost:8080")
    pub api_base: String,

    /// Status message lifetime
    pub message_ttl: Duration,

    /// Reaction to list-load failures
    pub load_failure: LoadFailurePolicy,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl DashboardConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: normalize_base(&api_base.into()),
            message_ttl: DEFAULT_MESSAGE_TTL,
            load_failure: LoadFailurePolicy::Silent,
        }
    }

    /// Configuration baked in at build time.
    ///
    /// `EMPLOYEE_API_BASE` and `EMPLOYEE_MESSAGE_TTL_MS` are read by the
    /// compiler, since a WASM bundle has no process environment.
    pub fn from_build_env() -> Self {
        let config = Self::default().with_api_base_override(option_env!("EMPLOYEE_API_BASE"));
        match option_env!("EMPLOYEE_MESSAGE_TTL_MS").and_then(|v| v.trim().parse::<u64>().ok()) {
            Some(ms) => config.with_message_ttl(Duration::from_millis(ms)),
            None => config,
        }
    }

    /// Replace the origin unless the override is missing or blank
    pub fn with_api_base_override(mut self, value: Option<&str>) -> Self {
        if let Some(base) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.api_base = normalize_base(base);
        }
        self
    }

    pub fn with_message_ttl(mut self, ttl: Duration) -> Self {
        self.message_ttl = ttl;
        self
    }

    pub fn with_load_failure(mut self, policy: LoadFailurePolicy) -> Self {
        self.load_failure = policy;
        self
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
