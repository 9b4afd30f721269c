//! Runtime Configuration
//!
//! Build-time defaults, overridable per deployment from `<meta>` tags in
//! `index.html`:
//!
//! ```html
//! <meta name="employee-api-base" content="http://localhost:8080">
//! <meta name="employee-load-failure" content="notify">
//! ```

use employee_core::{DashboardConfig, LoadFailurePolicy};

const API_BASE_META: &str = "employee-api-base";
const LOAD_FAILURE_META: &str = "employee-load-failure";

/// Resolve the dashboard configuration for this page
pub fn load_config() -> DashboardConfig {
    let config = apply_page_overrides(
        DashboardConfig::from_build_env(),
        read_meta(API_BASE_META).as_deref(),
        read_meta(LOAD_FAILURE_META).as_deref(),
    );
    log::info!("[CONFIG] backend at {}, load failures {:?}", config.api_base, config.load_failure);
    config
}

fn apply_page_overrides(
    config: DashboardConfig,
    api_base: Option<&str>,
    load_failure: Option<&str>,
) -> DashboardConfig {
    let config = config.with_api_base_override(api_base);
    let Some(value) = load_failure else {
        return config;
    };
    match parse_load_failure(value) {
        Some(policy) => config.with_load_failure(policy),
        None => {
            log::warn!("[CONFIG] ignoring unknown {} value {:?}", LOAD_FAILURE_META, value);
            config
        }
    }
}

fn parse_load_failure(value: &str) -> Option<LoadFailurePolicy> {
    match value.trim().to_ascii_lowercase().as_str() {
        "silent" => Some(LoadFailurePolicy::Silent),
        "notify" => Some(LoadFailurePolicy::Notify),
        _ => None,
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!(r#"meta[name="{}"]"#, name))
        .ok()
        .flatten()?;
    element.get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_load_failure() {
        assert_eq!(parse_load_failure("notify"), Some(LoadFailurePolicy::Notify));
        assert_eq!(parse_load_failure(" Silent "), Some(LoadFailurePolicy::Silent));
        assert_eq!(parse_load_failure("loud"), None);
    }

    #[test]
    fn test_page_overrides() {
        let base = DashboardConfig::default();
        let config = apply_page_overrides(base.clone(), Some("http://localhost:8080/"), Some("notify"));
        assert_eq!(config.api_base, "http://localhost:8080");
        assert_eq!(config.load_failure, LoadFailurePolicy::Notify);

        let untouched = apply_page_overrides(base.clone(), None, Some("bogus"));
        assert_eq!(untouched, base);
    }

    #[test]
    fn test_blank_page_base_keeps_build_default() {
        let base = DashboardConfig::new("http://build-time.example");
        let config = apply_page_overrides(base.clone(), Some(""), None);
        assert_eq!(config.api_base, "http://build-time.example");
    }
}
