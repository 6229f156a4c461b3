use kavya_client::application::config::Config;
use kavya_client::constants::{DEFAULT_APP_ORIGIN, ENV_API_BASE_URL};
use std::env;

#[test]
fn test_with_base_url_appends_api() {
    let config = Config::with_base_url("https://kavya-learning-system.onrender.com");
    assert_eq!(
        config.rest_api.base_url,
        "https://kavya-learning-system.onrender.com/api"
    );
    assert_eq!(config.rest_api.origin, DEFAULT_APP_ORIGIN);
}

#[test]
fn test_url_for_concatenates_resource_paths() {
    let config = Config::with_base_url("https://host");
    assert_eq!(config.url_for("/courses"), "https://host/api/courses");
    assert_eq!(config.url_for("/quiz?courseId=42"), "https://host/api/quiz?courseId=42");
    assert_eq!(
        config.url_for("/progress/certificates/7/download"),
        "https://host/api/progress/certificates/7/download"
    );
}

#[test]
fn test_new_reads_root_from_environment() {
    unsafe {
        env::set_var(ENV_API_BASE_URL, "https://from-env.example.com/");
        let config = Config::new();
        assert_eq!(config.rest_api.base_url, "https://from-env.example.com/api");

        env::remove_var(ENV_API_BASE_URL);
        let config = Config::new();
        assert_eq!(config.rest_api.base_url, "/api");
        assert_eq!(config.url_for("/events"), "/api/events");
    }
}

#[test]
fn test_global_is_resolved_once() {
    let first = Config::global();
    let second = Config::global();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_config_display_is_json() {
    let config = Config::with_base_url("https://host");
    let shown = config.to_string();
    assert!(shown.contains("https://host/api"));
}
