use super::*;

#[test]
fn with_api_url_defaults_to_localhost() {
    let cfg = ClientConfig::with_api_url(None);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.page_load_timeout, DEFAULT_PAGE_LOAD_TIMEOUT);
    assert_eq!(cfg.page_load_retries, DEFAULT_PAGE_LOAD_RETRIES);
}

#[test]
fn with_api_url_blank_falls_back_to_default() {
    let cfg = ClientConfig::with_api_url(Some("   "));
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn with_api_url_trims_trailing_slashes() {
    let cfg = ClientConfig::with_api_url(Some("https://hotel.example.com/api//"));
    assert_eq!(cfg.api_base_url, "https://hotel.example.com/api");
}

#[test]
fn toast_durations_match_kinds() {
    assert_eq!(SUCCESS_TOAST_DURATION.as_millis(), 3000);
    assert_eq!(ERROR_TOAST_DURATION.as_millis(), 5000);
}
