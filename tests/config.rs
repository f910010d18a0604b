use voamigo::catalog::Locale;
use voamigo::cli::Args;
use voamigo::config::{Config, DEFAULT_API_BASE};

fn args() -> Args {
    Args {
        api_base: None,
        locale: None,
        verbose: false,
        message: vec![],
    }
}

#[test]
fn test_api_base_from_args_trims_trailing_slash() {
    let mut a = args();
    a.api_base = Some("https://api.example.com/".to_string());

    let config = Config::from_env_and_args(&a).unwrap();
    assert_eq!(config.api_base, "https://api.example.com");
}

#[test]
fn test_api_base_requires_http_scheme() {
    let mut a = args();
    a.api_base = Some("ftp://example.com".to_string());

    assert!(Config::from_env_and_args(&a).is_err());
}

#[test]
fn test_empty_api_base_rejected() {
    let mut a = args();
    a.api_base = Some("/".to_string());

    assert!(Config::from_env_and_args(&a).is_err());
}

#[test]
fn test_locale_from_args() {
    let mut a = args();
    a.api_base = Some(DEFAULT_API_BASE.to_string());
    a.locale = Some("en-US".to_string());

    let config = Config::from_env_and_args(&a).unwrap();
    assert_eq!(config.locale, Locale::En);
}

#[test]
fn test_locale_defaults_to_pt_br() {
    let mut a = args();
    a.api_base = Some(DEFAULT_API_BASE.to_string());

    let config = Config::from_env_and_args(&a).unwrap();
    assert_eq!(config.locale, Locale::PtBr);
}
