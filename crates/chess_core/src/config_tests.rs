use super::*;

#[test]
fn test_defaults() {
    let cfg = SelectorConfig::default();
    assert_eq!(cfg.max_moves, 256);
    assert_eq!(cfg.max_token_len, 15);
    assert!(!cfg.enforce_deadline);
}

#[test]
fn test_empty_toml_gives_defaults() {
    assert_eq!(SelectorConfig::from_toml("").unwrap(), SelectorConfig::default());
}

#[test]
fn test_partial_toml() {
    let cfg = SelectorConfig::from_toml("enforce_deadline = true\nmax_moves = 8\n").unwrap();
    assert_eq!(cfg.max_moves, 8);
    assert_eq!(cfg.max_token_len, 15);
    assert!(cfg.enforce_deadline);
}

#[test]
fn test_bad_toml_is_parse_error() {
    let err = SelectorConfig::from_toml("max_moves = \"lots\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = SelectorConfig::load("/nonexistent/selector.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
