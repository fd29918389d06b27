use std::io::Write;

use serial_test::serial;

use crate::Error;
use crate::StopwatchConfig;
use crate::TargetSelector;
use crate::TargetSet;

#[test]
fn test_defaults_select_the_default_query() {
    let config = StopwatchConfig::default();

    assert_eq!(config.targets, vec![String::new()]);
    assert_eq!(config.identity_param, "wp_query_id");
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_load_without_sources_yields_defaults() {
    let config = StopwatchConfig::load(None).expect("defaults should load");

    assert_eq!(config, StopwatchConfig::default());
}

#[test]
fn test_empty_target_list_is_rejected() {
    let config = StopwatchConfig {
        targets: vec![],
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration(_)));
}

#[test]
fn test_empty_identity_param_is_rejected() {
    let config = StopwatchConfig {
        identity_param: String::new(),
        ..Default::default()
    };

    assert!(config.validate().is_err());
}

#[test]
#[serial]
fn test_load_from_toml_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(
        file,
        "targets = [\"products\", \"orders\"]\nidentity_param = \"query_tag\""
    )
    .expect("write config");

    let config = StopwatchConfig::load(file.path().to_str()).expect("file should load");

    assert_eq!(
        config.targets,
        vec!["products".to_string(), "orders".to_string()]
    );
    assert_eq!(config.identity_param, "query_tag");
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(file, "targets = [\"products\"]").expect("write config");

    temp_env::with_vars([("QSW_TARGETS", Some("orders,users"))], || {
        let config = StopwatchConfig::load(file.path().to_str()).expect("overlay should load");

        assert_eq!(
            config.targets,
            vec!["orders".to_string(), "users".to_string()]
        );
    });
}

#[test]
#[serial]
fn test_missing_file_is_an_error() {
    let result = StopwatchConfig::load(Some("definitely/not/here.toml"));

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_into_selector_keeps_configured_targets() {
    let config = StopwatchConfig {
        targets: vec!["products".to_string()],
        ..Default::default()
    };

    let set = TargetSet::normalize(config.into_selector().resolve_targets());
    assert!(set.contains("products"));
    assert!(!set.contains(""));
}
