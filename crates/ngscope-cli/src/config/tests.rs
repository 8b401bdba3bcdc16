use crate::cli::ReportFormat;
use crate::config::*;
use std::path::PathBuf;

#[test]
fn test_serialization_uses_camel_case() {
    let config = NgscopeConfig {
        output: Some(PathBuf::from("overview.md")),
        include_hidden: true,
        ..NgscopeConfig::default_config()
    };
    let json = serde_json::to_value(&config).unwrap();

    assert!(json.get("includeHidden").is_some());
    assert!(json.get("maxFileSize").is_some());
    assert!(json.get("projectDocuments").is_some());
    assert!(json.get("include_hidden").is_none());
    assert_eq!(json["format"], "markdown");

    let back: NgscopeConfig = serde_json::from_value(json).unwrap();
    assert_eq!(back, config);

    let minimal = serde_json::to_value(NgscopeConfig::default_config()).unwrap();
    assert!(minimal.get("output").is_none());
}

#[test]
fn test_unknown_fields_rejected() {
    let result: Result<NgscopeConfig, _> = serde_json::from_str(r#"{ "entry": ["x"] }"#);
    assert!(result.is_err());
}

#[test]
fn test_missing_fields_use_defaults() {
    let config: NgscopeConfig = serde_json::from_str(r#"{ "format": "json" }"#).unwrap();
    assert_eq!(config.format, ReportFormat::Json);
    assert_eq!(config.extensions, vec!["ts"]);
    assert_eq!(config.ignore, vec!["node_modules"]);
    assert!(config.project_documents);
}

#[test]
fn test_validation() {
    assert!(NgscopeConfig::default_config().validate().is_ok());

    assert!(
        NgscopeConfig {
            extensions: vec![],
            ..NgscopeConfig::default_config()
        }
        .validate()
        .is_err()
    );

    assert!(
        NgscopeConfig {
            extensions: vec![String::new()],
            ..NgscopeConfig::default_config()
        }
        .validate()
        .is_err()
    );

    assert!(
        NgscopeConfig {
            max_file_size: 0,
            ..NgscopeConfig::default_config()
        }
        .validate()
        .is_err()
    );
}

#[test]
fn test_output_target() {
    let config = NgscopeConfig::default_config();
    assert_eq!(
        config.output_target(),
        OutputTarget::File(PathBuf::from("project-overview.md"))
    );

    let json = NgscopeConfig {
        format: ReportFormat::Json,
        ..NgscopeConfig::default_config()
    };
    assert_eq!(
        json.output_target(),
        OutputTarget::File(PathBuf::from("project-overview.json"))
    );

    let stdout = NgscopeConfig {
        output: Some(PathBuf::from("-")),
        ..NgscopeConfig::default_config()
    };
    assert_eq!(stdout.output_target(), OutputTarget::Stdout);
}

#[test]
fn test_analyzer_config_carries_filters() {
    let config = NgscopeConfig {
        root: PathBuf::from("apps/shop"),
        ignore: vec!["node_modules".into(), "dist".into()],
        max_file_size: 1024,
        project_documents: false,
        ..NgscopeConfig::default_config()
    };
    let analyzer = config.analyzer_config();

    assert_eq!(analyzer.root, Some(PathBuf::from("apps/shop")));
    assert_eq!(analyzer.discovery.ignore, vec!["node_modules", "dist"]);
    assert_eq!(analyzer.max_file_size, 1024);
    assert!(!analyzer.project_documents);
    assert!(analyzer.runtime.is_none());
}
