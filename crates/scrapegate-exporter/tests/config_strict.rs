#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use scrapegate_core::error::ErrorCode;
use scrapegate_exporter::config::{self, ConfigSource, ExporterConfig};

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |k| map.get(k).cloned()
}

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
exporter:
  listen: "0.0.0.0:8001"
  metric_path: "/metrics" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code(), ErrorCode::Config);
}

#[test]
fn ok_minimal_config_uses_defaults() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.exporter.listen, "0.0.0.0:8001");
    assert_eq!(cfg.exporter.metrics_path, "/metrics");
    assert!(!cfg.exporter.count_own_requests);
    assert!(cfg.metrics.default_metrics);
    assert!(cfg.metrics.preregister.is_empty());
    assert_eq!(
        cfg.exporter.listen_addr().unwrap(),
        "0.0.0.0:8001".parse().unwrap()
    );
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
exporter:
  listen: "127.0.0.1:9100"
  metrics_path: "/internal/metrics"
  count_own_requests: true
metrics:
  default_metrics: false
  namespace: "frontend"
  preregister:
    - { method: "GET", route: "/", status: "200" }
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.exporter.metrics_path, "/internal/metrics");
    assert!(cfg.exporter.count_own_requests);
    assert!(!cfg.metrics.default_metrics);

    let opts = cfg.metrics.options();
    assert_eq!(opts.namespace.as_deref(), Some("frontend"));
    assert_eq!(opts.preregister.len(), 1);
    assert_eq!(opts.preregister[0].route, "/");
}

#[test]
fn empty_namespace_means_none() {
    let cfg = config::load_from_str("version: 1\nmetrics:\n  namespace: \"\"\n").unwrap();
    assert_eq!(cfg.metrics.options().namespace, None);
}

#[test]
fn unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code(), ErrorCode::UnsupportedVersion);
}

#[test]
fn malformed_listen_is_rejected() {
    let err = config::load_from_str("version: 1\nexporter:\n  listen: \"0.0.0.0:notaport\"\n")
        .expect_err("must fail");
    assert_eq!(err.code(), ErrorCode::Config);
}

#[test]
fn metrics_path_rules() {
    for bad in ["metrics", "/healthz", "/metrics/*", "/:x", "/metrics/{id}"] {
        let s = format!("version: 1\nexporter:\n  metrics_path: \"{bad}\"\n");
        let err = config::load_from_str(&s).expect_err("must fail");
        assert_eq!(err.code(), ErrorCode::Config, "path {bad}");
    }
}

#[test]
fn invalid_namespace_and_empty_labels_are_rejected() {
    let err = config::load_from_str("version: 1\nmetrics:\n  namespace: \"9lives\"\n")
        .expect_err("must fail");
    assert_eq!(err.code(), ErrorCode::Config);

    let bad = r#"
version: 1
metrics:
  preregister:
    - { method: "GET", route: "", status: "200" }
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code(), ErrorCode::Config);
}

#[test]
fn env_overrides_file_values() {
    let mut cfg = ExporterConfig::default();
    config::apply_overrides(
        &mut cfg,
        env_of(&[
            (config::ENV_LISTEN, "127.0.0.1:9999"),
            (config::ENV_METRICS_PATH, "/m"),
        ]),
    );
    assert_eq!(cfg.exporter.listen, "127.0.0.1:9999");
    assert_eq!(cfg.exporter.metrics_path, "/m");
    cfg.validate().unwrap();
}

#[test]
fn source_resolution_order() {
    let env = env_of(&[(config::ENV_CONFIG, "/etc/scrapegate.yaml")]);

    let from_arg = config::resolve_source(Some("cli.yaml".into()), &env);
    assert_eq!(
        from_arg,
        ConfigSource { path: "cli.yaml".into(), required: true }
    );

    let from_env = config::resolve_source(None, &env);
    assert_eq!(from_env.path, "/etc/scrapegate.yaml");
    assert!(from_env.required);

    let fallback = config::resolve_source(None, env_of(&[]));
    assert_eq!(fallback.path, config::DEFAULT_CONFIG_PATH);
    assert!(!fallback.required);
}

#[test]
fn missing_default_file_falls_back_to_defaults() {
    let source = ConfigSource {
        path: "definitely/not/here/scrapegate.yaml".into(),
        required: false,
    };
    let cfg = config::load(&source, env_of(&[(config::ENV_LISTEN, "127.0.0.1:0")])).unwrap();
    assert_eq!(cfg.exporter.listen, "127.0.0.1:0");
    assert_eq!(cfg.exporter.metrics_path, "/metrics");
}

#[test]
fn missing_required_file_is_an_error() {
    let source = ConfigSource {
        path: "definitely/not/here/scrapegate.yaml".into(),
        required: true,
    };
    let err = config::load(&source, env_of(&[])).expect_err("must fail");
    assert_eq!(err.code(), ErrorCode::Config);
}
