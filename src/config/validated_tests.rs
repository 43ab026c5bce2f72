//! Tests for validated configuration.

use std::time::Duration;

use http::Method;

use super::{ConfigError, field};
use super::cli::Cli;
use super::toml::TomlConfig;
use super::validated::{SinkConfig, ValidatedConfig, WebhookConfig};
use crate::resolver::{BuildError, DEFAULT_PATTERN, PatternKind};

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["checkip-agent"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

fn webhook(config: &ValidatedConfig) -> &WebhookConfig {
    match &config.sink {
        SinkConfig::Webhook(webhook) => webhook,
        SinkConfig::DryRun => panic!("expected webhook sink"),
    }
}

const HOOK: [&str; 2] = ["--url", "https://hooks.example.com/ddns"];

mod required_fields {
    use super::*;

    #[test]
    fn missing_url_returns_error() {
        let result = ValidatedConfig::from_raw(&cli(&[]), None);

        assert!(matches!(
            result,
            Err(ConfigError::Missing {
                field: field::WEBHOOK_URL,
                ..
            })
        ));
    }

    #[test]
    fn dry_run_does_not_need_url() {
        let config = ValidatedConfig::from_raw(&cli(&["--dry-run"]), None).unwrap();

        assert!(config.sink.is_dry_run());
    }

    #[test]
    fn dry_run_ignores_configured_webhook() {
        let toml = toml(
            r#"
            [webhook]
            url = "https://hooks.example.com/ddns"
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli(&["--dry-run"]), Some(&toml)).unwrap();

        assert!(config.sink.is_dry_run());
    }

    #[test]
    fn url_from_toml() {
        let toml = toml(
            r#"
            [webhook]
            url = "https://toml.example.com/hook"
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&toml)).unwrap();

        assert_eq!(webhook(&config).url.as_str(), "https://toml.example.com/hook");
    }
}

mod defaults {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let config = ValidatedConfig::from_raw(&cli(&HOOK), None).unwrap();

        assert_eq!(
            config.resolver.url().as_str(),
            "https://checkip.amazonaws.com/"
        );
        assert_eq!(config.resolver.extractor().pattern(), DEFAULT_PATTERN);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.poll_interval, Duration::from_secs(300));
        assert!(!config.once);
        assert!(!config.verbose);

        let hook = webhook(&config);
        assert_eq!(hook.method, Method::POST);
        assert!(hook.headers.is_empty());
        assert!(hook.body_template.is_none());
    }
}

mod precedence {
    use super::*;

    fn full_toml() -> TomlConfig {
        toml(
            r#"
            [resolver]
            url = "https://toml-check.example.com"
            pattern = '(?P<ip>\S+)'
            timeout = 7

            [webhook]
            url = "https://toml-hook.example.com"
            method = "PATCH"

            [monitor]
            poll_interval = 90
        "#,
        )
    }

    #[test]
    fn toml_values_apply_without_cli() {
        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&full_toml())).unwrap();

        assert_eq!(
            config.resolver.url().as_str(),
            "https://toml-check.example.com/"
        );
        assert_eq!(config.resolver.extractor().kind(), PatternKind::AddressGroup);
        assert_eq!(config.timeout, Duration::from_secs(7));
        assert_eq!(config.poll_interval, Duration::from_secs(90));
        assert_eq!(webhook(&config).method, Method::PATCH);
    }

    #[test]
    fn cli_values_override_toml() {
        let cli = cli(&[
            "--check-url",
            "https://cli-check.example.com",
            "--pattern",
            r"\d+\.\d+\.\d+\.\d+",
            "--timeout",
            "2",
            "--url",
            "https://cli-hook.example.com",
            "--method",
            "PUT",
            "--poll-interval",
            "15",
        ]);

        let config = ValidatedConfig::from_raw(&cli, Some(&full_toml())).unwrap();

        assert_eq!(
            config.resolver.url().as_str(),
            "https://cli-check.example.com/"
        );
        assert_eq!(config.resolver.extractor().kind(), PatternKind::BareMatch);
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert_eq!(config.poll_interval, Duration::from_secs(15));
        assert_eq!(webhook(&config).url.as_str(), "https://cli-hook.example.com/");
        assert_eq!(webhook(&config).method, Method::PUT);
    }

    #[test]
    fn once_uses_or_semantics() {
        let toml = toml("[monitor]\nonce = true");

        let from_toml = ValidatedConfig::from_raw(&cli(&HOOK), Some(&toml)).unwrap();
        let from_cli =
            ValidatedConfig::from_raw(&cli(&[HOOK[0], HOOK[1], "--once"]), None).unwrap();

        assert!(from_toml.once);
        assert!(from_cli.once);
    }
}

mod resolver_validation {
    use super::*;

    #[test]
    fn invalid_check_url_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--dry-run", "--check-url", "not a url"]), None);

        assert!(matches!(
            result,
            Err(ConfigError::Resolver(BuildError::InvalidUrl { ref url, .. })) if url == "not a url"
        ));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--dry-run", "--pattern", "(?P<ip>"]), None);

        assert!(matches!(
            result,
            Err(ConfigError::Resolver(BuildError::InvalidPattern { ref pattern, .. }))
                if pattern == "(?P<ip>"
        ));
    }

    #[test]
    fn invalid_toml_pattern_is_rejected() {
        let toml = toml("[resolver]\npattern = '['");

        let result = ValidatedConfig::from_raw(&cli(&["--dry-run"]), Some(&toml));

        assert!(matches!(
            result,
            Err(ConfigError::Resolver(BuildError::InvalidPattern { .. }))
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--dry-run", "--timeout", "0"]), None);

        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: field::TIMEOUT,
                ..
            })
        ));
    }

    #[test]
    fn dry_run_skips_broken_webhook_settings() {
        let toml = toml("[webhook]\nurl = \"::\"\nmethod = \"GE T\"");

        let config = ValidatedConfig::from_raw(&cli(&["--dry-run"]), Some(&toml)).unwrap();

        assert!(config.sink.is_dry_run());
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        let toml = toml("[monitor]\npoll_interval = 0");

        let result = ValidatedConfig::from_raw(&cli(&["--dry-run"]), Some(&toml));

        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: field::POLL_INTERVAL,
                ..
            })
        ));
    }
}

mod webhook_validation {
    use super::*;

    #[test]
    fn invalid_webhook_url_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--url", "::"]), None);

        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: field::WEBHOOK_URL,
                ..
            })
        ));
    }

    #[test]
    fn invalid_method_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&[HOOK[0], HOOK[1], "--method", "GE T"]), None);

        assert!(matches!(
            result,
            Err(ConfigError::Invalid { field: field::METHOD, ref value, .. }) if value == "GE T"
        ));
    }

    #[test]
    fn headers_accept_both_formats() {
        let config = ValidatedConfig::from_raw(
            &cli(&[HOOK[0], HOOK[1], "--header", "X-One=1", "--header", "X-Two: 2"]),
            None,
        )
        .unwrap();

        let headers = &webhook(&config).headers;
        assert_eq!(headers.get("x-one").unwrap(), "1");
        assert_eq!(headers.get("x-two").unwrap(), "2");
    }

    #[test]
    fn cli_header_replaces_toml_header() {
        let toml = toml(
            r#"
            [webhook.headers]
            X-Zone = "toml"
            X-Keep = "kept"
        "#,
        );

        let config = ValidatedConfig::from_raw(
            &cli(&[HOOK[0], HOOK[1], "--header", "X-Zone=cli"]),
            Some(&toml),
        )
        .unwrap();

        let headers = &webhook(&config).headers;
        assert_eq!(headers.get("x-zone").unwrap(), "cli");
        assert_eq!(headers.get("x-keep").unwrap(), "kept");
    }

    #[test]
    fn malformed_header_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&[HOOK[0], HOOK[1], "--header", "NoSeparator"]), None);

        assert!(matches!(
            result,
            Err(ConfigError::Invalid { field: field::HEADER, ref value, .. }) if value == "NoSeparator"
        ));
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        let result =
            ValidatedConfig::from_raw(&cli(&[HOOK[0], HOOK[1], "--header", "Bad Name=1"]), None);

        assert!(matches!(
            result,
            Err(ConfigError::Invalid { field: field::HEADER, ref value, .. }) if value == "Bad Name"
        ));
    }

    #[test]
    fn invalid_header_value_is_reported_by_name() {
        let toml = toml("[webhook.headers]\nX-Token = \"line\\nbreak\"");

        let err = ValidatedConfig::from_raw(&cli(&HOOK), Some(&toml)).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Invalid { field: field::HEADER, ref value, .. } if value == "X-Token"
        ));
        assert!(!err.to_string().contains("break"));
    }

    #[test]
    fn bearer_sets_authorization() {
        let config =
            ValidatedConfig::from_raw(&cli(&[HOOK[0], HOOK[1], "--bearer", "abc"]), None).unwrap();

        assert_eq!(
            webhook(&config)
                .headers
                .get(http::header::AUTHORIZATION)
                .unwrap(),
            "Bearer abc"
        );
    }

    #[test]
    fn valid_template_is_kept() {
        let config = ValidatedConfig::from_raw(
            &cli(&[HOOK[0], HOOK[1], "--body-template", r#"{"ip":"{{new_ip}}"}"#]),
            None,
        )
        .unwrap();

        assert_eq!(
            webhook(&config).body_template.as_deref(),
            Some(r#"{"ip":"{{new_ip}}"}"#)
        );
    }

    #[test]
    fn invalid_template_is_rejected() {
        let result = ValidatedConfig::from_raw(
            &cli(&[HOOK[0], HOOK[1], "--body-template", "{{#if}}"]),
            None,
        );

        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: field::BODY_TEMPLATE,
                ..
            })
        ));
    }
}

mod loading {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    use crate::config::write_default_config;

    #[test]
    fn load_without_config_uses_cli_only() {
        let config = ValidatedConfig::load(&cli(&["--dry-run"])).unwrap();

        assert!(config.sink.is_dry_run());
    }

    #[test]
    fn load_reads_config_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[monitor]\npoll_interval = 45").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = ValidatedConfig::load(&cli(&["--dry-run", "-c", &path])).unwrap();

        assert_eq!(config.poll_interval, Duration::from_secs(45));
    }

    #[test]
    fn written_default_config_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("checkip-agent.toml");

        write_default_config(&path).unwrap();
        let path_str = path.to_str().unwrap().to_string();
        let config = ValidatedConfig::load(&cli(&["--dry-run", "-c", &path_str])).unwrap();

        assert_eq!(config.poll_interval, Duration::from_secs(300));
    }

    #[test]
    fn write_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.toml");

        assert!(matches!(
            write_default_config(&path),
            Err(ConfigError::Write { .. })
        ));
    }
}

mod display {
    use super::*;

    #[test]
    fn display_summarizes_config() {
        let config = ValidatedConfig::from_raw(&cli(&HOOK), None).unwrap();
        let text = config.to_string();

        assert!(text.contains("https://checkip.amazonaws.com/"));
        assert!(text.contains("sink=POST https://hooks.example.com/ddns"));
        assert!(text.contains("poll_interval=300s"));
    }

    #[test]
    fn display_does_not_leak_headers() {
        let config =
            ValidatedConfig::from_raw(&cli(&[HOOK[0], HOOK[1], "--bearer", "s3cret"]), None)
                .unwrap();

        assert!(!config.to_string().contains("s3cret"));
    }

    #[test]
    fn display_shows_dry_run() {
        let config = ValidatedConfig::from_raw(&cli(&["--dry-run"]), None).unwrap();

        assert!(config.to_string().ends_with("sink=dry-run"));
    }
}
