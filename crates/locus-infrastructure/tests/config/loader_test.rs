//! Configuration Loader Tests

use figment::Jail;
use locus_domain::constants::{CLICKHOUSE_IMPLEMENTATION, DUCKDB_IMPLEMENTATION};
use locus_domain::value_objects::MigrationsPolicy;
use locus_domain::{Error, Setting, SettingValue};
use locus_infrastructure::config::{AppConfig, ConfigLoader};
use locus_infrastructure::constants::{DEFAULT_CONFIG_FILENAME, DEFAULT_LOG_LEVEL};

#[test]
fn test_config_loader_defaults_in_empty_directory() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config.settings.database_implementation, DUCKDB_IMPLEMENTATION);
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        Ok(())
    });
}

#[test]
fn test_config_loader_reads_default_file_name() {
    Jail::expect_with(|jail| {
        jail.create_file(
            DEFAULT_CONFIG_FILENAME,
            r#"
                [settings]
                database_implementation = "clickhouse"
                clickhouse_host = "db.internal"
                clickhouse_port = "8123"

                [logging]
                level = "debug"
            "#,
        )?;

        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config.settings.database_implementation, "clickhouse");
        assert_eq!(
            config.settings.get(Setting::DatabaseImplementation),
            SettingValue::Text(CLICKHOUSE_IMPLEMENTATION.to_string())
        );
        assert_eq!(config.settings.clickhouse_host.as_deref(), Some("db.internal"));
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            DEFAULT_CONFIG_FILENAME,
            r#"
                [settings]
                environment = "from-file"
                persist_directory = "/srv/file"
            "#,
        )?;
        jail.set_env("LOCUS_ENVIRONMENT", "from-env");
        jail.set_env("LOCUS_ENABLE_SYSTEM_RESET", "true");
        jail.set_env("LOCUS_MIGRATIONS_POLICY", "validate");

        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config.settings.environment, "from-env");
        assert_eq!(config.settings.persist_directory, "/srv/file");
        assert!(config.settings.enable_system_reset);
        assert_eq!(config.settings.migrations_policy, MigrationsPolicy::Validate);
        Ok(())
    });
}

#[test]
fn test_numeric_env_values_become_text() {
    Jail::expect_with(|jail| {
        jail.set_env("LOCUS_SERVER_HTTP_PORT", "8000");
        jail.set_env("LOCUS_CLICKHOUSE_PORT", "9000");

        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config.settings.server_http_port.as_deref(), Some("8000"));
        assert_eq!(config.settings.clickhouse_port.as_deref(), Some("9000"));
        Ok(())
    });
}

#[test]
fn test_numeric_env_values_for_plain_text_options() {
    Jail::expect_with(|jail| {
        jail.set_env("LOCUS_PERSIST_DIRECTORY", "2024");
        jail.set_env("LOCUS_ENVIRONMENT", "42");
        jail.set_env("LOCUS_DATABASE_IMPLEMENTATION", "7");

        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config.settings.persist_directory, "2024");
        assert_eq!(config.settings.environment, "42");
        assert_eq!(config.settings.database_implementation, "7");
        Ok(())
    });
}

#[test]
fn test_log_env_goes_to_logging_section() {
    Jail::expect_with(|jail| {
        jail.set_env("LOCUS_LOG_LEVEL", "warn");
        jail.set_env("LOCUS_LOG_JSON_FORMAT", "true");
        jail.set_env("LOCUS_LOG", "locus=trace");

        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.json_format);
        assert_eq!(config.settings, AppConfig::default().settings);
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("CHROMA_API_IMPLEMENTATION", "rest");
        jail.set_env("LOCUS_API_IMPLEMENTATION", "ignored.module.Type");

        let config = ConfigLoader::new().with_env_prefix("CHROMA").load().unwrap();
        assert_eq!(config.settings.api_implementation, "rest");
        Ok(())
    });
}

#[test]
fn test_invalid_log_level_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("LOCUS_LOG_LEVEL", "chatty");
        let err = ConfigLoader::new().load().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        Ok(())
    });
}

#[test]
fn test_invalid_migrations_policy_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("LOCUS_MIGRATIONS_POLICY", "sometimes");
        let err = ConfigLoader::new().load().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        Ok(())
    });
}

#[test]
fn test_missing_explicit_path_falls_back_to_defaults() {
    Jail::expect_with(|jail| {
        let loader = ConfigLoader::new().with_config_path(jail.directory().join("absent.toml"));
        assert!(loader.config_path().is_some());

        let config = loader.load().unwrap();
        assert_eq!(config, AppConfig::default());
        Ok(())
    });
}

#[test]
fn test_config_save_load() {
    Jail::expect_with(|jail| {
        let config_path = jail.directory().join("saved.toml");

        let mut original = AppConfig::default();
        original.settings.database_implementation =
            "chromadb.db.duckdb.PersistentDuckDB".to_string();
        original.settings.server_host = Some("api.internal".to_string());
        original.settings.migrations_policy = MigrationsPolicy::None;
        original.logging.level = "trace".to_string();

        let loader = ConfigLoader::new();
        loader.save_to_file(&original, &config_path).unwrap();

        let loaded = ConfigLoader::new()
            .with_config_path(&config_path)
            .load()
            .unwrap();
        assert_eq!(loaded, original);
        Ok(())
    });
}
