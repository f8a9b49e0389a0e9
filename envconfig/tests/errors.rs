use std::collections::HashMap;

use envconfig::{Envconfig, Error};

fn source<const N: usize>(vars: [(&str, &str); N]) -> HashMap<String, String> {
    vars.into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
}

#[test]
fn captures_basic_errors() {
    #[derive(Envconfig, Debug, Default)]
    #[allow(unused)]
    pub struct Config {
        #[envconfig(required)]
        first: String,
        #[envconfig(required)]
        second: String,
        #[envconfig(required)]
        third: String,
    }

    let expected = r#"3 configuration errors:
  1. `Config.first`: required key APP_FIRST missing value
  2. `Config.second`: required key APP_SECOND missing value
  3. `Config.third`: required key APP_THIRD missing value
"#;
    let actual = Config::from_source("app", &source([]))
        .unwrap_err()
        .to_string();

    assert_eq!(expected, actual);
}

#[test]
fn captures_nested_errors() {
    use foo::bar::AppConfig;

    // simulate module structure
    mod foo {
        pub mod bar {
            use super::baz::KafkaConfig;
            use envconfig::Envconfig;

            #[derive(Envconfig, Debug, Default)]
            #[allow(unused)]
            pub struct AppConfig {
                #[envconfig(required)]
                pub database_url: String,
                #[envconfig(nested)]
                pub kafka: KafkaConfig,
            }
        }

        pub mod baz {
            use envconfig::Envconfig;

            #[derive(Envconfig, Debug, Default)]
            #[allow(unused)]
            pub struct KafkaConfig {
                #[envconfig(name = "KAFKA_BROKER", required)]
                pub broker: String,
            }
        }
    }

    let expected = r#"2 configuration errors:
  1. `AppConfig.database_url`: required key APP_DATABASE_URL missing value
  2. `KafkaConfig.broker`: required key APP_KAFKA_KAFKA_BROKER missing value
"#;
    let actual = AppConfig::from_source("app", &source([]))
        .unwrap_err()
        .to_string();

    assert_eq!(expected, actual);
}

#[test]
fn captures_conversion_errors() {
    #[derive(Envconfig, Debug, Default)]
    #[allow(unused)]
    pub struct Config {
        port: u16,
        verbose: bool,
        #[envconfig(required)]
        database_url: String,
    }

    let source = source([("APP_PORT", "invalid"), ("APP_VERBOSE", "yes")]);

    let expected = r#"3 configuration errors:
  1. `Config.port`: failed to convert APP_PORT="invalid" to u16: invalid digit found in string
  2. `Config.verbose`: failed to convert APP_VERBOSE="yes" to bool: invalid boolean "yes"
  3. `Config.database_url`: required key APP_DATABASE_URL missing value
"#;
    let actual = Config::from_source("app", &source).unwrap_err().to_string();

    assert_eq!(expected, actual);
}

#[test]
fn conversion_error_exposes_its_source() {
    use std::error::Error as _;

    #[derive(Envconfig, Debug, Default)]
    #[allow(unused)]
    pub struct Config {
        timeout: std::time::Duration,
    }

    let errors = Config::from_source("app", &source([("APP_TIMEOUT", "-5s")])).unwrap_err();
    let error = errors.into_iter().next().unwrap();

    assert_eq!(error.path(), Some("Config.timeout"));
    assert_eq!(error.key(), "APP_TIMEOUT");
    assert!(matches!(error, Error::Conversion { .. }));
    assert_eq!(
        error.source().unwrap().to_string(),
        r#"invalid duration "-5s": negative interval"#
    );
}

#[test]
fn key_reported_is_the_one_that_was_found() {
    #[derive(Envconfig, Debug, Default)]
    #[allow(unused)]
    pub struct Config {
        #[envconfig(name = "SERVICE_PORT")]
        port: u16,
    }

    let errors = Config::from_source("app", &source([("SERVICE_PORT", "http")])).unwrap_err();

    assert_eq!(errors.iter().map(Error::key).collect::<Vec<_>>(), ["SERVICE_PORT"]);
}
