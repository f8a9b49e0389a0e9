use std::collections::HashMap;

use envconfig::Envconfig;

fn source<const N: usize>(vars: [(&str, &str); N]) -> HashMap<String, String> {
    vars.into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
}

#[test]
fn nested_config_structs() {
    // Simulate composing config from different modules
    use foo::{bar::KafkaConfig, baz::AppConfig};

    mod foo {
        pub mod bar {
            use envconfig::Envconfig;

            #[derive(Envconfig, Debug, Default, PartialEq)]
            #[allow(non_snake_case)]
            pub struct KafkaConfig {
                pub brokers: String,
                #[envconfig(split_words)]
                pub clientId: String,
            }
        }

        pub mod baz {
            use envconfig::Envconfig;

            #[derive(Envconfig, Debug, Default, PartialEq)]
            pub struct AppConfig {
                pub database_url: String,
                #[envconfig(nested)]
                pub kafka: super::bar::KafkaConfig,
            }
        }
    }

    let expected = AppConfig {
        database_url: "postgres://postgres@postgres/postgres".into(),
        kafka: KafkaConfig {
            brokers: "kafka:29092".into(),
            clientId: "billing".into(),
        },
    };

    let actual = temp_env::with_vars(
        [
            (
                "APP_DATABASE_URL",
                Some("postgres://postgres@postgres/postgres"),
            ),
            ("APP_KAFKA_BROKERS", Some("kafka:29092")),
            ("APP_KAFKA_CLIENT_ID", Some("billing")),
        ],
        || AppConfig::from_env("app"),
    )
    .unwrap();

    assert_eq!(expected, actual);
}

#[derive(Envconfig, Debug, Default, PartialEq)]
pub struct Database {
    #[envconfig(default = "localhost")]
    pub host: String,
    #[envconfig(required)]
    pub port: u16,
}

#[test]
fn nested_with_explicit_name() {
    #[derive(Envconfig, Debug, Default, PartialEq)]
    pub struct Config {
        #[envconfig(nested, name = "store")]
        db: Database,
    }

    let actual = Config::from_source("app", &source([("APP_STORE_PORT", "5432")])).unwrap();

    assert_eq!(
        actual.db,
        Database {
            host: "localhost".into(),
            port: 5432,
        }
    );
}

#[test]
fn flattened_structs_share_the_prefix() {
    #[derive(Envconfig, Debug, Default, PartialEq)]
    pub struct Config {
        name: String,
        #[envconfig(flatten)]
        db: Database,
        #[envconfig(flatten, name = "replica")]
        replica: Database,
    }

    let source = source([
        ("APP_NAME", "orders"),
        ("APP_PORT", "5432"),
        ("APP_REPLICA_HOST", "replica.internal"),
        ("APP_REPLICA_PORT", "5433"),
    ]);

    let expected = Config {
        name: "orders".into(),
        db: Database {
            host: "localhost".into(),
            port: 5432,
        },
        replica: Database {
            host: "replica.internal".into(),
            port: 5433,
        },
    };

    assert_eq!(expected, Config::from_source("app", &source).unwrap());
}

#[test]
fn deeply_nested_keys() {
    #[derive(Envconfig, Debug, Default, PartialEq)]
    pub struct Pool {
        #[envconfig(split_words)]
        max_idle: u32,
    }

    #[derive(Envconfig, Debug, Default, PartialEq)]
    pub struct Storage {
        #[envconfig(nested)]
        pool: Pool,
    }

    #[derive(Envconfig, Debug, Default, PartialEq)]
    pub struct Config {
        #[envconfig(nested)]
        storage: Storage,
    }

    let actual = Config::from_source("svc", &source([("SVC_STORAGE_POOL_MAX_IDLE", "8")])).unwrap();

    assert_eq!(actual.storage.pool.max_idle, 8);
    assert_eq!(
        Config::vars("svc")
            .into_iter()
            .map(|var| var.key)
            .collect::<Vec<_>>(),
        ["SVC_STORAGE_POOL_MAX_IDLE"]
    );
}

#[test]
fn optional_nested_structs() {
    #[derive(Envconfig, Debug, Default, PartialEq)]
    pub struct Tls {
        cert: String,
        key: String,
    }

    #[derive(Envconfig, Debug, Default, PartialEq)]
    pub struct Config {
        #[envconfig(nested)]
        tls: Option<Tls>,
    }

    let absent = Config::from_source("app", &source([])).unwrap();
    assert_eq!(absent, Config { tls: None });

    let present = Config::from_source("app", &source([("APP_TLS_CERT", "cert.pem")])).unwrap();
    assert_eq!(
        present,
        Config {
            tls: Some(Tls {
                cert: "cert.pem".into(),
                key: String::new(),
            }),
        }
    );
}

#[test]
fn optional_nested_struct_is_created_from_defaults() {
    #[derive(Envconfig, Debug, Default, PartialEq)]
    pub struct Pool {
        #[envconfig(default = "10")]
        size: u32,
    }

    #[derive(Envconfig, Debug, Default, PartialEq)]
    pub struct Config {
        #[envconfig(nested)]
        pool: Option<Pool>,
    }

    let actual = Config::from_source("app", &source([])).unwrap();

    assert_eq!(actual.pool, Some(Pool { size: 10 }));
}

#[test]
fn optional_nested_struct_with_defaults_reports_missing_required() {
    #[derive(Envconfig, Debug, Default)]
    #[allow(unused)]
    pub struct Config {
        #[envconfig(nested)]
        db: Option<Database>,
    }

    // HOST has a default, so the section exists and PORT is required.
    let errors = Config::from_source("app", &source([])).unwrap_err();

    assert_eq!(
        errors.to_string(),
        "1 configuration error:\n  1. `Database.port`: required key APP_DB_PORT missing value\n"
    );
}

#[test]
fn partially_set_optional_nested_struct_reports_errors() {
    #[derive(Envconfig, Debug, Default)]
    #[allow(unused)]
    pub struct Config {
        #[envconfig(nested)]
        db: Option<Database>,
    }

    // Only HOST is set, so the required PORT is missing.
    let errors = Config::from_source("app", &source([("APP_DB_HOST", "db")])).unwrap_err();

    assert_eq!(
        errors.to_string(),
        "1 configuration error:\n  1. `Database.port`: required key APP_DB_PORT missing value\n"
    );
}

#[test]
fn existing_optional_nested_struct_is_updated_in_place() {
    #[derive(Envconfig, Debug, Default, PartialEq)]
    pub struct Config {
        #[envconfig(nested)]
        db: Option<Database>,
    }

    let mut config = Config {
        db: Some(Database {
            host: "primary".into(),
            port: 1,
        }),
    };

    config
        .process_from("app", &source([("APP_DB_PORT", "5432")]))
        .unwrap();

    assert_eq!(
        config.db,
        Some(Database {
            host: "localhost".into(),
            port: 5432,
        })
    );
}
