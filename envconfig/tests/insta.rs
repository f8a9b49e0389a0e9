//! These tests show how `usage` and `requirements` can be combined with insta
//! to document the environment variables an application needs.

use foo::bar::AppConfig;

// simulate module structure.
#[allow(unused)]
mod foo {
    pub mod bar {
        use std::net::SocketAddr;

        use envconfig::Envconfig;

        use super::baz::KafkaConfig;

        #[derive(Envconfig)]
        pub struct AppConfig {
            /// Connection string for the primary database.
            #[envconfig(default = "postgres://postgres@postgres/postgres", with = into)]
            pub database_url: String,
            #[envconfig(default = "127.0.0.1:3000", desc = "Address to listen on")]
            pub socket_addr: SocketAddr,
            #[envconfig(nested)]
            pub kafka: KafkaConfig,
        }
    }

    pub mod baz {
        use envconfig::Envconfig;

        #[derive(Envconfig)]
        pub struct KafkaConfig {
            #[envconfig(name = "BROKER", required)]
            pub broker: String,
            pub topics: Vec<String>,
        }
    }
}

#[test]
fn usage_as_documentation() {
    use envconfig::Envconfig;

    insta::assert_snapshot!(AppConfig::usage("app"));
}

#[test]
fn requirements_as_documentation() {
    use envconfig::Envconfig;

    insta::assert_snapshot!(AppConfig::requirements("app"));
}
