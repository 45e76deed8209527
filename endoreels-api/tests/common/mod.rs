#![allow(dead_code)]

use endoreels_api::config::{ApiConfig, CorsConfig, Environment};
use endoreels_api::startup::Application;
use service_core::config::Config as CoreConfig;
use std::time::Duration;

pub fn test_config(allowed_origins: &[&str]) -> ApiConfig {
    ApiConfig {
        common: CoreConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        environment: Environment::Dev,
        service_name: "endoreels-api".to_string(),
        service_version: env!("CARGO_PKG_VERSION").to_string(),
        log_level: "debug".to_string(),
        otlp_endpoint: None,
        cors: CorsConfig {
            allowed_origins: allowed_origins.iter().map(|o| o.to_string()).collect(),
        },
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn the application on a random port.
    pub async fn spawn() -> Self {
        let app = Application::build(test_config(&["*"]))
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for server to start
        tokio::time::sleep(Duration::from_millis(100)).await;

        Self { address, port }
    }
}
