//! Common test utilities for email-generator-service integration tests.
#![allow(dead_code)]

use email_generator_service::config::{
    EmailGeneratorConfig, GeminiApiConfig, GoogleConfig, ModelConfig, ProviderKind,
};
use email_generator_service::services::{EmailGenerator, TextProvider};
use email_generator_service::startup::{build_router, AppState, Application};
use service_core::config::Config as CoreConfig;
use std::sync::{Arc, Once};

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,email_generator_service=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Config using the mock provider on a random port.
pub fn test_config() -> EmailGeneratorConfig {
    EmailGeneratorConfig {
        common: CoreConfig { port: 0 },
        provider: ProviderKind::Mock,
        models: ModelConfig {
            text_model: "gemini-2.0-flash".to_string(),
            temperature: None,
            max_output_tokens: None,
        },
        google: GoogleConfig {
            api_key: String::new(),
        },
        gemini: GeminiApiConfig {
            api_base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 5,
        },
        otlp_endpoint: None,
    }
}

/// Router backed by the given provider, for `oneshot` tests.
pub fn router_with(provider: Arc<dyn TextProvider>) -> axum::Router {
    init_tracing();
    build_router(AppState {
        config: test_config(),
        generator: Arc::new(EmailGenerator::new(provider)),
    })
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn a real server on a random port.
    pub async fn spawn(config: EmailGeneratorConfig, provider: Arc<dyn TextProvider>) -> Self {
        init_tracing();

        let app = Application::build_with_provider(config, provider)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub async fn generate(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/email/generator", self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to send request")
    }
}
