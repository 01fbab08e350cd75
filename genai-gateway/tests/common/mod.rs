use genai_gateway::config::GatewayConfig;
use genai_gateway::services::providers::mock::MockProvider;
use genai_gateway::startup::Application;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub upload_dir: String,
    pub provider: Arc<MockProvider>,
}

impl TestApp {
    /// Spawn the gateway on a random port, backed by the given mock
    /// provider and a per-test transient upload directory.
    pub async fn spawn(provider: MockProvider) -> Self {
        std::env::set_var("ENVIRONMENT", "test");
        std::env::set_var("GOOGLE_API_KEY", "test-api-key");

        let upload_dir = format!("target/test-uploads-{}", Uuid::new_v4());

        let mut config = GatewayConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.storage.upload_dir = upload_dir.clone();

        let provider = Arc::new(provider);
        let app = Application::build(config, provider.clone())
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint.
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            upload_dir,
            provider,
        }
    }

    /// Number of files currently present in the transient upload directory.
    pub fn transient_file_count(&self) -> usize {
        std::fs::read_dir(&self.upload_dir)
            .map(|entries| entries.count())
            .unwrap_or(0)
    }

    /// Cleanup test resources (transient upload directory).
    pub async fn cleanup(&self) {
        let _ = tokio::fs::remove_dir_all(&self.upload_dir).await;
    }
}
