use gateway_core::observability::init_tracing;
use genai_gateway::config::GatewayConfig;
use genai_gateway::services::providers::gemini::{GeminiConfig, GeminiProvider};
use genai_gateway::services::providers::GenerativeProvider;
use genai_gateway::startup::Application;
use std::sync::Arc;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing("genai-gateway", "info");

    let config = GatewayConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let gemini_config = GeminiConfig {
        api_key: config.google.api_key.clone(),
        model: config.models.model.clone(),
        temperature: config.models.temperature,
    };
    let provider: Arc<dyn GenerativeProvider> = Arc::new(GeminiProvider::new(gemini_config));

    tracing::info!(
        model = %config.models.model,
        "Initialized Gemini provider"
    );

    let app = Application::build(config, provider).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
