use tracing_subscriber::EnvFilter;

use clinica_api::config::ApiConfig;
use clinica_api::state::AppState;
use clinica_storage::S3CalculationStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env();
    tracing::info!(bucket = %config.bucket, region = %config.region, "starting clinica-api");

    let s3 = clinica_storage::client::build_client_with_region(&config.region).await;
    let store = S3CalculationStore::new(s3, config.bucket);
    let app = clinica_api::router(AppState::new(store));

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
