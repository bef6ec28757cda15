use health_screen::api::routes::create_routes;
use health_screen::api::screenings::AppState;
use health_screen::config::AppConfig;
use health_screen::services::{ScreeningService, TrainingConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // Fit the three classifiers before accepting any traffic
    info!("Training screening models from {}", config.data_dir.display());
    let screening = ScreeningService::train(&config.data_dir, &TrainingConfig::default())?;
    for metrics in screening.metrics() {
        info!(
            "{} model {} ready: accuracy {:.3}",
            metrics.disease, metrics.model_version, metrics.accuracy
        );
    }

    // Create the application routes
    let app = create_routes(AppState::new(screening));

    // Start the server
    let address = config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Health screening server starting on http://{}", address);
    info!("Screening form available at http://{}/", address);

    axum::serve(listener, app).await?;

    Ok(())
}
