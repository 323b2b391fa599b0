use multiverse::server::startup;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("multiverse=info,tower_http=info")),
        )
        .init();

    if let Err(e) = startup::run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
