use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use finsent_backend::app;
use finsent_backend::external::newsapi::NewsApiProvider;
use finsent_backend::logging::{init_logging, LoggingConfig};
use finsent_backend::services::polarity_service::LexiconModel;
use finsent_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_logging(LoggingConfig::from_env())?;

    let news_provider =
        NewsApiProvider::from_env().context("Failed to create NewsApiProvider (check NEWS_API_KEY)")?;

    let state = AppState {
        news_provider: Arc::new(news_provider),
        polarity_model: Arc::new(LexiconModel::new()),
    };
    let app = app::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 finsent backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
