use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use bookdesk::binder;
use bookdesk::config::AppConfig;
use bookdesk::services::http::reqwest_http::ReqwestHttp;
use bookdesk::services::view::terminal::TerminalView;
use bookdesk::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env();
    tracing::info!("using booking backend at {}", config.api_base_url);

    let state = Arc::new(AppState {
        view: Box::new(TerminalView::new()),
        http: Box::new(ReqwestHttp::new(config.api_base_url.clone())),
    });

    println!("bookdesk ready, type `help` for commands");
    binder::run(state).await?;

    Ok(())
}
