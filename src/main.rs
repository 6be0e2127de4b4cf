use std::sync::Arc;

use tokio::net::TcpListener;

use quire::config::Config;
use quire::errors::WikiError;
use quire::handlers;
use quire::logger::Logger;
use quire::services::PageStore;
use quire::templates::TemplateSet;
use quire::types::AppState;

#[tokio::main]
async fn main() -> Result<(), WikiError> {
    if let Err(e) = Logger::init() {
        eprintln!("Unable to install logger: {}", e);
    }

    let config = Config::from_env();

    // Broken templates must stop the process before it ever listens.
    let templates = TemplateSet::load(&config.template_dir)?;

    let state = AppState {
        store: PageStore::new(config.data_dir.clone()),
        templates: Arc::new(templates),
        config: Arc::new(config),
    };

    let addr = state.config.socket_addr();
    let app = handlers::router(state);

    log::info!("Wiki listening on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await.map_err(WikiError::from)
}
