use std::sync::Arc;

use tokio::net::TcpListener;

use flatwiki::config::Config;
use flatwiki::errors::WikiError;
use flatwiki::handlers::router;
use flatwiki::logger::Logger;
use flatwiki::services::TemplateService;
use flatwiki::types::AppState;

#[tokio::main]
async fn main() -> Result<(), WikiError> {
    if let Err(e) = Logger::init() {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = Config::new();
    std::fs::create_dir_all(config.data_dir.as_ref())?;

    // Templates are loaded once; a broken template aborts startup
    let templates = TemplateService::load(config.views_dir.as_ref())?;

    let state = AppState {
        data_dir: Arc::clone(&config.data_dir),
        templates: Arc::new(templates),
    };
    let app = router(state);

    let addr = config.socket_addr();
    log::info!("Wiki listening on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await.map_err(WikiError::from)
}
