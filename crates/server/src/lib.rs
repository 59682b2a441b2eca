//! Skimmer HTTP Server
//!
//! Actix-web form page and JSON API around the summarization workflow

use actix_web::{web, App, HttpServer};
use skimmer_common::{AppConfig, Result};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub mod render;
pub mod routes;
pub mod state;
pub mod types;
pub mod workflow;

#[cfg(test)]
mod testing;

pub use state::AppState;
pub use types::{MessageCategory, StatusMessage, SummaryPayload};
pub use workflow::{RequestOrchestrator, WorkflowOutcome, WorkflowStep};

/// Pasted articles easily exceed actix's 16 KiB form default
const FORM_LIMIT_BYTES: usize = 1024 * 1024;

/// Start the HTTP server and run until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_addr = config.server_bind_address();
    let state = Arc::new(AppState::new(config)?);

    if !state.config.has_api_token() {
        tracing::warn!("HF_API_TOKEN is not set; summarization requests will fail");
    }

    info!("Starting HTTP server on http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::FormConfig::default().limit(FORM_LIMIT_BYTES))
            .app_data(web::JsonConfig::default().limit(FORM_LIMIT_BYTES))
            .configure(routes::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("HTTP server stopped");
    Ok(())
}
