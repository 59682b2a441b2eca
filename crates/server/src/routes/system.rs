use actix_web::{get, web, HttpResponse};
use chrono::Utc;
use std::sync::Arc;

use crate::state::AppState;
use crate::types::HealthResponse;

/// Liveness and configuration check
#[get("/health")]
pub async fn health(state: web::Data<Arc<AppState>>) -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        model: state.orchestrator.model().to_string(),
        token_configured: state.config.has_api_token(),
        timestamp: Utc::now(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{app_state, MockBackend, MockFetcher};
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_reports_token_state() {
        let state = app_state(None, MockFetcher::unused(), MockBackend::replying("unused"));
        let app = test::init_service(App::new().app_data(web::Data::new(state)).service(health)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.status, "ok");
        assert_eq!(body.model, "facebook/bart-large-cnn");
        assert!(!body.token_configured);
    }
}
