use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpResponse};
use std::sync::Arc;
use tracing::info;

use crate::render::render_page;
use crate::state::AppState;
use crate::types::{SummarizeForm, SummaryPayload};

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Empty form
#[get("/")]
pub async fn index() -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type(HTML_CONTENT_TYPE)
        .body(render_page(&SummaryPayload::default(), "")))
}

/// Form submission, always answered with the rendered page
#[post("/")]
pub async fn summarize_form(
    form: web::Form<SummarizeForm>,
    state: web::Data<Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    info!("Summarize form submitted - {} chars", form.user_input.len());

    let outcome = state.orchestrator.run(&form.user_input).await;

    Ok(HttpResponse::Ok()
        .content_type(HTML_CONTENT_TYPE)
        .body(render_page(&outcome.payload, form.user_input.trim())))
}

/// JSON variant of the form submission
#[post("/api/summarize")]
pub async fn summarize_json(
    req: web::Json<SummarizeForm>,
    state: web::Data<Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let outcome = state.orchestrator.run(&req.user_input).await;

    let status = outcome
        .error
        .as_ref()
        .and_then(|e| StatusCode::from_u16(e.status_code()).ok())
        .unwrap_or(StatusCode::OK);

    Ok(HttpResponse::build(status).json(outcome.payload))
}
