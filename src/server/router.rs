use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

use super::response::ApiError;
use super::{companies, industries, invoices};
use crate::store::Store;

pub struct AppState {
    pub store: Arc<dyn Store>,
}

async fn health() -> &'static str {
    "OK"
}

async fn not_found() -> ApiError {
    ApiError::not_found("Not Found")
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status();

    tracing::info!(
        "{} {} {} {}ms",
        method,
        uri.path(),
        status.as_u16(),
        latency.as_millis()
    );

    response
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        // Companies
        .route("/companies", get(companies::list_companies))
        .route("/companies", post(companies::create_company))
        .route("/companies/{code}", get(companies::get_company))
        .route("/companies/{code}", put(companies::update_company))
        .route("/companies/{code}", delete(companies::delete_company))
        // Invoices
        .route("/invoices", get(invoices::list_invoices))
        .route("/invoices", post(invoices::create_invoice))
        .route("/invoices/{id}", get(invoices::get_invoice))
        .route("/invoices/{id}", put(invoices::update_invoice))
        .route("/invoices/{id}", delete(invoices::delete_invoice))
        // Industries (many-to-many with companies)
        .route("/industries", get(industries::list_industries))
        .route("/industries", post(industries::create_industry))
        .route(
            "/industries/{comp_code}/{ind_code}",
            post(industries::link_company_industry),
        )
        .fallback(not_found)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
