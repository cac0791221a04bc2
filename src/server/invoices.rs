use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use crate::error::Error;
use crate::lifecycle;
use crate::server::AppState;
use crate::server::dto::{
    CreateInvoiceRequest, DeleteResponse, InvoiceListResponse, InvoiceResponse,
    UpdateInvoiceRequest,
};
use crate::server::response::{ApiError, StoreOptionExt, StoreResultExt};

pub async fn list_invoices(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let invoices = state
        .store
        .list_invoices()
        .api_err("Failed to list invoices")?;

    Ok::<_, ApiError>(Json(InvoiceListResponse { invoices }))
}

pub async fn get_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let invoice = state
        .store
        .get_invoice(id)
        .api_err("Failed to get invoice")?
        .or_not_found(format!("Can't find invoice with id of {id}"))?;

    Ok::<_, ApiError>(Json(InvoiceResponse { invoice }))
}

pub async fn create_invoice(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateInvoiceRequest>,
) -> impl IntoResponse {
    let invoice = state
        .store
        .create_invoice(&req.comp_code, req.amt, Utc::now().date_naive())
        .api_err("Failed to create invoice")?;

    Ok::<_, ApiError>((StatusCode::CREATED, Json(InvoiceResponse { invoice })))
}

pub async fn update_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateInvoiceRequest>,
) -> impl IntoResponse {
    let invoice = match lifecycle::settle_invoice(state.store.as_ref(), id, req.amt, req.paid) {
        Ok(invoice) => invoice,
        Err(Error::NotFound) => {
            return Err(ApiError::not_found(format!(
                "Can't update invoice with id of {id}"
            )));
        }
        Err(err) => return Err(err.into()),
    };

    Ok::<_, ApiError>(Json(InvoiceResponse { invoice }))
}

pub async fn delete_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let removed = state
        .store
        .delete_invoice(id)
        .api_err("Failed to delete invoice")?;

    if !removed {
        return Err(ApiError::not_found(format!(
            "Can't find invoice with id of {id}"
        )));
    }

    Ok::<_, ApiError>(Json(DeleteResponse::deleted()))
}
