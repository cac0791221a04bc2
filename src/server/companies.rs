use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::aggregate;
use crate::error::Error;
use crate::server::AppState;
use crate::server::dto::{
    CompanyDetailResponse, CompanyListResponse, CompanyResponse, CreateCompanyRequest,
    DeleteResponse, UpdateCompanyRequest,
};
use crate::server::response::{ApiError, StoreOptionExt, StoreResultExt};
use crate::store::slug::canonical_code;
use crate::types::Company;

pub async fn list_companies(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let companies = state
        .store
        .list_companies()
        .api_err("Failed to list companies")?;

    Ok::<_, ApiError>(Json(CompanyListResponse { companies }))
}

pub async fn get_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> impl IntoResponse {
    let company = match aggregate::company_detail(state.store.as_ref(), &code) {
        Ok(detail) => detail,
        Err(Error::NotFound) => {
            return Err(ApiError::not_found(format!(
                "Can't find company with code of {code}"
            )));
        }
        Err(err) => return Err(err.into()),
    };

    Ok::<_, ApiError>(Json(CompanyDetailResponse { company }))
}

pub async fn create_company(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCompanyRequest>,
) -> impl IntoResponse {
    let code = canonical_code(&req.code)?;

    let company = Company {
        code,
        name: req.name,
        description: req.description,
    };

    state
        .store
        .create_company(&company)
        .api_err("Failed to create company")?;

    Ok::<_, ApiError>((StatusCode::CREATED, Json(CompanyResponse { company })))
}

pub async fn update_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    Json(req): Json<UpdateCompanyRequest>,
) -> impl IntoResponse {
    let company = state
        .store
        .update_company(&code, &req.name, req.description.as_deref())
        .api_err("Failed to update company")?
        .or_not_found(format!("Can't update company with code of {code}"))?;

    Ok::<_, ApiError>(Json(CompanyResponse { company }))
}

pub async fn delete_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> impl IntoResponse {
    let removed = state
        .store
        .delete_company(&code)
        .api_err("Failed to delete company")?;

    if !removed {
        return Err(ApiError::not_found(format!(
            "Can't find company with code of {code}"
        )));
    }

    Ok::<_, ApiError>(Json(DeleteResponse::deleted()))
}
