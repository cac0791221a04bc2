use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::aggregate;
use crate::server::AppState;
use crate::server::dto::{
    CreateIndustryRequest, IndustryListResponse, IndustryResponse, LinkResponse,
};
use crate::server::response::{ApiError, StoreResultExt};
use crate::store::slug::canonical_code;
use crate::types::{CompanyIndustryLink, Industry};

pub async fn list_industries(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let rows = state
        .store
        .list_industry_company_rows()
        .api_err("Failed to list industries")?;

    let industries = aggregate::group_industries(&rows);

    Ok::<_, ApiError>(Json(IndustryListResponse { industries }))
}

pub async fn create_industry(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateIndustryRequest>,
) -> impl IntoResponse {
    let code = canonical_code(&req.code)?;

    let industry = Industry {
        code,
        industry: req.industry,
    };

    state
        .store
        .create_industry(&industry)
        .api_err("Failed to create industry")?;

    Ok::<_, ApiError>((StatusCode::CREATED, Json(IndustryResponse { industry })))
}

pub async fn link_company_industry(
    State(state): State<Arc<AppState>>,
    Path((comp_code, ind_code)): Path<(String, String)>,
) -> impl IntoResponse {
    state
        .store
        .link_company_industry(&comp_code, &ind_code)
        .api_err("Failed to link company and industry")?;

    let company = CompanyIndustryLink {
        comp_code,
        ind_code,
    };

    Ok::<_, ApiError>((StatusCode::CREATED, Json(LinkResponse { company })))
}
