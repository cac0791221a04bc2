use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Company, CompanyDetail, CompanyIndustryLink, Industry, IndustryListing, Invoice};

#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCompanyRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateInvoiceRequest {
    pub comp_code: String,
    pub amt: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInvoiceRequest {
    pub amt: f64,
    pub paid: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateIndustryRequest {
    pub code: String,
    pub industry: String,
}

#[derive(Debug, Serialize)]
pub struct CompanyListResponse {
    pub companies: Vec<Company>,
}

#[derive(Debug, Serialize)]
pub struct CompanyResponse {
    pub company: Company,
}

#[derive(Debug, Serialize)]
pub struct CompanyDetailResponse {
    pub company: CompanyDetail,
}

#[derive(Debug, Serialize)]
pub struct InvoiceListResponse {
    pub invoices: Vec<Invoice>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    pub invoice: Invoice,
}

#[derive(Debug, Serialize)]
pub struct IndustryListResponse {
    pub industries: BTreeMap<String, IndustryListing>,
}

#[derive(Debug, Serialize)]
pub struct IndustryResponse {
    pub industry: Industry,
}

#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub company: CompanyIndustryLink,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub status: &'static str,
}

impl DeleteResponse {
    #[must_use]
    pub fn deleted() -> Self {
        Self { status: "deleted" }
    }
}
