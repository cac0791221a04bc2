use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// `paid_date` is non-null exactly when `paid` is true; consumers rely on the
/// explicit `null`, so no field here is skipped during serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Industry {
    pub code: String,
    pub industry: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyIndustryLink {
    pub comp_code: String,
    pub ind_code: String,
}

/// Company row merged with everything attached to it.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    pub invoices: Vec<Invoice>,
    pub industries: Vec<String>,
}

/// One row of the industries outer join. `company_code` is `None` for
/// industries with no linked companies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndustryCompanyRow {
    pub industry_code: String,
    pub industry_name: String,
    pub company_code: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndustryListing {
    pub code: String,
    pub industry: String,
    pub companies: Vec<String>,
}
