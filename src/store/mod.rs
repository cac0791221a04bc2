pub mod slug;
mod schema;
mod sqlite;

pub use sqlite::SqliteStore;

use chrono::NaiveDate;

use crate::error::Result;
use crate::types::*;

/// Store defines the database interface.
///
/// Zero-row lookups and updates come back as `None`/`false`; translating
/// absence into an error is the caller's job.
pub trait Store: Send + Sync {
    fn initialize(&self) -> Result<()>;

    // Company operations
    fn create_company(&self, company: &Company) -> Result<()>;
    fn get_company(&self, code: &str) -> Result<Option<Company>>;
    fn list_companies(&self) -> Result<Vec<Company>>;
    fn update_company(
        &self,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Option<Company>>;
    fn delete_company(&self, code: &str) -> Result<bool>;

    // Invoice operations
    fn create_invoice(&self, comp_code: &str, amt: f64, add_date: NaiveDate) -> Result<Invoice>;
    fn get_invoice(&self, id: i64) -> Result<Option<Invoice>>;
    fn list_invoices(&self) -> Result<Vec<Invoice>>;
    fn list_company_invoices(&self, comp_code: &str) -> Result<Vec<Invoice>>;
    fn update_invoice(
        &self,
        id: i64,
        amt: f64,
        paid: bool,
        paid_date: Option<NaiveDate>,
    ) -> Result<Option<Invoice>>;
    fn delete_invoice(&self, id: i64) -> Result<bool>;

    // Industry operations
    fn create_industry(&self, industry: &Industry) -> Result<()>;
    fn get_industry(&self, code: &str) -> Result<Option<Industry>>;
    fn list_industries(&self) -> Result<Vec<Industry>>;
    fn delete_industry(&self, code: &str) -> Result<bool>;

    // Company-Industry M2M operations
    fn link_company_industry(&self, comp_code: &str, ind_code: &str) -> Result<()>;
    fn list_company_industry_names(&self, comp_code: &str) -> Result<Vec<String>>;
    fn list_industry_company_rows(&self) -> Result<Vec<IndustryCompanyRow>>;

    fn close(&self) -> Result<()>;
}
