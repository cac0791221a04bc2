//! Assembles nested views out of flat relational rows: the per-company
//! detail (company + invoices + industry names) and the industry listing
//! (industry code mapped to its distinct linked company codes).

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::store::Store;
use crate::types::{CompanyDetail, IndustryCompanyRow, IndustryListing};

/// Builds the composite view for one company.
///
/// The company row is checked first so an unknown code fails without
/// touching the invoice or association tables.
pub fn company_detail(store: &dyn Store, code: &str) -> Result<CompanyDetail> {
    let company = store.get_company(code)?.ok_or(Error::NotFound)?;

    let invoices = store.list_company_invoices(code)?;
    let industries = store.list_company_industry_names(code)?;

    Ok(CompanyDetail {
        company,
        invoices,
        industries,
    })
}

/// Groups the flat outer-join rows by industry code.
///
/// The first row for a code establishes the entry; each non-null company
/// code is added once, so duplicate join rows cannot inflate the set. The
/// map is keyed by industry code, which also fixes the iteration order.
pub fn group_industries(rows: &[IndustryCompanyRow]) -> BTreeMap<String, IndustryListing> {
    rows.iter().fold(BTreeMap::new(), |mut acc, row| {
        let entry = acc
            .entry(row.industry_code.clone())
            .or_insert_with(|| IndustryListing {
                code: row.industry_code.clone(),
                industry: row.industry_name.clone(),
                companies: Vec::new(),
            });

        if let Some(comp_code) = &row.company_code {
            if !entry.companies.contains(comp_code) {
                entry.companies.push(comp_code.clone());
            }
        }

        acc
    })
}
