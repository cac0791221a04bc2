//! Derives an invoice's `paid_date` from its payment state instead of
//! accepting one from the caller.

use chrono::{NaiveDate, Utc};

use crate::error::{Error, Result};
use crate::store::Store;
use crate::types::Invoice;

/// Computes the `paid_date` an invoice should carry after an update that
/// requests `requested_paid`.
///
/// Paying an unpaid invoice stamps it with `today`; re-paying an already
/// paid one keeps the original date; un-paying always clears it. The result
/// is non-null exactly when `requested_paid` is true.
pub fn next_paid_date(
    current: Option<NaiveDate>,
    requested_paid: bool,
    today: NaiveDate,
) -> Option<NaiveDate> {
    if requested_paid {
        current.or(Some(today))
    } else {
        None
    }
}

/// Applies an amount/paid update to a stored invoice.
///
/// Reads the current row first (the stored `paid_date`, not just the flag,
/// feeds the transition), so an unknown id fails before any write.
pub fn settle_invoice(
    store: &dyn Store,
    id: i64,
    amt: f64,
    requested_paid: bool,
) -> Result<Invoice> {
    let current = store.get_invoice(id)?.ok_or(Error::NotFound)?;

    let paid_date = next_paid_date(
        current.paid_date,
        requested_paid,
        Utc::now().date_naive(),
    );

    store
        .update_invoice(id, amt, requested_paid, paid_date)?
        .ok_or(Error::NotFound)
}
