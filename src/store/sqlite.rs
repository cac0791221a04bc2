use std::path::Path;
use std::sync::Mutex;

use chrono::{NaiveDate, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::Store;
use super::schema::SCHEMA;
use crate::error::{Error, Result};
use crate::types::*;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns a guard to the underlying database connection.
    /// This allows consuming applications to execute custom SQL.
    pub fn connection(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn()
    }
}

fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_else(|e| {
        tracing::error!("Invalid date in database: '{}' - {}", s, e);
        Utc::now().date_naive()
    })
}

fn format_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

fn company_from_row(row: &Row) -> rusqlite::Result<Company> {
    Ok(Company {
        code: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
    })
}

fn invoice_from_row(row: &Row) -> rusqlite::Result<Invoice> {
    Ok(Invoice {
        id: row.get(0)?,
        comp_code: row.get(1)?,
        amt: row.get(2)?,
        paid: row.get(3)?,
        add_date: parse_date(&row.get::<_, String>(4)?),
        paid_date: row.get::<_, Option<String>>(5)?.map(|s| parse_date(&s)),
    })
}

const INVOICE_COLUMNS: &str = "id, comp_code, amt, paid, add_date, paid_date";

impl Store for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    // Company operations

    fn create_company(&self, company: &Company) -> Result<()> {
        self.conn().execute(
            "INSERT INTO companies (code, name, description) VALUES (?1, ?2, ?3)",
            params![company.code, company.name, company.description],
        )?;
        Ok(())
    }

    fn get_company(&self, code: &str) -> Result<Option<Company>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT code, name, description FROM companies WHERE code = ?1",
            params![code],
            company_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_companies(&self) -> Result<Vec<Company>> {
        let conn = self.conn();
        let mut stmt =
            conn.prepare("SELECT code, name, description FROM companies ORDER BY code")?;

        let rows = stmt.query_map([], company_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn update_company(
        &self,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Option<Company>> {
        let conn = self.conn();
        let rows = conn.execute(
            "UPDATE companies SET name = ?1, description = ?2 WHERE code = ?3",
            params![name, description, code],
        )?;

        if rows == 0 {
            return Ok(None);
        }

        conn.query_row(
            "SELECT code, name, description FROM companies WHERE code = ?1",
            params![code],
            company_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn delete_company(&self, code: &str) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM companies WHERE code = ?1", params![code])?;
        Ok(rows > 0)
    }

    // Invoice operations

    fn create_invoice(&self, comp_code: &str, amt: f64, add_date: NaiveDate) -> Result<Invoice> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO invoices (comp_code, amt, add_date) VALUES (?1, ?2, ?3)",
            params![comp_code, amt, format_date(&add_date)],
        )?;

        let id = conn.last_insert_rowid();
        conn.query_row(
            &format!("SELECT {INVOICE_COLUMNS} FROM invoices WHERE id = ?1"),
            params![id],
            invoice_from_row,
        )
        .map_err(Error::from)
    }

    fn get_invoice(&self, id: i64) -> Result<Option<Invoice>> {
        let conn = self.conn();
        conn.query_row(
            &format!("SELECT {INVOICE_COLUMNS} FROM invoices WHERE id = ?1"),
            params![id],
            invoice_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_invoices(&self) -> Result<Vec<Invoice>> {
        let conn = self.conn();
        let mut stmt =
            conn.prepare(&format!("SELECT {INVOICE_COLUMNS} FROM invoices ORDER BY id"))?;

        let rows = stmt.query_map([], invoice_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn list_company_invoices(&self, comp_code: &str) -> Result<Vec<Invoice>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT {INVOICE_COLUMNS} FROM invoices WHERE comp_code = ?1 ORDER BY id"
        ))?;

        let rows = stmt.query_map(params![comp_code], invoice_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn update_invoice(
        &self,
        id: i64,
        amt: f64,
        paid: bool,
        paid_date: Option<NaiveDate>,
    ) -> Result<Option<Invoice>> {
        let conn = self.conn();
        let rows = conn.execute(
            "UPDATE invoices SET amt = ?1, paid = ?2, paid_date = ?3 WHERE id = ?4",
            params![amt, paid, paid_date.as_ref().map(format_date), id],
        )?;

        if rows == 0 {
            return Ok(None);
        }

        conn.query_row(
            &format!("SELECT {INVOICE_COLUMNS} FROM invoices WHERE id = ?1"),
            params![id],
            invoice_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn delete_invoice(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM invoices WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    // Industry operations

    fn create_industry(&self, industry: &Industry) -> Result<()> {
        self.conn().execute(
            "INSERT INTO industries (code, industry) VALUES (?1, ?2)",
            params![industry.code, industry.industry],
        )?;
        Ok(())
    }

    fn get_industry(&self, code: &str) -> Result<Option<Industry>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT code, industry FROM industries WHERE code = ?1",
            params![code],
            |row| {
                Ok(Industry {
                    code: row.get(0)?,
                    industry: row.get(1)?,
                })
            },
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_industries(&self) -> Result<Vec<Industry>> {
        let conn = self.conn();
        let mut stmt = conn.prepare("SELECT code, industry FROM industries ORDER BY code")?;

        let rows = stmt.query_map([], |row| {
            Ok(Industry {
                code: row.get(0)?,
                industry: row.get(1)?,
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn delete_industry(&self, code: &str) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM industries WHERE code = ?1", params![code])?;
        Ok(rows > 0)
    }

    // Company-Industry M2M operations

    fn link_company_industry(&self, comp_code: &str, ind_code: &str) -> Result<()> {
        self.conn().execute(
            "INSERT OR IGNORE INTO company_industries (comp_code, ind_code) VALUES (?1, ?2)",
            params![comp_code, ind_code],
        )?;
        Ok(())
    }

    fn list_company_industry_names(&self, comp_code: &str) -> Result<Vec<String>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT i.industry
             FROM industries i
             JOIN company_industries ci ON i.code = ci.ind_code
             WHERE ci.comp_code = ?1
             ORDER BY i.industry",
        )?;

        let rows = stmt.query_map(params![comp_code], |row| row.get(0))?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn list_industry_company_rows(&self) -> Result<Vec<IndustryCompanyRow>> {
        let conn = self.conn();
        // LEFT JOIN keeps industries with no linked companies in the result.
        let mut stmt = conn.prepare(
            "SELECT i.code, i.industry, ci.comp_code
             FROM industries i
             LEFT JOIN company_industries ci ON i.code = ci.ind_code
             ORDER BY i.code, ci.comp_code",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(IndustryCompanyRow {
                industry_code: row.get(0)?,
                industry_name: row.get(1)?,
                company_code: row.get(2)?,
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn close(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(temp: &TempDir) -> SqliteStore {
        let store = SqliteStore::new(temp.path().join("test.db")).unwrap();
        store.initialize().unwrap();
        store
    }

    fn seed_company(store: &SqliteStore, code: &str, name: &str) {
        store
            .create_company(&Company {
                code: code.to_string(),
                name: name.to_string(),
                description: None,
            })
            .unwrap();
    }

    #[test]
    fn test_initialize_creates_tables() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        let conn = store.conn();
        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap();

        assert!(tables.contains(&"companies".to_string()));
        assert!(tables.contains(&"invoices".to_string()));
        assert!(tables.contains(&"industries".to_string()));
        assert!(tables.contains(&"company_industries".to_string()));
    }

    #[test]
    fn test_company_crud() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        store
            .create_company(&Company {
                code: "nv".to_string(),
                name: "Nvidia".to_string(),
                description: Some("Makes GPUs".to_string()),
            })
            .unwrap();

        let fetched = store.get_company("nv").unwrap().unwrap();
        assert_eq!(fetched.name, "Nvidia");
        assert_eq!(fetched.description.as_deref(), Some("Makes GPUs"));

        let updated = store
            .update_company("nv", "Nvidia Corp", None)
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Nvidia Corp");
        assert_eq!(updated.description, None);

        let missing = store.update_company("absent", "x", None).unwrap();
        assert!(missing.is_none());

        assert!(store.delete_company("nv").unwrap());
        assert!(!store.delete_company("nv").unwrap());
        assert!(store.get_company("nv").unwrap().is_none());
    }

    #[test]
    fn test_invoice_crud_and_defaults() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        seed_company(&store, "nv", "Nvidia");

        let today = Utc::now().date_naive();
        let invoice = store.create_invoice("nv", 1244.0, today).unwrap();
        assert_eq!(invoice.comp_code, "nv");
        assert_eq!(invoice.amt, 1244.0);
        assert!(!invoice.paid);
        assert_eq!(invoice.add_date, today);
        assert_eq!(invoice.paid_date, None);

        let fetched = store.get_invoice(invoice.id).unwrap().unwrap();
        assert_eq!(fetched.id, invoice.id);

        let updated = store
            .update_invoice(invoice.id, 1300.0, true, Some(today))
            .unwrap()
            .unwrap();
        assert_eq!(updated.amt, 1300.0);
        assert!(updated.paid);
        assert_eq!(updated.paid_date, Some(today));

        assert!(store.update_invoice(9999, 1.0, false, None).unwrap().is_none());

        assert!(store.delete_invoice(invoice.id).unwrap());
        assert!(!store.delete_invoice(invoice.id).unwrap());
    }

    #[test]
    fn test_invoice_requires_company() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        let today = Utc::now().date_naive();
        let result = store.create_invoice("ghost", 10.0, today);
        assert!(matches!(result, Err(Error::Database(_))));
    }

    #[test]
    fn test_company_delete_cascades_to_invoices() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        seed_company(&store, "nv", "Nvidia");

        let today = Utc::now().date_naive();
        let invoice = store.create_invoice("nv", 50.0, today).unwrap();

        assert!(store.delete_company("nv").unwrap());
        assert!(store.get_invoice(invoice.id).unwrap().is_none());
    }

    #[test]
    fn test_company_industry_links() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        seed_company(&store, "nv", "Nvidia");
        seed_company(&store, "ibm", "IBM");

        store
            .create_industry(&Industry {
                code: "tech".to_string(),
                industry: "Technology".to_string(),
            })
            .unwrap();
        store
            .create_industry(&Industry {
                code: "acct".to_string(),
                industry: "Accounting".to_string(),
            })
            .unwrap();

        store.link_company_industry("nv", "tech").unwrap();
        store.link_company_industry("ibm", "tech").unwrap();
        // Duplicate links are absorbed by the composite primary key
        store.link_company_industry("nv", "tech").unwrap();

        let names = store.list_company_industry_names("nv").unwrap();
        assert_eq!(names, vec!["Technology".to_string()]);

        let rows = store.list_industry_company_rows().unwrap();
        let tech: Vec<_> = rows
            .iter()
            .filter(|r| r.industry_code == "tech")
            .collect();
        assert_eq!(tech.len(), 2);

        // Industries with no companies still appear, with a null company code
        let acct: Vec<_> = rows
            .iter()
            .filter(|r| r.industry_code == "acct")
            .collect();
        assert_eq!(acct.len(), 1);
        assert_eq!(acct[0].company_code, None);
        assert_eq!(acct[0].industry_name, "Accounting");
    }

    #[test]
    fn test_list_orders() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        seed_company(&store, "zed", "Zed");
        seed_company(&store, "apt", "Apt");

        let codes: Vec<String> = store
            .list_companies()
            .unwrap()
            .into_iter()
            .map(|c| c.code)
            .collect();
        assert_eq!(codes, vec!["apt".to_string(), "zed".to_string()]);
    }
}
