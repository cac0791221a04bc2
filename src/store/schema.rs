pub const SCHEMA: &str = r#"
-- Companies are keyed by a canonical slug
CREATE TABLE IF NOT EXISTS companies (
    code TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT
);

-- Invoices belong to exactly one company
CREATE TABLE IF NOT EXISTS invoices (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    comp_code TEXT NOT NULL REFERENCES companies(code) ON DELETE CASCADE,
    amt REAL NOT NULL,
    paid INTEGER NOT NULL DEFAULT 0,

    -- add_date is fixed at creation; paid_date is set iff paid = 1
    add_date TEXT NOT NULL DEFAULT (date('now')),
    paid_date TEXT
);

CREATE TABLE IF NOT EXISTS industries (
    code TEXT PRIMARY KEY,
    industry TEXT NOT NULL
);

-- Many-to-many relationship between companies and industries
CREATE TABLE IF NOT EXISTS company_industries (
    comp_code TEXT NOT NULL REFERENCES companies(code) ON DELETE CASCADE,
    ind_code TEXT NOT NULL REFERENCES industries(code) ON DELETE CASCADE,
    PRIMARY KEY (comp_code, ind_code)
);

-- Create indexes
CREATE INDEX IF NOT EXISTS idx_invoices_comp ON invoices(comp_code);
CREATE INDEX IF NOT EXISTS idx_company_industries_ind ON company_industries(ind_code);
"#;
