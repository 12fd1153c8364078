use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::categorizer::categorize;
use crate::error::{CtpError, Result};
use crate::models::{Detail, Institution, Transaction};
use crate::whitelist::Whitelists;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn field<'r>(record: &'r csv::StringRecord, idx: usize) -> &'r str {
    record.get(idx).unwrap_or("")
}

fn line_of(record: &csv::StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

fn require_fields(
    institution: Institution,
    record: &csv::StringRecord,
    expected: usize,
) -> Result<()> {
    if record.len() < expected {
        return Err(CtpError::ShortRow {
            institution: institution.name(),
            line: line_of(record),
            expected,
            found: record.len(),
        });
    }
    Ok(())
}

fn parse_amount(institution: Institution, record: &csv::StringRecord, idx: usize) -> Result<Decimal> {
    let raw = field(record, idx);
    Decimal::from_str(raw.trim()).map_err(|_| CtpError::Amount {
        institution: institution.name(),
        line: line_of(record),
        value: raw.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Row mappers
// ---------------------------------------------------------------------------

// Trans. Date,Post Date,Description,Amount,Category
fn discover_row(record: &csv::StringRecord) -> Result<Transaction> {
    require_fields(Institution::Discover, record, 5)?;
    Ok(Transaction {
        date: field(record, 0).to_string(),
        amount: parse_amount(Institution::Discover, record, 3)?,
        description: field(record, 2).to_string(),
        category: field(record, 4).to_string(),
        detail: Detail::Discover,
    })
}

// Transaction Date,Post Date,Description,Category,Type,Amount,Memo
fn chase_row(record: &csv::StringRecord) -> Result<Transaction> {
    require_fields(Institution::Chase, record, 7)?;
    Ok(Transaction {
        date: field(record, 0).to_string(),
        amount: -parse_amount(Institution::Chase, record, 5)?,
        description: field(record, 2).to_string(),
        category: field(record, 3).to_string(),
        detail: Detail::Chase {
            kind: field(record, 4).to_string(),
            memo: field(record, 6).to_string(),
        },
    })
}

// Transaction Date,Clearing Date,Description,Merchant,Category,Type,Amount (USD),Purchased By
fn apple_row(record: &csv::StringRecord) -> Result<Transaction> {
    require_fields(Institution::Apple, record, 8)?;
    Ok(Transaction {
        date: field(record, 0).to_string(),
        amount: parse_amount(Institution::Apple, record, 6)?,
        description: field(record, 2).to_string(),
        category: field(record, 4).to_string(),
        detail: Detail::Apple {
            merchant: field(record, 3).to_string(),
            kind: field(record, 5).to_string(),
            purchased_by: field(record, 7).to_string(),
        },
    })
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Institution {
    fn map_row(&self, record: &csv::StringRecord) -> Result<Transaction> {
        match self {
            Self::Discover => discover_row(record),
            Self::Chase => chase_row(record),
            Self::Apple => apple_row(record),
        }
    }

    /// Parse one export: the header line is dropped, each row is mapped and
    /// run through the institution's rules.
    pub fn parse_reader<R: Read>(&self, reader: R, lists: &Whitelists) -> Result<Vec<Transaction>> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let mut txn = self.map_row(&record)?;
            categorize(&mut txn, lists);
            rows.push(txn);
        }
        // Chase exports newest first.
        if *self == Self::Chase {
            rows.reverse();
        }
        Ok(rows)
    }

    pub fn parse_file(&self, path: &Path, lists: &Whitelists) -> Result<Vec<Transaction>> {
        let file = std::fs::File::open(path)?;
        let rows = self.parse_reader(std::io::BufReader::new(file), lists)?;
        log::debug!("parsed {} {} rows from {}", rows.len(), self.name(), path.display());
        Ok(rows)
    }
}

// ---------------------------------------------------------------------------
// Discovery
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct StatementFile {
    pub path: PathBuf,
    pub institution: Option<Institution>,
}

impl StatementFile {
    pub fn file_name(&self) -> &str {
        self.path.file_name().and_then(|n| n.to_str()).unwrap_or("")
    }
}

/// Every `.csv` file directly inside `dir`, sorted by file name.
pub fn discover_files(dir: &Path) -> Result<Vec<StatementFile>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if !name.to_lowercase().ends_with(".csv") {
            continue;
        }
        files.push(StatementFile {
            institution: Institution::from_file_name(&name),
            path: entry.path(),
        });
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// Parsed transactions grouped by institution, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    pub discover: Vec<Transaction>,
    pub chase: Vec<Transaction>,
    pub apple: Vec<Transaction>,
}

impl Ledger {
    pub fn get(&self, institution: Institution) -> &[Transaction] {
        match institution {
            Institution::Discover => &self.discover,
            Institution::Chase => &self.chase,
            Institution::Apple => &self.apple,
        }
    }

    pub fn get_mut(&mut self, institution: Institution) -> &mut Vec<Transaction> {
        match institution {
            Institution::Discover => &mut self.discover,
            Institution::Chase => &mut self.chase,
            Institution::Apple => &mut self.apple,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.discover.iter().chain(&self.chase).chain(&self.apple)
    }
}

pub fn load_statements(files: &[StatementFile], lists: &Whitelists) -> Result<Ledger> {
    let mut ledger = Ledger::default();
    for file in files {
        let Some(institution) = file.institution else {
            continue;
        };
        let rows = institution.parse_file(&file.path, lists)?;
        ledger.get_mut(institution).extend(rows);
    }
    Ok(ledger)
}
