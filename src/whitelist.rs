use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{CtpError, Result};
use crate::models::Transaction;

pub const ZERO_AMOUNTS_FILE: &str = "zero_amounts.csv";
pub const GUILT_FREE_FILE: &str = "to_guilt_free.csv";

/// Column separator used by the whitelist tables (U+2502).
pub const SEPARATOR: char = '│';

const BUNDLED_ZERO_AMOUNTS: &str = include_str!("../whitelists/zero_amounts.csv");
const BUNDLED_GUILT_FREE: &str = include_str!("../whitelists/to_guilt_free.csv");

#[derive(Debug, Clone, PartialEq)]
pub struct WhitelistEntry {
    pub date: String,
    pub amount: Decimal,
    pub description: String,
}

/// Exact-match override table keyed on (date, amount, description).
#[derive(Debug, Clone, Default)]
pub struct Whitelist {
    entries: Vec<WhitelistEntry>,
}

impl Whitelist {
    pub fn parse(source: &str, content: &str) -> Result<Whitelist> {
        let mut entries = Vec::new();
        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split(SEPARATOR).map(str::trim).collect();
            let err = |reason: String| CtpError::Whitelist {
                file: source.to_string(),
                line: idx + 1,
                reason,
            };
            if fields.len() < 3 {
                return Err(err(format!("expected 3 fields, found {}", fields.len())));
            }
            let amount = Decimal::from_str(fields[1])
                .map_err(|e| err(format!("invalid amount '{}': {e}", fields[1])))?;
            entries.push(WhitelistEntry {
                date: fields[0].to_string(),
                amount,
                description: fields[2].to_string(),
            });
        }
        Ok(Whitelist { entries })
    }

    pub fn entries(&self) -> &[WhitelistEntry] {
        &self.entries
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        self.entries.iter().any(|e| {
            e.date == txn.date && e.amount == txn.amount && e.description == txn.description
        })
    }
}

/// Both override tables, loaded once per run and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Whitelists {
    pub zero_amounts: Whitelist,
    pub guilt_free: Whitelist,
}

impl Whitelists {
    pub fn bundled() -> Result<Whitelists> {
        Ok(Whitelists {
            zero_amounts: Whitelist::parse(ZERO_AMOUNTS_FILE, BUNDLED_ZERO_AMOUNTS)?,
            guilt_free: Whitelist::parse(GUILT_FREE_FILE, BUNDLED_GUILT_FREE)?,
        })
    }

    pub fn from_dir(dir: &Path) -> Result<Whitelists> {
        let read = |name: &str| -> Result<Whitelist> {
            let path = dir.join(name);
            let file = path.display().to_string();
            let content = std::fs::read_to_string(&path).map_err(|source| CtpError::WhitelistRead {
                file: file.clone(),
                source,
            })?;
            Whitelist::parse(&file, &content)
        };
        Ok(Whitelists {
            zero_amounts: read(ZERO_AMOUNTS_FILE)?,
            guilt_free: read(GUILT_FREE_FILE)?,
        })
    }

    pub fn load(dir: Option<&Path>) -> Result<Whitelists> {
        let lists = match dir {
            Some(dir) => Whitelists::from_dir(dir)?,
            None => Whitelists::bundled()?,
        };
        log::debug!(
            "loaded {} zero-amount and {} guilt-free whitelist entries",
            lists.zero_amounts.entries().len(),
            lists.guilt_free.entries().len()
        );
        Ok(lists)
    }
}
