use std::fmt;

use rust_decimal::Decimal;

use crate::importer::Ledger;
use crate::models::{Institution, Transaction};

/// Calendar month, 1 through 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month(u32);

impl Month {
    pub fn new(month: u32) -> Option<Month> {
        (1..=12).contains(&month).then_some(Month(month))
    }

    pub fn current() -> Month {
        use chrono::Datelike;
        Month(chrono::Local::now().month())
    }

    /// Accepts the text only when it is an integer in 1..=12.
    pub fn parse(raw: &str) -> Option<Month> {
        raw.trim().parse::<u32>().ok().and_then(Month::new)
    }

    /// Compares the month field of an `MM/DD/YYYY` string as text, so both
    /// `01/05/2024` and `1/5/2024` belong to January.
    pub fn contains(&self, date: &str) -> bool {
        let field = date.split('/').next().unwrap_or("").trim();
        let digits = field.trim_start_matches('0');
        digits == self.0.to_string()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn filter_month(ledger: &Ledger, month: Month) -> Ledger {
    let keep = |rows: &[Transaction]| -> Vec<Transaction> {
        rows.iter()
            .filter(|t| month.contains(&t.date))
            .cloned()
            .collect()
    };
    Ledger {
        discover: keep(&ledger.discover),
        chase: keep(&ledger.chase),
        apple: keep(&ledger.apple),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountTotal {
    pub institution: Institution,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    pub accounts: Vec<AccountTotal>,
    pub groceries: Decimal,
    pub grand_total: Decimal,
}

impl Totals {
    /// Everything that is not food counts as guilt-free.
    pub fn guilt_free(&self) -> Decimal {
        self.grand_total - self.groceries
    }

    pub fn account(&self, institution: Institution) -> Decimal {
        self.accounts
            .iter()
            .find(|a| a.institution == institution)
            .map_or(Decimal::ZERO, |a| a.total)
    }
}

pub fn get_totals(ledger: &Ledger) -> Totals {
    let accounts: Vec<AccountTotal> = Institution::ALL
        .into_iter()
        .map(|institution| AccountTotal {
            institution,
            total: ledger.get(institution).iter().map(|t| t.amount).sum(),
        })
        .collect();
    let groceries = ledger
        .iter()
        .filter(|t| t.is_food())
        .map(|t| t.amount)
        .sum();
    let grand_total = accounts.iter().map(|a| a.total).sum();
    Totals {
        accounts,
        groceries,
        grand_total,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;
    use crate::models::{Detail, FOOD_LABEL, GUILT_FREE_LABEL};

    fn txn(date: &str, amount: &str, category: &str, detail: Detail) -> Transaction {
        Transaction {
            date: date.to_string(),
            amount: Decimal::from_str(amount).unwrap(),
            description: "ROW".to_string(),
            category: category.to_string(),
            detail,
        }
    }

    fn chase() -> Detail {
        Detail::Chase {
            kind: "Sale".to_string(),
            memo: String::new(),
        }
    }

    fn apple() -> Detail {
        Detail::Apple {
            merchant: "M".to_string(),
            kind: "Purchase".to_string(),
            purchased_by: "P".to_string(),
        }
    }

    fn sample() -> Ledger {
        Ledger {
            discover: vec![
                txn("01/05/2024", "12.50", FOOD_LABEL, Detail::Discover),
                txn("01/09/2024", "40.10", GUILT_FREE_LABEL, Detail::Discover),
                txn("02/01/2024", "7.00", FOOD_LABEL, Detail::Discover),
            ],
            chase: vec![
                txn("01/11/2024", "-20.00", "Shopping", chase()),
                txn("01/12/2024", "0", "Payment", chase()),
            ],
            apple: vec![
                txn("01/15/2024", "33.33", "Grocery", apple()),
                txn("10/15/2023", "99.99", FOOD_LABEL, apple()),
            ],
        }
    }

    #[rstest]
    #[case(1, "01/05/2024", true)]
    #[case(1, "1/5/2024", true)]
    #[case(1, "10/05/2024", false)]
    #[case(1, "11/05/2024", false)]
    #[case(2, "01/05/2024", false)]
    #[case(10, "10/31/2024", true)]
    #[case(12, "12/01/2024", true)]
    #[case(12, "", false)]
    fn test_month_contains(#[case] month: u32, #[case] date: &str, #[case] expected: bool) {
        assert_eq!(Month::new(month).unwrap().contains(date), expected);
    }

    #[rstest]
    #[case("1", Some(1))]
    #[case("12", Some(12))]
    #[case(" 07 ", Some(7))]
    #[case("0", None)]
    #[case("13", None)]
    #[case("-3", None)]
    #[case("march", None)]
    #[case("--clean", None)]
    fn test_month_parse(#[case] raw: &str, #[case] expected: Option<u32>) {
        assert_eq!(Month::parse(raw), expected.and_then(Month::new));
    }

    #[test]
    fn test_filter_month_for_every_month() {
        let mut ledger = Ledger::default();
        for m in 1..=12u32 {
            ledger
                .discover
                .push(txn(&format!("{m:02}/03/2024"), "1", "X", Detail::Discover));
        }
        for m in 1..=12u32 {
            let month = Month::new(m).unwrap();
            let kept = filter_month(&ledger, month);
            assert_eq!(kept.discover.len(), 1);
            assert!(kept.discover.iter().all(|t| month.contains(&t.date)));
        }
    }

    #[test]
    fn test_filter_month_preserves_order() {
        let kept = filter_month(&sample(), Month::new(1).unwrap());
        assert_eq!(kept.discover.len(), 2);
        assert_eq!(kept.discover[0].date, "01/05/2024");
        assert_eq!(kept.chase.len(), 2);
        assert_eq!(kept.apple.len(), 1);
        assert!(filter_month(&sample(), Month::new(3).unwrap()).iter().next().is_none());
    }

    #[test]
    fn test_totals() {
        let totals = get_totals(&filter_month(&sample(), Month::new(1).unwrap()));
        assert_eq!(totals.account(Institution::Discover), Decimal::from_str("52.60").unwrap());
        assert_eq!(totals.account(Institution::Chase), Decimal::from_str("-20.00").unwrap());
        assert_eq!(totals.account(Institution::Apple), Decimal::from_str("33.33").unwrap());
        assert_eq!(totals.groceries, Decimal::from_str("12.50").unwrap());
        assert_eq!(totals.grand_total, Decimal::from_str("65.93").unwrap());
        assert_eq!(totals.guilt_free(), Decimal::from_str("53.43").unwrap());
    }

    #[test]
    fn test_totals_identities_hold_exactly() {
        let totals = get_totals(&sample());
        let account_sum: Decimal = totals.accounts.iter().map(|a| a.total).sum();
        assert_eq!(account_sum, totals.grand_total);
        assert_eq!(totals.guilt_free() + totals.groceries, totals.grand_total);
    }

    #[test]
    fn test_totals_of_empty_ledger() {
        let totals = get_totals(&Ledger::default());
        assert_eq!(totals.accounts.len(), 3);
        assert_eq!(totals.grand_total, Decimal::ZERO);
        assert_eq!(totals.guilt_free(), Decimal::ZERO);
    }
}
