use colored::Colorize;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::fmt::{amount, whole_dollars};
use crate::importer::Ledger;
use crate::models::{Detail, Institution, Transaction};
use crate::reports::Totals;

/// Row colour, first match wins: credit, zeroed, food, spending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Credit,
    Zeroed,
    Food,
    Spending,
}

impl RowStyle {
    pub fn color(&self) -> Color {
        match self {
            Self::Credit => Color::Blue,
            Self::Zeroed => Color::DarkGrey,
            Self::Food => Color::Grey,
            Self::Spending => Color::Yellow,
        }
    }
}

pub fn row_style(txn: &Transaction) -> RowStyle {
    if txn.amount.is_sign_negative() && !txn.amount.is_zero() {
        RowStyle::Credit
    } else if txn.amount.is_zero() {
        RowStyle::Zeroed
    } else if txn.is_food() {
        RowStyle::Food
    } else {
        RowStyle::Spending
    }
}

fn columns(institution: Institution) -> &'static [&'static str] {
    match institution {
        Institution::Discover => &["Transaction Date", "Amount", "Description", "Category"],
        Institution::Chase => &[
            "Transaction Date",
            "Amount",
            "Description",
            "Category",
            "Type",
            "Memo",
        ],
        Institution::Apple => &[
            "Transaction Date",
            "Amount",
            "Description",
            "Merchant",
            "Category",
            "Type",
            "Purchased By",
        ],
    }
}

fn row_values(txn: &Transaction) -> Vec<String> {
    let mut values = vec![txn.date.clone(), amount(txn.amount), txn.description.clone()];
    match &txn.detail {
        Detail::Discover => values.push(txn.category.clone()),
        Detail::Chase { kind, memo } => {
            values.extend([txn.category.clone(), kind.clone(), memo.clone()]);
        }
        Detail::Apple {
            merchant,
            kind,
            purchased_by,
        } => {
            values.extend([
                merchant.clone(),
                txn.category.clone(),
                kind.clone(),
                purchased_by.clone(),
            ]);
        }
    }
    values
}

pub fn transaction_table(institution: Institution, rows: &[Transaction]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(columns(institution).to_vec());
    for txn in rows {
        let color = row_style(txn).color();
        table.add_row(
            row_values(txn)
                .into_iter()
                .map(|v| Cell::new(v).fg(color))
                .collect::<Vec<_>>(),
        );
    }
    table
}

fn align_right(table: &mut Table, column: usize) {
    if let Some(col) = table.column_mut(column) {
        col.set_cell_alignment(CellAlignment::Right);
    }
}

pub fn account_totals_table(totals: &Totals) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Account", "Amount (USD)"]);
    for institution in Institution::ALL {
        table.add_row(vec![
            Cell::new(institution.name()),
            Cell::new(whole_dollars(totals.account(institution))),
        ]);
    }
    align_right(&mut table, 1);
    table
}

pub fn monthly_totals_table(totals: &Totals) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Amount (USD)"]);
    for (label, value) in [
        ("Guilt Free", totals.guilt_free()),
        ("Groceries", totals.groceries),
        ("Grand Total", totals.grand_total),
    ] {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(whole_dollars(value)).fg(Color::Green),
        ]);
    }
    align_right(&mut table, 1);
    table
}

pub fn print_transaction_tables(ledger: &Ledger) {
    for institution in Institution::ALL {
        let table = transaction_table(institution, ledger.get(institution));
        let title = format!("{} Transactions", institution.name());
        println!("{}\n{table}", title.bold());
    }
}

pub fn print_totals_tables(totals: &Totals) {
    println!("{}\n{}", "Account Totals".bold(), account_totals_table(totals));
    println!("{}\n{}", "Monthly Totals".bold(), monthly_totals_table(totals));
}
