//! Expense listing

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::services::ExpenseRow;

#[derive(Tabled)]
struct ExpenseLine {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Payer")]
    payer: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format expenses as a table, newest first as given
pub fn format_expense_list(rows: &[ExpenseRow], currency: &str, date_format: &str) -> String {
    if rows.is_empty() {
        return "No expenses found.".to_string();
    }

    let lines = rows.iter().map(|row| ExpenseLine {
        date: row.expense.date.format(date_format).to_string(),
        payer: row.payer_name.clone(),
        amount: row.expense.amount.format_with_symbol(currency),
        description: row.expense.description.clone().unwrap_or_default(),
        category: row.expense.category.clone().unwrap_or_default(),
        id: row.expense.id.to_string(),
    });
    Table::new(lines).with(Style::rounded()).to_string()
}
