//! Household summary display
//!
//! Two tables: per-member balances, then the transfers that settle them.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::format_amount;
use crate::services::HouseholdSummary;

#[derive(Tabled)]
struct BalanceRow {
    #[tabled(rename = "Member")]
    member: String,
    #[tabled(rename = "Paid")]
    paid: String,
    #[tabled(rename = "Share")]
    owed: String,
    #[tabled(rename = "Net")]
    net: String,
}

#[derive(Tabled)]
struct TransferRow {
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a household summary as text tables
pub fn format_summary(summary: &HouseholdSummary, currency: &str) -> String {
    let mut output = format!("Household: {}", summary.household.name);
    if let Some(period) = summary.period {
        output.push_str(&format!(" ({})", period));
    }
    output.push('\n');
    output.push_str(&format!(
        "{} members, {} expenses, {} total\n\n",
        summary.members_count,
        summary.expenses_count,
        format_amount(summary.total_spent, currency)
    ));

    if summary.balances.is_empty() {
        output.push_str("No members.\n");
        return output;
    }

    let balances = summary.balances.iter().map(|b| BalanceRow {
        member: b.member.name.clone(),
        paid: format_amount(b.paid, currency),
        owed: format_amount(b.owed, currency),
        net: format_amount(b.net, currency),
    });
    output.push_str(&Table::new(balances).with(Style::rounded()).to_string());
    output.push_str("\n\n");

    if summary.settlements.is_empty() {
        output.push_str("Everyone is settled up.\n");
        return output;
    }

    output.push_str("Settle up:\n");
    let transfers = summary.settlements.iter().map(|t| TransferRow {
        from: t.from.name.clone(),
        to: t.to.name.clone(),
        amount: format_amount(t.amount, currency),
    });
    output.push_str(&Table::new(transfers).with(Style::rounded()).to_string());
    output.push('\n');

    output
}
