//! Household and member listings

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Household, Member};

#[derive(Tabled)]
struct HouseholdRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Members")]
    members: usize,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "ID")]
    id: String,
}

#[derive(Tabled)]
struct MemberRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format households as a table
pub fn format_household_list(households: &[Household], date_format: &str) -> String {
    if households.is_empty() {
        return "No households found.".to_string();
    }

    let rows = households.iter().map(|h| HouseholdRow {
        name: h.name.clone(),
        members: h.member_ids.len(),
        created: h.created_at.format(date_format).to_string(),
        id: h.id.to_string(),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format members as a table, in the order given
pub fn format_member_list(members: &[Member]) -> String {
    if members.is_empty() {
        return "No members found.".to_string();
    }

    let rows = members.iter().map(|m| MemberRow {
        name: m.name.clone(),
        email: m.email.clone(),
        id: m.id.to_string(),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}
