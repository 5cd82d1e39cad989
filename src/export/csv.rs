//! CSV export of a household summary
//!
//! Balances and transfers share one table, told apart by the `record`
//! column.

use std::io::Write;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{HousesplitError, HousesplitResult};
use crate::services::HouseholdSummary;

#[derive(Serialize)]
struct SummaryRecord<'a> {
    record: &'static str,
    member: &'a str,
    counterparty: &'a str,
    paid: String,
    owed: String,
    net: String,
    amount: String,
}

fn cents(value: Decimal) -> String {
    format!("{:.2}", value)
}

/// Write balances then transfers as CSV
pub fn export_summary_csv<W: Write>(
    summary: &HouseholdSummary,
    writer: &mut W,
) -> HousesplitResult<()> {
    let mut out = csv::Writer::from_writer(writer);

    for balance in &summary.balances {
        out.serialize(SummaryRecord {
            record: "balance",
            member: &balance.member.name,
            counterparty: "",
            paid: cents(balance.paid),
            owed: cents(balance.owed),
            net: cents(balance.net),
            amount: String::new(),
        })
        .map_err(|e| HousesplitError::Export(e.to_string()))?;
    }

    for transfer in &summary.settlements {
        out.serialize(SummaryRecord {
            record: "transfer",
            member: &transfer.from.name,
            counterparty: &transfer.to.name,
            paid: String::new(),
            owed: String::new(),
            net: String::new(),
            amount: cents(transfer.amount),
        })
        .map_err(|e| HousesplitError::Export(e.to_string()))?;
    }

    out.flush()
        .map_err(|e| HousesplitError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::sample_summary;

    #[test]
    fn test_csv_export() {
        let summary = sample_summary();
        let mut buffer = Vec::new();
        export_summary_csv(&summary, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "record,member,counterparty,paid,owed,net,amount");
        assert_eq!(lines[1], "balance,Alice,,90.00,30.00,60.00,");
        assert_eq!(lines[2], "balance,Bob,,0.00,30.00,-30.00,");
        assert_eq!(lines[3], "balance,\"Carol, Jr.\",,0.00,30.00,-30.00,");
        assert_eq!(lines[4], "transfer,Bob,Alice,,,,30.00");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_csv_empty_summary_has_no_rows() {
        let mut summary = sample_summary();
        summary.balances.clear();
        summary.settlements.clear();

        let mut buffer = Vec::new();
        export_summary_csv(&summary, &mut buffer).unwrap();
        assert!(buffer.is_empty());
    }
}
