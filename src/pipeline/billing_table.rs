// src/pipeline/billing_table.rs
use crate::config::BillingPolicy;
use crate::db::{load_roster, Database};
use crate::domain::money::parse_brl_amount;
use crate::domain::{BillingLine, DueDate, LineItem, RosterRecord};
use crate::errors::{PipelineError, PipelineResult};
use crate::pipeline::report::{FilterReport, RejectReason};
use crate::sources::{read_ledger_export, LedgerRow};

use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

/// Billing lines in ledger order, plus what was dropped on the way.
#[derive(Debug, Clone)]
pub struct BillingTable {
    pub lines: Vec<BillingLine>,
    pub report: FilterReport,
}

/// Reads the ledger export and joins it against the roster snapshot.
pub fn build_billing_table(
    ledger_path: &Path,
    snapshot: &Database,
    policy: &BillingPolicy,
) -> PipelineResult<BillingTable> {
    let rows = read_ledger_export(ledger_path)?;
    let roster = load_roster(snapshot)?;

    let table = build_billing_lines(rows, &roster, policy)?;
    table.report.log();
    Ok(table)
}

/// Filters, normalizes and joins ledger rows.
///
/// Rows are dropped (and counted) when the payment method is not a boleto
/// method, when the counterparty is the organization itself, or when no roster
/// entry carries the counterparty's name. Amount and due date are only parsed
/// for rows that survive all three.
pub fn build_billing_lines(
    rows: Vec<LedgerRow>,
    roster: &[RosterRecord],
    policy: &BillingPolicy,
) -> PipelineResult<BillingTable> {
    let members = index_roster(roster);
    let mut report = FilterReport {
        rows_read: rows.len(),
        ..FilterReport::default()
    };
    let mut lines = Vec::new();

    for (index, row) in rows.into_iter().enumerate() {
        let row_number = index + 1;

        if !policy.accepts_payment_method(&row.payment_method) {
            report.reject(RejectReason::UnrecognizedPaymentMethod, &row.counterparty);
            continue;
        }
        if row.counterparty == policy.own_organization {
            report.reject(RejectReason::OwnOrganization, &row.counterparty);
            continue;
        }
        let Some(member) = members.get(row.counterparty.as_str()) else {
            report.reject(RejectReason::NoRosterMatch, &row.counterparty);
            continue;
        };

        let item = normalize_row(row, policy)
            .map_err(|msg| PipelineError::FormatError(format!("ledger row {row_number}: {msg}")))?;

        lines.push(BillingLine {
            item,
            member: (*member).clone(),
        });
    }

    report.rows_kept = lines.len();
    Ok(BillingTable { lines, report })
}

/// Applies the fee override and moves the due date to the billing day.
fn normalize_row(row: LedgerRow, policy: &BillingPolicy) -> Result<LineItem, String> {
    let amount = if row.category == policy.fee_category {
        policy.fee_amount
    } else {
        parse_brl_amount(&row.amount)?
    };

    let due_date = DueDate::parse(&row.due_date)?.with_day(policy.due_day);

    Ok(LineItem {
        counterparty: row.counterparty,
        due_date,
        description: row.description,
        category: row.category,
        amount,
        counterparty_document: row.counterparty_document,
        payment_method: row.payment_method,
    })
}

fn index_roster(roster: &[RosterRecord]) -> HashMap<&str, &RosterRecord> {
    let mut index = HashMap::with_capacity(roster.len());
    for record in roster {
        if index.contains_key(record.name.as_str()) {
            warn!(member = %record.name, "Duplicate roster name; first entry is used for billing");
            continue;
        }
        index.insert(record.name.as_str(), record);
    }
    index
}
