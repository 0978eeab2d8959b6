// src/spreadsheets/batches.rs
use crate::config::BillingPolicy;
use crate::domain::text::strip_float_suffix;
use crate::domain::{BillingBatch, BillingLine, DueDate};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Everything that identifies one boleto. Field order is the batch order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct GroupKey {
    payer_name: String,
    email: String,
    tax_id: String,
    street: String,
    number: String,
    district: String,
    city: String,
    state: String,
    postal_code: String,
    due_date: DueDate,
}

impl GroupKey {
    fn of(line: &BillingLine) -> Self {
        Self {
            payer_name: line.item.counterparty.clone(),
            email: line.member.email.clone(),
            tax_id: line.item.counterparty_document.clone(),
            street: line.member.street.clone(),
            number: line.member.number.clone(),
            district: line.member.district.clone(),
            city: line.member.city.clone(),
            state: line.member.state.clone(),
            postal_code: line.member.postal_code.clone(),
            due_date: line.item.due_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchPlan {
    pub batches: Vec<BillingBatch>,
    /// Groups dropped because their payer is on the exclusion list.
    pub excluded: usize,
}

/// Sums billing lines per payer and due date and numbers the result.
///
/// Identifiers are `YYYYMM` + a 3-digit sequence in group order, assigned before
/// excluded payers are removed, so an exclusion leaves a gap.
pub fn assemble_batches(lines: &[BillingLine], policy: &BillingPolicy) -> BatchPlan {
    let mut groups: BTreeMap<GroupKey, Decimal> = BTreeMap::new();
    for line in lines {
        *groups.entry(GroupKey::of(line)).or_insert(Decimal::ZERO) += line.item.amount;
    }

    let mut batches = Vec::with_capacity(groups.len());
    let mut excluded = 0;

    for (index, (key, amount)) in groups.into_iter().enumerate() {
        let external_id = format!("{}{:03}", key.due_date.year_month(), index + 1);

        if policy.is_excluded(&key.payer_name) {
            excluded += 1;
            continue;
        }

        batches.push(BillingBatch {
            external_id,
            postal_code: strip_float_suffix(&key.postal_code).to_string(),
            payer_name: key.payer_name,
            email: key.email,
            tax_id: key.tax_id,
            street: key.street,
            number: key.number,
            district: key.district,
            city: key.city,
            state: key.state,
            due_date: key.due_date,
            amount,
        });
    }

    BatchPlan { batches, excluded }
}
