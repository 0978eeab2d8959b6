// src/domain/billing.rs

use crate::domain::due_date::DueDate;
use crate::domain::member::RosterRecord;
use rust_decimal::Decimal;

/// One ledger row (lançamento) that survived the payment-method filter,
/// with its fee amount and due date already normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub counterparty: String,
    pub due_date: DueDate,
    pub description: String,
    pub category: String,
    pub amount: Decimal,
    pub counterparty_document: String,
    pub payment_method: String,
}

/// A line item joined with the roster entry of its counterparty.
#[derive(Debug, Clone, PartialEq)]
pub struct BillingLine {
    pub item: LineItem,
    pub member: RosterRecord,
}

impl BillingLine {
    pub fn member_name(&self) -> &str {
        &self.member.name
    }
}

/// One record of the payment processor's import file: a member's line items
/// for one due date, summed.
#[derive(Debug, Clone, PartialEq)]
pub struct BillingBatch {
    pub external_id: String,
    pub payer_name: String,
    pub email: String,
    pub tax_id: String,
    pub street: String,
    pub number: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub due_date: DueDate,
    pub amount: Decimal,
}
