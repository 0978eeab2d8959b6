// src/domain/reminder.rs

use crate::domain::due_date::DueDate;
use crate::domain::money::format_plain;
use rust_decimal::Decimal;

pub const SUBJECT_PREFIX: &str = "CEBUDV NSJB - Lembrete de Mensalidade";

#[derive(Debug, Clone, PartialEq)]
pub struct ReminderLine {
    pub description: String,
    pub amount: Decimal,
}

/// The monthly statement mailed to one member.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderEmail {
    pub member_name: String,
    pub recipient: String,
    /// Due date of the member's first line; every line shares the billing day.
    pub due_date: DueDate,
    pub lines: Vec<ReminderLine>,
}

impl ReminderEmail {
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|l| l.amount).sum()
    }

    pub fn subject(&self) -> String {
        format!("{SUBJECT_PREFIX}: R$ {}", format_plain(self.total()))
    }
}
