// src/pipeline/report.rs
use tracing::{info, warn};

/// Why a ledger row did not make it into the billing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    UnrecognizedPaymentMethod,
    OwnOrganization,
    NoRosterMatch,
}

/// Counts of what the billing builder kept and dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterReport {
    pub rows_read: usize,
    pub rows_kept: usize,
    pub unrecognized_payment_method: usize,
    pub own_organization: usize,
    /// Counterparties without a roster entry, first-seen order, with row counts.
    pub unmatched: Vec<(String, usize)>,
}

impl FilterReport {
    pub fn reject(&mut self, reason: RejectReason, counterparty: &str) {
        match reason {
            RejectReason::UnrecognizedPaymentMethod => self.unrecognized_payment_method += 1,
            RejectReason::OwnOrganization => self.own_organization += 1,
            RejectReason::NoRosterMatch => {
                match self.unmatched.iter_mut().find(|(name, _)| name == counterparty) {
                    Some((_, count)) => *count += 1,
                    None => self.unmatched.push((counterparty.to_string(), 1)),
                }
            }
        }
    }

    pub fn unmatched_rows(&self) -> usize {
        self.unmatched.iter().map(|(_, n)| n).sum()
    }

    pub fn log(&self) {
        info!(
            read = self.rows_read,
            kept = self.rows_kept,
            unrecognized_payment_method = self.unrecognized_payment_method,
            own_organization = self.own_organization,
            no_roster_match = self.unmatched_rows(),
            "Ledger filtered"
        );

        for (name, rows) in &self.unmatched {
            warn!(counterparty = %name, rows, "No roster entry; rows dropped");
        }
    }
}
