// src/domain/member.rs

/// One association member (sócio) as exported by Granatum.
///
/// The legal name is the join key against the ledger's counterparty column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRecord {
    pub name: String,
    pub tax_id: String,
    pub email: String,

    // Billing address
    pub street: String,
    pub number: String,
    pub complement: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,

    /// Raw `Ativo` cell, kept verbatim.
    pub active: String,
}

impl RosterRecord {
    pub fn is_active(&self) -> bool {
        matches!(
            self.active.trim().to_lowercase().as_str(),
            "sim" | "s" | "true" | "1" | "ativo"
        )
    }
}
