// src/sources/membership.rs
use crate::domain::RosterRecord;
use crate::errors::PipelineError;
use crate::sources::export_csv::read_export;
use serde::Deserialize;
use std::path::Path;

pub const MEMBERSHIP_COLUMNS: [&str; 11] = [
    "Nome/Razão Social",
    "CPF/CNPJ",
    "Email",
    "Endereço",
    "Número",
    "Complemento",
    "Bairro",
    "Cidade",
    "Estado",
    "CEP",
    "Ativo",
];

/// Row of the Granatum "clientes" export, restricted to the retained columns.
#[derive(Debug, Deserialize)]
pub struct MembershipRow {
    #[serde(rename = "Nome/Razão Social")]
    pub name: String,
    #[serde(rename = "CPF/CNPJ")]
    pub tax_id: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Endereço")]
    pub street: String,
    #[serde(rename = "Número")]
    pub number: String,
    #[serde(rename = "Complemento")]
    pub complement: String,
    #[serde(rename = "Bairro")]
    pub district: String,
    #[serde(rename = "Cidade")]
    pub city: String,
    #[serde(rename = "Estado")]
    pub state: String,
    #[serde(rename = "CEP")]
    pub postal_code: String,
    #[serde(rename = "Ativo")]
    pub active: String,
}

impl From<MembershipRow> for RosterRecord {
    fn from(row: MembershipRow) -> Self {
        RosterRecord {
            name: row.name,
            tax_id: row.tax_id,
            email: row.email,
            street: row.street,
            number: row.number,
            complement: row.complement,
            district: row.district,
            city: row.city,
            state: row.state,
            postal_code: row.postal_code,
            active: row.active,
        }
    }
}

/// Reads the member export in file order.
pub fn read_membership_export(path: &Path) -> Result<Vec<RosterRecord>, PipelineError> {
    let rows: Vec<MembershipRow> = read_export(path, &MEMBERSHIP_COLUMNS)?;
    Ok(rows.into_iter().map(RosterRecord::from).collect())
}
