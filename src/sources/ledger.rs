// src/sources/ledger.rs
use crate::errors::PipelineError;
use crate::sources::export_csv::read_export;
use serde::Deserialize;
use std::path::Path;

pub const LEDGER_COLUMNS: [&str; 7] = [
    "Forma de pagamento",
    "Cliente/Fornecedor",
    "Categoria",
    "Valor",
    "Data de vencimento",
    "Descrição",
    "Documento cliente/fornecedor",
];

/// Row of the Granatum "lançamentos" export, as text.
///
/// Amount and due date stay raw here; the billing builder decides which rows
/// get parsed at all.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerRow {
    #[serde(rename = "Forma de pagamento")]
    pub payment_method: String,
    #[serde(rename = "Cliente/Fornecedor")]
    pub counterparty: String,
    #[serde(rename = "Categoria")]
    pub category: String,
    #[serde(rename = "Valor")]
    pub amount: String,
    #[serde(rename = "Data de vencimento")]
    pub due_date: String,
    #[serde(rename = "Descrição")]
    pub description: String,
    #[serde(rename = "Documento cliente/fornecedor")]
    pub counterparty_document: String,
}

pub fn read_ledger_export(path: &Path) -> Result<Vec<LedgerRow>, PipelineError> {
    read_export(path, &LEDGER_COLUMNS)
}
