use crate::config::{export_path_in, BillingPolicy};
use crate::domain::{BillingBatch, BillingLine};
use crate::errors::PipelineError;
use crate::spreadsheets::batches::assemble_batches;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const SHEET_NAME: &str = "boletos";

/// Columns the processor requires, in its import order.
pub const REQUIRED_HEADERS: [&str; 12] = [
    "ID Externo*",
    "Nome Completo do Pagador (Sacado)*",
    "E-mail*",
    "CPF/CNPJ*",
    "Rua*",
    "Número*",
    "Bairro*",
    "Cidade*",
    "Estado*",
    "Cep*",
    "Vencimento*",
    "Valor (R$)*",
];

/// Fine, interest and discount columns; accepted by the processor, left blank.
pub const OPTIONAL_HEADERS: [&str; 11] = [
    "Tipo de Multa",
    "Valor Multa (R$/%)",
    "Tipo Juros Mora",
    "Valor Juros Mora",
    "Tipo de Desconto",
    "Data limite desconto 1",
    "Valor desconto 1 (R$/%)",
    "Data limite desconto 2",
    "Valor desconto 2 (R$/%)",
    "Data limite desconto 3",
    "Valor desconto 3 (R$/%)",
];

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Amount(Decimal),
}

#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub excluded: usize,
}

/// The populated cells of one processor row, in `REQUIRED_HEADERS` order.
pub fn processor_row(batch: &BillingBatch) -> Vec<CellValue> {
    vec![
        CellValue::Text(batch.external_id.clone()),
        CellValue::Text(batch.payer_name.clone()),
        CellValue::Text(batch.email.clone()),
        CellValue::Text(batch.tax_id.clone()),
        CellValue::Text(batch.street.clone()),
        CellValue::Text(batch.number.clone()),
        CellValue::Text(batch.district.clone()),
        CellValue::Text(batch.city.clone()),
        CellValue::Text(batch.state.clone()),
        CellValue::Text(batch.postal_code.clone()),
        CellValue::Text(batch.due_date.to_string()),
        CellValue::Amount(batch.amount),
    ]
}

/// Builds the processor import file from billing lines and writes it to `dir`.
///
/// The file name carries the first line's due date. Nothing is written for an
/// empty table.
pub fn export_processor_file(
    lines: &[BillingLine],
    dir: &Path,
    policy: &BillingPolicy,
) -> Result<Option<ExportSummary>, PipelineError> {
    let Some(first) = lines.first() else {
        warn!("No billing lines; processor file not written");
        return Ok(None);
    };

    let path = export_path_in(dir, &first.item.due_date);
    let plan = assemble_batches(lines, policy);

    let buffer = build_workbook(&plan.batches)?;
    fs::write(&path, buffer).map_err(|e| {
        PipelineError::ExportIoError(format!("Failed to write {}: {e}", path.display()))
    })?;

    info!(
        path = %path.display(),
        rows = plan.batches.len(),
        excluded = plan.excluded,
        "Processor file written"
    );

    Ok(Some(ExportSummary {
        path,
        rows: plan.batches.len(),
        excluded: plan.excluded,
    }))
}

pub fn build_workbook(batches: &[BillingBatch]) -> Result<Vec<u8>, PipelineError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| PipelineError::ExportIoError(format!("Failed to name sheet: {e}")))?;

    // Headers
    for (col, header) in REQUIRED_HEADERS.iter().chain(OPTIONAL_HEADERS.iter()).enumerate() {
        worksheet.write_string(0, col as u16, *header).map_err(|e| {
            PipelineError::ExportIoError(format!("Failed to write header '{}': {}", header, e))
        })?;
    }

    // Rows
    for (i, batch) in batches.iter().enumerate() {
        let r = (i + 1) as u32;

        for (col, cell) in processor_row(batch).into_iter().enumerate() {
            let c = col as u16;
            let written = match cell {
                CellValue::Text(text) => worksheet.write_string(r, c, &text).map(|_| ()),
                CellValue::Amount(amount) => {
                    let value = amount.to_f64().ok_or_else(|| {
                        PipelineError::ExportIoError(format!(
                            "Amount {amount} of {} does not fit a spreadsheet number",
                            batch.external_id
                        ))
                    })?;
                    worksheet.write_number(r, c, value).map(|_| ())
                }
            };
            written.map_err(|e| {
                PipelineError::ExportIoError(format!(
                    "Failed to write {} for {}: {}",
                    REQUIRED_HEADERS[col], batch.external_id, e
                ))
            })?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| PipelineError::ExportIoError(format!("Failed to save workbook: {}", e)))
}
