// src/db/roster.rs
use crate::db::connection::{init_db, Database};
use crate::domain::RosterRecord;
use crate::errors::PipelineError;

use rusqlite::params;

/// Replaces the snapshot with `records`, keeping their order.
pub fn save_roster(db: &Database, records: &[RosterRecord]) -> Result<usize, PipelineError> {
    db.reset()?;
    init_db(db)?;

    db.with_conn(|conn| {
        let tx = conn
            .transaction()
            .map_err(|e| PipelineError::DbError(e.to_string()))?;

        {
            let mut stmt = tx
                .prepare(
                    r#"
                    INSERT INTO socios (
                      position,
                      nome, cpf_cnpj, email,
                      endereco, numero, complemento, bairro,
                      cidade, estado, cep,
                      ativo
                    )
                    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
                    "#,
                )
                .map_err(|e| PipelineError::DbError(e.to_string()))?;

            for (position, r) in records.iter().enumerate() {
                stmt.execute(params![
                    position as i64,
                    r.name.as_str(),
                    r.tax_id.as_str(),
                    r.email.as_str(),
                    r.street.as_str(),
                    r.number.as_str(),
                    r.complement.as_str(),
                    r.district.as_str(),
                    r.city.as_str(),
                    r.state.as_str(),
                    r.postal_code.as_str(),
                    r.active.as_str(),
                ])
                .map_err(|e| PipelineError::DbError(format!("Insert failed: {e}")))?;
            }
        }

        tx.commit()
            .map_err(|e| PipelineError::DbError(e.to_string()))?;

        Ok(records.len())
    })
}

/// Loads the snapshot in the export's row order.
pub fn load_roster(db: &Database) -> Result<Vec<RosterRecord>, PipelineError> {
    db.with_read_only(|conn| {
        let mut stmt = conn
            .prepare(
                r#"
                SELECT
                  nome, cpf_cnpj, email,
                  endereco, numero, complemento, bairro,
                  cidade, estado, cep,
                  ativo
                FROM socios
                ORDER BY position
                "#,
            )
            .map_err(|e| PipelineError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(RosterRecord {
                    name: row.get(0)?,
                    tax_id: row.get(1)?,
                    email: row.get(2)?,
                    street: row.get(3)?,
                    number: row.get(4)?,
                    complement: row.get(5)?,
                    district: row.get(6)?,
                    city: row.get(7)?,
                    state: row.get(8)?,
                    postal_code: row.get(9)?,
                    active: row.get(10)?,
                })
            })
            .map_err(|e| PipelineError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(|e| PipelineError::DbError(e.to_string()))?);
        }
        Ok(out)
    })
}
