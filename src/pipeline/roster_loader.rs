// src/pipeline/roster_loader.rs
use crate::db::{save_roster, Database};
use crate::domain::RosterRecord;
use crate::errors::PipelineResult;
use crate::sources::read_membership_export;
use std::path::Path;
use tracing::info;

/// Reads the member export and replaces the roster snapshot with it.
pub fn generate_roster_snapshot(
    export_path: &Path,
    snapshot: &Database,
) -> PipelineResult<Vec<RosterRecord>> {
    let records = read_membership_export(export_path)?;
    save_roster(snapshot, &records)?;

    let active = records.iter().filter(|r| r.is_active()).count();
    info!(
        members = records.len(),
        active,
        snapshot = %snapshot.path().display(),
        "Roster snapshot written"
    );

    Ok(records)
}
