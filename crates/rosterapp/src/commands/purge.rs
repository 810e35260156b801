use crate::commands::helpers::{display_rows, indexed_trash};
use crate::commands::{plural, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EmployeeId;
use crate::store::{Bucket, DataStore};

/// Permanently deletes trashed employees. There is no way back.
///
/// Only ids in the trash can be purged; an active id is NotFound.
pub fn run<S: DataStore>(store: &mut S, ids: &[EmployeeId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if ids.is_empty() {
        result.add_message(CmdMessage::info("No employees selected."));
        return Ok(result);
    }

    // Rows are captured first so the report can show the trash index they had
    let before = display_rows(store, Bucket::Trash, ids)?;
    let removed = store.delete_employees(ids, Bucket::Trash)?;
    tracing::info!(count = removed.len(), "permanently deleted");

    let mut affected = Vec::with_capacity(removed.len());
    for employee in &removed {
        if let Some(row) = before.iter().find(|row| row.id() == employee.id) {
            result.add_message(CmdMessage::success(format!(
                "Permanently deleted ({}): {}",
                row.index, employee.name
            )));
            affected.push(row.clone());
        }
    }
    Ok(result.with_affected(affected))
}

/// Removes everything in the trash. Emptying an empty trash is a no-op.
pub fn empty_trash<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let before = indexed_trash(store)?;
    if before.is_empty() {
        result.add_message(CmdMessage::info("Trash is already empty."));
        return Ok(result);
    }

    let removed = store.clear_bucket(Bucket::Trash)?;
    tracing::info!(count = removed.len(), "trash emptied");
    result.add_message(CmdMessage::success(format!(
        "Emptied trash ({} permanently deleted).",
        plural(removed.len())
    )));
    Ok(result.with_affected(before))
}
