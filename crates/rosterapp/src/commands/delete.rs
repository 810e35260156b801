use crate::commands::helpers::display_rows;
use crate::commands::{plural, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EmployeeId;
use crate::store::{Bucket, DataStore};

/// Soft-deletes: moves active employees to the end of the trash, untouched.
pub fn run<S: DataStore>(store: &mut S, ids: &[EmployeeId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if ids.is_empty() {
        result.add_message(CmdMessage::info("No employees selected."));
        return Ok(result);
    }

    let moved = store.move_employees(ids, Bucket::Active, Bucket::Trash)?;
    let moved_ids: Vec<EmployeeId> = moved.iter().map(|e| e.id).collect();
    tracing::info!(count = moved_ids.len(), "moved to trash");

    let affected = display_rows(store, Bucket::Trash, &moved_ids)?;
    for row in &affected {
        result.add_message(CmdMessage::success(format!(
            "Moved to trash ({}): {}",
            row.index, row.employee.name
        )));
    }
    if affected.len() > 1 {
        result.add_message(CmdMessage::info(format!(
            "{} moved to trash.",
            plural(affected.len())
        )));
    }
    Ok(result.with_affected(affected))
}
