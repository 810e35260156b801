use crate::commands::helpers::{display_rows, indexed_active};
use crate::commands::{plural, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayEmployee;
use crate::model::EmployeeId;
use crate::store::{Bucket, DataStore};

/// Active employees whose salary is at or below `threshold`, in roster order.
pub fn preview<S: DataStore>(store: &S, threshold: u64) -> Result<Vec<DisplayEmployee>> {
    Ok(indexed_active(store)?
        .into_iter()
        .filter(|row| row.employee.salary <= threshold)
        .collect())
}

/// Moves every active employee with `salary <= threshold` to the trash as one batch.
///
/// Candidates are taken from a single snapshot before anything moves. Running it
/// again right away moves nothing.
pub fn run<S: DataStore>(store: &mut S, threshold: u64) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let ids: Vec<EmployeeId> = preview(store, threshold)?
        .iter()
        .map(DisplayEmployee::id)
        .collect();

    if ids.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No employees with salary at or below {}.",
            threshold
        )));
        return Ok(result);
    }

    store.move_employees(&ids, Bucket::Active, Bucket::Trash)?;
    tracing::info!(threshold, count = ids.len(), "pruned below threshold");

    let affected = display_rows(store, Bucket::Trash, &ids)?;
    result.add_message(CmdMessage::success(format!(
        "Moved {} with salary at or below {} to trash.",
        plural(affected.len()),
        threshold
    )));
    Ok(result.with_affected(affected))
}
