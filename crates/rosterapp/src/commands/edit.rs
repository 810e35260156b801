use crate::commands::helpers::display_rows;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{EditRequest, EmployeeDraft, EmployeeId};
use crate::store::{Bucket, DataStore};
use crate::validation::validate;

/// Replaces every editable field of an active employee.
///
/// The id must be in the active roster; trashed employees cannot be edited. The
/// full draft is validated, and id, position and bonus percent are preserved.
pub fn run<S: DataStore>(store: &mut S, id: EmployeeId, draft: &EmployeeDraft) -> Result<CmdResult> {
    let mut employee = store.get_employee(&id, Bucket::Active)?;
    let fields = validate(draft)?;
    let previous_name = employee.name.clone();
    employee.apply(fields);
    store.save_employee(&employee, Bucket::Active)?;
    tracing::info!(id = %id, "employee updated");

    let affected = display_rows(store, Bucket::Active, &[id])?;
    let mut result = CmdResult::default();
    let label = if previous_name == employee.name {
        employee.name.clone()
    } else {
        format!("{} (was {})", employee.name, previous_name)
    };
    result.add_message(CmdMessage::success(format!(
        "Updated ({}): {}",
        affected[0].index, label
    )));
    Ok(result.with_affected(affected))
}

/// Overlays a partial edit on the current record and runs the full edit.
pub fn apply_request<S: DataStore>(
    store: &mut S,
    id: EmployeeId,
    request: &EditRequest,
) -> Result<CmdResult> {
    let current = store.get_employee(&id, Bucket::Active)?;
    run(store, id, &request.over(&current))
}
