use crate::commands::helpers::display_rows;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Employee, EmployeeDraft};
use crate::store::{Bucket, DataStore};
use crate::validation::validate;

/// Validates the draft and appends a new employee to the active roster.
pub fn run<S: DataStore>(store: &mut S, draft: &EmployeeDraft) -> Result<CmdResult> {
    let fields = validate(draft)?;
    let employee = Employee::new(fields);
    store.save_employee(&employee, Bucket::Active)?;
    tracing::info!(id = %employee.id, name = %employee.name, "employee added");

    let affected = display_rows(store, Bucket::Active, &[employee.id])?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added ({}): {}",
        affected[0].index, employee.name
    )));
    Ok(result.with_affected(affected))
}
