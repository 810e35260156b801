use crate::commands::aggregate::bonus_amount;
use crate::commands::helpers::display_rows;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EmployeeId;
use crate::store::{Bucket, DataStore};
use crate::validation::validate_bonus_percent;

/// Sets the bonus percent of an active employee. Only `bonus_percent` changes.
///
/// The percent is range-checked before the id is looked up.
pub fn run<S: DataStore>(store: &mut S, id: EmployeeId, percent: i64) -> Result<CmdResult> {
    let percent = validate_bonus_percent(percent)?;
    let mut employee = store.get_employee(&id, Bucket::Active)?;
    employee.bonus_percent = percent;
    store.save_employee(&employee, Bucket::Active)?;
    tracing::info!(id = %id, percent, "bonus set");

    let affected = display_rows(store, Bucket::Active, &[id])?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Bonus for ({}) {} set to {}% ({})",
        affected[0].index,
        employee.name,
        percent,
        bonus_amount(&employee)
    )));
    Ok(result.with_affected(affected))
}
