use crate::commands::aggregate::summarize;
use crate::commands::helpers::{indexed_active, indexed_trash};
use crate::commands::query::{project, Criteria};
use crate::commands::CmdMessage;
use crate::error::Result;
use crate::presenter::{EmployeeRow, RosterView};
use crate::store::DataStore;

/// Recomputes every dependent display from the current store state.
pub fn run<S: DataStore>(
    store: &S,
    criteria: &Criteria,
    show_trash: bool,
    messages: Vec<CmdMessage>,
) -> Result<RosterView> {
    let rows: Vec<EmployeeRow> = project(indexed_active(store)?, criteria)
        .into_iter()
        .map(EmployeeRow::from)
        .collect();
    let trash: Vec<EmployeeRow> = indexed_trash(store)?
        .into_iter()
        .map(EmployeeRow::from)
        .collect();
    let summary = summarize(store, rows.len())?;

    Ok(RosterView {
        rows,
        trash,
        summary,
        criteria: criteria.clone(),
        show_trash,
        messages,
    })
}
