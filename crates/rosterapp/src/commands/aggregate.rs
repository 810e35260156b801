//! Derived scalars over a store snapshot. Nothing here is cached: every call
//! recomputes from the current collections.

use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Employee;
use crate::store::{Bucket, DataStore};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub active_count: usize,
    pub trash_count: usize,
    pub total_payroll: u128,
    pub total_bonus: u128,
    /// Size of the projection currently on screen.
    pub shown_count: usize,
}

/// `salary * bonus_percent / 100`, truncated toward zero.
pub fn bonus_amount(employee: &Employee) -> u64 {
    let amount = u128::from(employee.salary) * u128::from(employee.bonus_percent) / 100;
    // bonus_percent <= 100, so the amount never exceeds the salary
    u64::try_from(amount).unwrap_or(employee.salary)
}

pub fn total_payroll(employees: &[Employee]) -> u128 {
    employees.iter().map(|e| u128::from(e.salary)).sum()
}

pub fn total_bonus(employees: &[Employee]) -> u128 {
    employees.iter().map(|e| u128::from(bonus_amount(e))).sum()
}

pub fn summarize<S: DataStore>(store: &S, shown_count: usize) -> Result<Summary> {
    let active = store.list_employees(Bucket::Active)?;
    Ok(Summary {
        active_count: active.len(),
        trash_count: store.count(Bucket::Trash)?,
        total_payroll: total_payroll(&active),
        total_bonus: total_bonus(&active),
        shown_count,
    })
}

/// Summary over the whole active roster.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let active_count = store.count(Bucket::Active)?;
    Ok(CmdResult::default().with_summary(summarize(store, active_count)?))
}
