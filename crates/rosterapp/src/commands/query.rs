//! Filtered, sorted projections of the active roster.
//!
//! Every criterion is optional and they compose with AND. Empty criteria yield the
//! whole active roster in store order. Projections are computed fresh on each call
//! and never touch the store. Rows keep their canonical display index, so `3`
//! still means the third employee of the unfiltered roster.

use crate::commands::aggregate::bonus_amount;
use crate::commands::helpers::indexed_active;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayEmployee;
use crate::model::{Employee, Status};
use crate::store::DataStore;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Role,
    Salary,
    Bonus,
    Status,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Name => "name",
            SortKey::Role => "role",
            SortKey::Salary => "salary",
            SortKey::Bonus => "bonus",
            SortKey::Status => "status",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sort {
    pub key: SortKey,
    pub descending: bool,
}

impl Sort {
    fn compare(&self, a: &Employee, b: &Employee) -> Ordering {
        let ordering = match self.key {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Role => a.role.to_lowercase().cmp(&b.role.to_lowercase()),
            SortKey::Salary => a.salary.cmp(&b.salary),
            SortKey::Bonus => bonus_amount(a).cmp(&bonus_amount(b)),
            SortKey::Status => a.status.cmp(&b.status),
        };
        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

/// Filter and sort options for a projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Criteria {
    /// Case-insensitive substring of the name.
    pub name_contains: Option<String>,
    /// Case-insensitive exact role.
    pub role: Option<String>,
    pub status: Option<Status>,
    pub salary_min: Option<u64>,
    pub salary_max: Option<u64>,
    /// Bounds on the derived bonus amount, not the percent.
    pub bonus_min: Option<u64>,
    pub bonus_max: Option<u64>,
    pub sort: Option<Sort>,
}

impl Criteria {
    pub fn is_empty(&self) -> bool {
        *self == Criteria::default()
    }

    /// True when any filter (not sort) is set.
    pub fn filters(&self) -> bool {
        Criteria {
            sort: None,
            ..self.clone()
        } != Criteria::default()
    }

    /// Names of the ranges whose minimum is above their maximum.
    pub fn inverted_ranges(&self) -> Vec<&'static str> {
        let mut inverted = Vec::new();
        if matches!((self.salary_min, self.salary_max), (Some(min), Some(max)) if min > max) {
            inverted.push("salary");
        }
        if matches!((self.bonus_min, self.bonus_max), (Some(min), Some(max)) if min > max) {
            inverted.push("bonus");
        }
        inverted
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        if let Some(needle) = non_blank(&self.name_contains) {
            if !employee
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        if let Some(role) = non_blank(&self.role) {
            if !employee.role.trim().eq_ignore_ascii_case(role) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if employee.status != status {
                return false;
            }
        }
        if !in_range(employee.salary, self.salary_min, self.salary_max) {
            return false;
        }
        if self.bonus_min.is_some() || self.bonus_max.is_some() {
            return in_range(bonus_amount(employee), self.bonus_min, self.bonus_max);
        }
        true
    }

    /// Short human description of the active options, e.g. `name~ana, salary>=100`.
    pub fn describe(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if let Some(name) = non_blank(&self.name_contains) {
            parts.push(format!("name~{}", name));
        }
        if let Some(role) = non_blank(&self.role) {
            parts.push(format!("role={}", role));
        }
        if let Some(status) = self.status {
            parts.push(format!("status={}", status));
        }
        parts.extend(describe_range("salary", self.salary_min, self.salary_max));
        parts.extend(describe_range("bonus", self.bonus_min, self.bonus_max));
        if let Some(sort) = self.sort {
            let direction = if sort.descending { "desc" } else { "asc" };
            parts.push(format!("sort={} {}", sort.key, direction));
        }
        parts
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn in_range(value: u64, min: Option<u64>, max: Option<u64>) -> bool {
    min.map_or(true, |min| value >= min) && max.map_or(true, |max| value <= max)
}

fn describe_range(label: &str, min: Option<u64>, max: Option<u64>) -> Option<String> {
    match (min, max) {
        (Some(min), Some(max)) => Some(format!("{} {}..={}", label, min, max)),
        (Some(min), None) => Some(format!("{}>={}", label, min)),
        (None, Some(max)) => Some(format!("{}<={}", label, max)),
        (None, None) => None,
    }
}

/// Applies `criteria` to already-indexed rows. Sorting is stable.
pub fn project(rows: Vec<DisplayEmployee>, criteria: &Criteria) -> Vec<DisplayEmployee> {
    let mut projected: Vec<DisplayEmployee> = rows
        .into_iter()
        .filter(|row| criteria.matches(&row.employee))
        .collect();
    if let Some(sort) = criteria.sort {
        projected.sort_by(|a, b| sort.compare(&a.employee, &b.employee));
    }
    projected
}

pub fn run<S: DataStore>(store: &S, criteria: &Criteria) -> Result<CmdResult> {
    let all = indexed_active(store)?;
    let total = all.len();
    let listed = project(all, criteria);
    tracing::debug!(shown = listed.len(), total, "projected roster");

    let mut result = CmdResult::default();
    if listed.is_empty() {
        let message = if total == 0 {
            "No employees yet."
        } else {
            "No employees match the current filter."
        };
        result.add_message(CmdMessage::info(message));
    }
    Ok(result.with_listed(listed))
}
