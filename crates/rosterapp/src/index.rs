//! # Employee Identifiers: EmployeeId vs Display Index
//!
//! Every record carries an [`EmployeeId`] (a UUID) that never changes. UUIDs are the
//! right thing to mutate by, but nobody wants to type one, so clients show a short
//! display index next to each row instead.
//!
//! ## Canonical Ordering
//!
//! Display indexes are assigned from the **unfiltered** collection order:
//! - Active employees: `1`, `2`, `3`... in roster order (oldest first, restored last)
//! - Trash: `t1`, `t2`... in deletion order (most recently deleted last)
//!
//! Filtering or sorting a view never renumbers a row, so `delete 2` targets the same
//! employee whatever the current filter is.
//!
//! ## Resolution
//!
//! Indexes only live at the edges. The API resolves them to ids against a fresh
//! snapshot before any command runs (see `commands::helpers::resolve_selectors`), and
//! all commands take ids. A selector may also be a full UUID.
//!
//! ## Implementation
//!
//! - [`index_active`] / [`index_trash`]: assign canonical display indexes
//! - [`DisplayIndex`]: the user-facing index (`Active`, `Trash`)
//! - [`DisplayEmployee`]: an `Employee` paired with its `DisplayIndex`
//! - [`parse_index_or_range`]: parses user input like `"1-3"` into an [`EmployeeSelector`]

use crate::model::{Employee, EmployeeId};
use crate::store::Bucket;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::str::FromStr;

/// A user-facing index for an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DisplayIndex {
    Active(usize),
    Trash(usize),
}

impl DisplayIndex {
    pub fn bucket(&self) -> Bucket {
        match self {
            DisplayIndex::Active(_) => Bucket::Active,
            DisplayIndex::Trash(_) => Bucket::Trash,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            DisplayIndex::Active(n) | DisplayIndex::Trash(n) => *n,
        }
    }
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayIndex::Active(i) => write!(f, "{}", i),
            DisplayIndex::Trash(i) => write!(f, "t{}", i),
        }
    }
}

impl Serialize for DisplayIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (rest, make): (&str, fn(usize) -> DisplayIndex) = match s.strip_prefix('t') {
            Some(rest) => (rest, DisplayIndex::Trash),
            None => (s, DisplayIndex::Active),
        };
        match rest.parse::<usize>() {
            Ok(0) => Err(format!("Indexes start at 1: {}", s)),
            Ok(n) => Ok(make(n)),
            Err(_) => Err(format!("Invalid index format: {}", s)),
        }
    }
}

/// A user input selecting one or more employees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeSelector {
    Index(DisplayIndex),
    Range(DisplayIndex, DisplayIndex),
    Id(EmployeeId),
}

impl std::fmt::Display for EmployeeSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmployeeSelector::Index(idx) => write!(f, "{}", idx),
            EmployeeSelector::Range(start, end) => write!(f, "{}-{}", start, end),
            EmployeeSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

/// An employee together with its canonical display index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayEmployee {
    pub index: DisplayIndex,
    pub employee: Employee,
    /// Only set for trash rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl DisplayEmployee {
    pub fn id(&self) -> EmployeeId {
        self.employee.id
    }
}

/// Assigns `Active(1..)` in store order.
pub fn index_active(employees: Vec<Employee>) -> Vec<DisplayEmployee> {
    employees
        .into_iter()
        .enumerate()
        .map(|(i, employee)| DisplayEmployee {
            index: DisplayIndex::Active(i + 1),
            employee,
            deleted_at: None,
        })
        .collect()
}

/// Assigns `Trash(1..)` in deletion order.
pub fn index_trash(entries: Vec<(Employee, DateTime<Utc>)>) -> Vec<DisplayEmployee> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, (employee, deleted_at))| DisplayEmployee {
            index: DisplayIndex::Trash(i + 1),
            employee,
            deleted_at: Some(deleted_at),
        })
        .collect()
}

/// Parses a single input that may be an index, a range of indexes or a UUID.
///
/// Supports formats:
/// - Index: `"3"`, `"t2"`
/// - Range: `"1-3"`, `"t1-t4"` (homogeneous, start <= end)
/// - Id: a full UUID
pub fn parse_index_or_range(s: &str) -> Result<EmployeeSelector, String> {
    let s = s.trim();
    if let Ok(id) = s.parse::<EmployeeId>() {
        return Ok(EmployeeSelector::Id(id));
    }

    if let Some(dash_pos) = s.find('-') {
        if dash_pos > 0 {
            let start = DisplayIndex::from_str(&s[..dash_pos])?;
            let end = DisplayIndex::from_str(&s[dash_pos + 1..])?;

            if start.bucket() != end.bucket() {
                return Err(format!(
                    "Invalid range {}: cannot mix active and trash indexes",
                    s
                ));
            }
            if start.position() > end.position() {
                return Err(format!("Invalid range {}: start is after end", s));
            }
            return Ok(EmployeeSelector::Range(start, end));
        }
    }

    DisplayIndex::from_str(s).map(EmployeeSelector::Index)
}

/// Rewrites bare numbers as trash indexes: `"3"` -> `"t3"`, `"2-4"` -> `"t2-t4"`.
/// Used by commands that only make sense on the trash (restore, purge).
pub fn normalize_to_trash_index(s: &str) -> String {
    let s = s.trim();
    if let Some(dash_pos) = s.find('-') {
        if dash_pos > 0 && s.parse::<EmployeeId>().is_err() {
            return format!(
                "{}-{}",
                normalize_single_to_trash(&s[..dash_pos]),
                normalize_single_to_trash(&s[dash_pos + 1..])
            );
        }
    }
    normalize_single_to_trash(s)
}

fn normalize_single_to_trash(s: &str) -> String {
    if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
        format!("t{}", s)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EmployeeFields, Status};

    fn employee(name: &str) -> Employee {
        Employee::new(EmployeeFields {
            name: name.into(),
            role: "Engineer".into(),
            salary: 1000,
            status: Status::Active,
        })
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(DisplayIndex::Active(3).to_string(), "3");
        assert_eq!(DisplayIndex::Trash(2).to_string(), "t2");
        assert_eq!("3".parse::<DisplayIndex>(), Ok(DisplayIndex::Active(3)));
        assert_eq!("t2".parse::<DisplayIndex>(), Ok(DisplayIndex::Trash(2)));
    }

    #[test]
    fn test_invalid_indexes() {
        assert!("0".parse::<DisplayIndex>().is_err());
        assert!("t0".parse::<DisplayIndex>().is_err());
        assert!("x1".parse::<DisplayIndex>().is_err());
        assert!("".parse::<DisplayIndex>().is_err());
        assert!("t".parse::<DisplayIndex>().is_err());
    }

    #[test]
    fn test_index_active_is_one_based_in_order() {
        let indexed = index_active(vec![employee("A"), employee("B")]);
        assert_eq!(indexed[0].index, DisplayIndex::Active(1));
        assert_eq!(indexed[0].employee.name, "A");
        assert_eq!(indexed[1].index, DisplayIndex::Active(2));
        assert!(indexed[1].deleted_at.is_none());
    }

    #[test]
    fn test_index_trash_keeps_deleted_at() {
        let now = Utc::now();
        let indexed = index_trash(vec![(employee("A"), now)]);
        assert_eq!(indexed[0].index, DisplayIndex::Trash(1));
        assert_eq!(indexed[0].deleted_at, Some(now));
    }

    #[test]
    fn test_parse_ranges() {
        assert_eq!(
            parse_index_or_range("1-3"),
            Ok(EmployeeSelector::Range(
                DisplayIndex::Active(1),
                DisplayIndex::Active(3)
            ))
        );
        assert_eq!(
            parse_index_or_range("t1-t2"),
            Ok(EmployeeSelector::Range(
                DisplayIndex::Trash(1),
                DisplayIndex::Trash(2)
            ))
        );
        assert!(parse_index_or_range("1-t3").is_err());
        assert!(parse_index_or_range("3-1").is_err());
    }

    #[test]
    fn test_parse_uuid_selector() {
        let id = EmployeeId::new();
        assert_eq!(
            parse_index_or_range(&id.to_string()),
            Ok(EmployeeSelector::Id(id))
        );
    }

    #[test]
    fn test_normalize_to_trash_index() {
        assert_eq!(normalize_to_trash_index("3"), "t3");
        assert_eq!(normalize_to_trash_index("t3"), "t3");
        assert_eq!(normalize_to_trash_index("2-4"), "t2-t4");
        assert_eq!(normalize_to_trash_index("2-t4"), "t2-t4");
        assert_eq!(normalize_to_trash_index("abc"), "abc");

        let id = EmployeeId::new().to_string();
        assert_eq!(normalize_to_trash_index(&id), id);
    }
}
