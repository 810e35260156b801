//! Field validation for employee records.
//!
//! The same rules run for both add and edit:
//! - **Name**: required, ASCII letters and whitespace only
//! - **Role**: required, ASCII letters, digits, whitespace and hyphens
//! - **Salary**: required, a positive whole number
//! - **Status**: required, one of `Active`, `On Leave`, `Terminated`
//!
//! Name and role are trimmed before they are checked and stored.
//! [`validate`] reports every failing field at once instead of stopping at the first.

use crate::error::RangeError;
use crate::model::{EmployeeDraft, EmployeeFields, Field, Status};
use std::collections::BTreeMap;
use std::fmt;

pub const MAX_BONUS_PERCENT: i64 = 100;

/// Validates a draft, returning the parsed fields or all field errors.
///
/// # Examples
/// ```
/// use rosterapp::model::{EmployeeDraft, Field};
/// use rosterapp::validation::validate;
///
/// let ok = validate(&EmployeeDraft::new("Ana Silva", "Engineer", "50000", "Active"));
/// assert!(ok.is_ok());
///
/// let err = validate(&EmployeeDraft::new("John3", "Engineer", "50000", "Active")).unwrap_err();
/// assert!(err.get(Field::Name).is_some());
/// assert_eq!(err.len(), 1);
/// ```
pub fn validate(draft: &EmployeeDraft) -> Result<EmployeeFields, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = check_name(&draft.name).map_err(|e| errors.insert(Field::Name, e));
    let role = check_role(&draft.role).map_err(|e| errors.insert(Field::Role, e));
    let salary = check_salary(&draft.salary).map_err(|e| errors.insert(Field::Salary, e));
    let status = check_status(&draft.status).map_err(|e| errors.insert(Field::Status, e));

    match (name, role, salary, status) {
        (Ok(name), Ok(role), Ok(salary), Ok(status)) => Ok(EmployeeFields {
            name,
            role,
            salary,
            status,
        }),
        _ => Err(errors),
    }
}

fn check_name(raw: &str) -> Result<String, String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("Employee name is required.".to_string());
    }
    if !is_valid_name(name) {
        return Err("Name can only contain letters and spaces.".to_string());
    }
    Ok(name.to_string())
}

fn check_role(raw: &str) -> Result<String, String> {
    let role = raw.trim();
    if role.is_empty() {
        return Err("Role is required.".to_string());
    }
    if !is_valid_role(role) {
        return Err("Role can only contain letters, numbers, spaces, or hyphens.".to_string());
    }
    Ok(role.to_string())
}

fn check_salary(raw: &str) -> Result<u64, String> {
    let salary = raw.trim();
    if salary.is_empty() {
        return Err("Salary is required.".to_string());
    }
    match salary.parse::<u64>() {
        Ok(0) => Err("Salary must be a positive whole number.".to_string()),
        Ok(value) => Ok(value),
        Err(_) if is_negative_integer(salary) => {
            Err("Salary must be a positive whole number.".to_string())
        }
        Err(_) if salary.chars().all(|c| c.is_ascii_digit()) => {
            Err("Salary is too large.".to_string())
        }
        Err(_) => Err("Salary must be a whole number.".to_string()),
    }
}

fn check_status(raw: &str) -> Result<Status, String> {
    if raw.trim().is_empty() {
        return Err("Status is required.".to_string());
    }
    raw.parse::<Status>()
        .map_err(|_| "Status must be one of Active, On Leave, or Terminated.".to_string())
}

/// `^[A-Za-z\s]+$`
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|ch| ch.is_ascii_alphabetic() || ch.is_whitespace())
}

/// `^[A-Za-z0-9\s-]+$`
pub fn is_valid_role(role: &str) -> bool {
    !role.is_empty()
        && role
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch.is_whitespace() || ch == '-')
}

fn is_negative_integer(s: &str) -> bool {
    s.strip_prefix('-')
        .map(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false)
}

/// Checks a bonus percentage against `[0, 100]`.
pub fn validate_bonus_percent(percent: i64) -> Result<u8, RangeError> {
    if !(0..=MAX_BONUS_PERCENT).contains(&percent) {
        return Err(RangeError::BonusPercent(percent));
    }
    Ok(percent as u8)
}

/// Parses a raw prompt answer into a bonus percentage.
pub fn parse_bonus_percent(raw: &str) -> Result<u8, RangeError> {
    let trimmed = raw.trim().trim_end_matches('%').trim();
    let percent = trimmed
        .parse::<i64>()
        .map_err(|_| RangeError::BonusNotANumber(raw.trim().to_string()))?;
    validate_bonus_percent(percent)
}

/// Checks a salary threshold; negative values are rejected.
pub fn validate_threshold(threshold: i64) -> Result<u64, RangeError> {
    u64::try_from(threshold).map_err(|_| RangeError::Threshold(threshold.to_string()))
}

/// Parses a raw prompt answer into a salary threshold.
pub fn parse_threshold(raw: &str) -> Result<u64, RangeError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<u64>()
        .map_err(|_| RangeError::Threshold(trimmed.to_string()))
}

/// Per-field validation failures, ordered by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}
