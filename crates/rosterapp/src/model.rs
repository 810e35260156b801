use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identity of an employee. Never reused, never renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| format!("Invalid employee id: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Active,
    OnLeave,
    Terminated,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Active, Status::OnLeave, Status::Terminated];

    pub fn label(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::OnLeave => "On Leave",
            Status::Terminated => "Terminated",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = String;

    /// Case-insensitive; spaces, hyphens and underscores are ignored,
    /// so "On Leave", "on-leave" and "ONLEAVE" all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "active" => Ok(Status::Active),
            "onleave" => Ok(Status::OnLeave),
            "terminated" => Ok(Status::Terminated),
            _ => Err(format!("Unknown status: {}", s.trim())),
        }
    }
}

/// The editable fields of an employee, as used by validation errors and prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Role,
    Salary,
    Status,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Role, Field::Salary, Field::Status];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Role => "Role",
            Field::Salary => "Salary",
            Field::Status => "Status",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => f.write_str("name"),
            Field::Role => f.write_str("role"),
            Field::Salary => f.write_str("salary"),
            Field::Status => f.write_str("status"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub(crate) id: EmployeeId,
    pub(crate) name: String,
    pub(crate) role: String,
    pub(crate) salary: u64,
    pub(crate) bonus_percent: u8,
    pub(crate) status: Status,
}

impl Employee {
    /// Builds a fresh record from validated fields. Bonus starts at zero.
    pub fn new(fields: EmployeeFields) -> Self {
        Self {
            id: EmployeeId::new(),
            name: fields.name,
            role: fields.role,
            salary: fields.salary,
            bonus_percent: 0,
            status: fields.status,
        }
    }

    /// Replaces every editable field; id and bonus are left alone.
    pub fn apply(&mut self, fields: EmployeeFields) {
        self.name = fields.name;
        self.role = fields.role;
        self.salary = fields.salary;
        self.status = fields.status;
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn salary(&self) -> u64 {
        self.salary
    }

    pub fn bonus_percent(&self) -> u8 {
        self.bonus_percent
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The record's current values as raw form input.
    pub fn draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.clone(),
            role: self.role.clone(),
            salary: self.salary.to_string(),
            status: self.status.label().to_string(),
        }
    }

    pub fn field_value(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.clone(),
            Field::Role => self.role.clone(),
            Field::Salary => self.salary.to_string(),
            Field::Status => self.status.label().to_string(),
        }
    }
}

/// Raw, unvalidated form input for an employee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub name: String,
    pub role: String,
    pub salary: String,
    pub status: String,
}

impl EmployeeDraft {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        salary: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            salary: salary.into(),
            status: status.into(),
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Role => self.role = value,
            Field::Salary => self.salary = value,
            Field::Status => self.status = value,
        }
    }
}

/// Parsed and trimmed fields, produced only by [`crate::validation::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFields {
    pub name: String,
    pub role: String,
    pub salary: u64,
    pub status: Status,
}

/// A structured edit: every field is optional, absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    pub salary: Option<String>,
    pub status: Option<String>,
}

impl EditRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.role.is_none() && self.salary.is_none() && self.status.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&String> {
        match field {
            Field::Name => self.name.as_ref(),
            Field::Role => self.role.as_ref(),
            Field::Salary => self.salary.as_ref(),
            Field::Status => self.status.as_ref(),
        }
    }

    /// Overlays this request on the current record, producing a full draft.
    pub fn over(&self, current: &Employee) -> EmployeeDraft {
        let mut draft = current.draft();
        for field in Field::ALL {
            if let Some(value) = self.get(field) {
                draft.set(field, value.clone());
            }
        }
        draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> EmployeeFields {
        EmployeeFields {
            name: "Ana Silva".into(),
            role: "Engineer".into(),
            salary: 50_000,
            status: Status::Active,
        }
    }

    #[test]
    fn new_employee_has_zero_bonus() {
        let employee = Employee::new(fields());
        assert_eq!(employee.bonus_percent, 0);
        assert_eq!(employee.name, "Ana Silva");
    }

    #[test]
    fn ids_are_unique() {
        let a = Employee::new(fields());
        let b = Employee::new(fields());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn status_parsing_is_lenient() {
        assert_eq!("Active".parse::<Status>().unwrap(), Status::Active);
        assert_eq!("On Leave".parse::<Status>().unwrap(), Status::OnLeave);
        assert_eq!("on-leave".parse::<Status>().unwrap(), Status::OnLeave);
        assert_eq!("ONLEAVE".parse::<Status>().unwrap(), Status::OnLeave);
        assert_eq!(" terminated ".parse::<Status>().unwrap(), Status::Terminated);
        assert!("Retired".parse::<Status>().is_err());
        assert!("".parse::<Status>().is_err());
    }

    #[test]
    fn status_labels_round_trip() {
        for status in Status::ALL {
            assert_eq!(status.label().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn apply_keeps_id_and_bonus() {
        let mut employee = Employee::new(fields());
        employee.bonus_percent = 15;
        let id = employee.id;

        employee.apply(EmployeeFields {
            name: "Ana Souza".into(),
            role: "Lead".into(),
            salary: 60_000,
            status: Status::OnLeave,
        });

        assert_eq!(employee.id, id);
        assert_eq!(employee.bonus_percent, 15);
        assert_eq!(employee.name, "Ana Souza");
        assert_eq!(employee.status, Status::OnLeave);
    }

    #[test]
    fn edit_request_overlays_current_values() {
        let employee = Employee::new(fields());
        let request = EditRequest {
            role: Some("Manager".into()),
            ..Default::default()
        };

        let draft = request.over(&employee);
        assert_eq!(draft.name, "Ana Silva");
        assert_eq!(draft.role, "Manager");
        assert_eq!(draft.salary, "50000");
        assert_eq!(draft.status, "Active");
    }
}
