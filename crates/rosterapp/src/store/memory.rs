use super::{Bucket, DataStore};
use crate::error::{RosterError, Result};
use crate::model::{Employee, EmployeeId};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

#[derive(Debug, Clone)]
struct TrashEntry {
    employee: Employee,
    deleted_at: DateTime<Utc>,
}

/// In-memory storage. Does NOT persist data.
///
/// The deletion timestamp is kept next to the trashed record rather than in it,
/// so a delete/restore round trip leaves the employee untouched.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    active: Vec<Employee>,
    trash: Vec<TrashEntry>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &EmployeeId, bucket: Bucket) -> Option<usize> {
        match bucket {
            Bucket::Active => self.active.iter().position(|e| e.id == *id),
            Bucket::Trash => self.trash.iter().position(|t| t.employee.id == *id),
        }
    }

    fn remove_at(&mut self, pos: usize, bucket: Bucket) -> Employee {
        match bucket {
            Bucket::Active => self.active.remove(pos),
            Bucket::Trash => self.trash.remove(pos).employee,
        }
    }

    fn push(&mut self, employee: Employee, bucket: Bucket) {
        match bucket {
            Bucket::Active => self.active.push(employee),
            Bucket::Trash => self.trash.push(TrashEntry {
                employee,
                deleted_at: Utc::now(),
            }),
        }
    }

    /// Checks that every id is present in `bucket`, dropping duplicates.
    fn checked_ids(&self, ids: &[EmployeeId], bucket: Bucket) -> Result<Vec<EmployeeId>> {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(ids.len());
        for id in ids {
            if self.position(id, bucket).is_none() {
                return Err(RosterError::not_found(*id, bucket));
            }
            if seen.insert(*id) {
                unique.push(*id);
            }
        }
        Ok(unique)
    }
}

impl DataStore for InMemoryStore {
    fn save_employee(&mut self, employee: &Employee, bucket: Bucket) -> Result<()> {
        if self.position(&employee.id, bucket.other()).is_some() {
            return Err(RosterError::Api(format!(
                "Employee {} is already in the {}",
                employee.id,
                bucket.other()
            )));
        }
        match (self.position(&employee.id, bucket), bucket) {
            (Some(pos), Bucket::Active) => self.active[pos] = employee.clone(),
            (Some(pos), Bucket::Trash) => self.trash[pos].employee = employee.clone(),
            (None, _) => self.push(employee.clone(), bucket),
        }
        Ok(())
    }

    fn get_employee(&self, id: &EmployeeId, bucket: Bucket) -> Result<Employee> {
        let found = match bucket {
            Bucket::Active => self.active.iter().find(|e| e.id == *id),
            Bucket::Trash => self
                .trash
                .iter()
                .find(|t| t.employee.id == *id)
                .map(|t| &t.employee),
        };
        found
            .cloned()
            .ok_or_else(|| RosterError::not_found(*id, bucket))
    }

    fn list_employees(&self, bucket: Bucket) -> Result<Vec<Employee>> {
        Ok(match bucket {
            Bucket::Active => self.active.clone(),
            Bucket::Trash => self.trash.iter().map(|t| t.employee.clone()).collect(),
        })
    }

    fn delete_employees(&mut self, ids: &[EmployeeId], bucket: Bucket) -> Result<Vec<Employee>> {
        let ids = self.checked_ids(ids, bucket)?;
        let mut removed = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(pos) = self.position(&id, bucket) {
                removed.push(self.remove_at(pos, bucket));
            }
        }
        Ok(removed)
    }

    fn move_employees(
        &mut self,
        ids: &[EmployeeId],
        from: Bucket,
        to: Bucket,
    ) -> Result<Vec<Employee>> {
        let ids = self.checked_ids(ids, from)?;
        if from == to {
            return ids.iter().map(|id| self.get_employee(id, from)).collect();
        }

        let mut moved = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(pos) = self.position(&id, from) {
                let employee = self.remove_at(pos, from);
                self.push(employee.clone(), to);
                moved.push(employee);
            }
        }
        Ok(moved)
    }

    fn clear_bucket(&mut self, bucket: Bucket) -> Result<Vec<Employee>> {
        Ok(match bucket {
            Bucket::Active => std::mem::take(&mut self.active),
            Bucket::Trash => std::mem::take(&mut self.trash)
                .into_iter()
                .map(|t| t.employee)
                .collect(),
        })
    }

    fn deleted_at(&self, id: &EmployeeId) -> Option<DateTime<Utc>> {
        self.trash
            .iter()
            .find(|t| t.employee.id == *id)
            .map(|t| t.deleted_at)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{EmployeeFields, Status};

    pub fn employee(name: &str, role: &str, salary: u64, status: Status) -> Employee {
        Employee::new(EmployeeFields {
            name: name.to_string(),
            role: role.to_string(),
            salary,
            status,
        })
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_employees(mut self, count: usize) -> Self {
            const NAMES: [&str; 5] = ["Alpha", "Bravo", "Charlie", "Delta", "Echo"];
            for i in 0..count {
                let name = format!("Employee {}", NAMES[i % NAMES.len()]);
                let e = employee(&name, "Engineer", 1000 * (i as u64 + 1), Status::Active);
                self.store.save_employee(&e, Bucket::Active).unwrap();
            }
            self
        }

        pub fn with_active(mut self, name: &str, role: &str, salary: u64) -> Self {
            let e = employee(name, role, salary, Status::Active);
            self.store.save_employee(&e, Bucket::Active).unwrap();
            self
        }

        pub fn with_status(mut self, name: &str, salary: u64, status: Status) -> Self {
            let e = employee(name, "Engineer", salary, status);
            self.store.save_employee(&e, Bucket::Active).unwrap();
            self
        }

        pub fn with_bonus(mut self, name: &str, salary: u64, bonus_percent: u8) -> Self {
            let mut e = employee(name, "Engineer", salary, Status::Active);
            e.bonus_percent = bonus_percent;
            self.store.save_employee(&e, Bucket::Active).unwrap();
            self
        }

        pub fn with_trashed(mut self, name: &str, salary: u64) -> Self {
            let e = employee(name, "Engineer", salary, Status::Terminated);
            self.store.save_employee(&e, Bucket::Trash).unwrap();
            self
        }

        pub fn ids(&self, bucket: Bucket) -> Vec<EmployeeId> {
            self.store
                .list_employees(bucket)
                .unwrap()
                .iter()
                .map(|e| e.id)
                .collect()
        }
    }
}
