//! # Storage Layer
//!
//! This module defines the storage abstraction for the roster. The [`DataStore`] trait
//! hides how the two collections are held from the command layer.
//!
//! ## Buckets
//!
//! Every employee lives in exactly one [`Bucket`]:
//! - **Active**: the roster proper, eligible for edit, bonus and delete.
//! - **Trash**: soft-deleted employees, eligible for restore or permanent deletion.
//!
//! Moving between buckets is a store operation ([`DataStore::move_employees`]) so the
//! "exactly one bucket" invariant is kept in one place.
//!
//! ## Ordering
//!
//! Buckets are ordered sequences:
//! - Saving a new employee appends it; saving an existing one replaces it in place.
//! - Moving appends to the destination, in the order the ids were given.
//!
//! ## Atomicity
//!
//! Batch operations check every id before touching anything. If one id is missing
//! the call fails with `NotFound` and both buckets are left exactly as they were.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the only backend. State lives for the process lifetime.

use crate::error::Result;
use crate::model::{Employee, EmployeeId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

pub mod memory;

pub use memory::InMemoryStore;

/// Lifecycle bucket of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Active,
    Trash,
}

impl Bucket {
    pub fn other(&self) -> Bucket {
        match self {
            Bucket::Active => Bucket::Trash,
            Bucket::Trash => Bucket::Active,
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bucket::Active => f.write_str("active roster"),
            Bucket::Trash => f.write_str("trash"),
        }
    }
}

/// Abstract interface for employee storage.
pub trait DataStore {
    /// Insert or replace an employee in a bucket.
    /// Fails if the id already lives in the other bucket.
    fn save_employee(&mut self, employee: &Employee, bucket: Bucket) -> Result<()>;

    /// Get an employee by id from a bucket.
    fn get_employee(&self, id: &EmployeeId, bucket: Bucket) -> Result<Employee>;

    /// List a bucket in order.
    fn list_employees(&self, bucket: Bucket) -> Result<Vec<Employee>>;

    /// Remove employees permanently. All-or-nothing.
    fn delete_employees(&mut self, ids: &[EmployeeId], bucket: Bucket) -> Result<Vec<Employee>>;

    /// Move employees between buckets, appending to `to`. All-or-nothing.
    fn move_employees(
        &mut self,
        ids: &[EmployeeId],
        from: Bucket,
        to: Bucket,
    ) -> Result<Vec<Employee>>;

    /// Remove every employee in a bucket, returning what was removed.
    fn clear_bucket(&mut self, bucket: Bucket) -> Result<Vec<Employee>>;

    /// When a trashed employee was moved to the trash.
    fn deleted_at(&self, id: &EmployeeId) -> Option<DateTime<Utc>>;

    fn contains(&self, id: &EmployeeId, bucket: Bucket) -> bool {
        self.get_employee(id, bucket).is_ok()
    }

    fn count(&self, bucket: Bucket) -> Result<usize> {
        Ok(self.list_employees(bucket)?.len())
    }

    fn delete_employee(&mut self, id: &EmployeeId, bucket: Bucket) -> Result<Employee> {
        let mut removed = self.delete_employees(std::slice::from_ref(id), bucket)?;
        Ok(removed.remove(0))
    }

    fn move_employee(&mut self, id: &EmployeeId, from: Bucket, to: Bucket) -> Result<Employee> {
        let mut moved = self.move_employees(std::slice::from_ref(id), from, to)?;
        Ok(moved.remove(0))
    }
}
