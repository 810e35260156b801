//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every roster operation, whatever client drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Resolves selectors** (display indexes, ranges, UUIDs) to [`EmployeeId`]s
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business logic and does no I/O.
//!
//! ## Selectors
//!
//! - **Active index**: `N` (e.g. `1`, `42`)
//! - **Trash index**: `tN` (e.g. `t1`, `t5`)
//! - **Ranges**: `Start-End` (e.g. `1-5`, `t1-t3`), homogeneous, start <= end
//! - **Id**: a full UUID
//!
//! For commands that only act on the trash (restore, purge), bare numbers are
//! read as trash indexes: `restore 3` means `t3`.
//!
//! Resolution is against the **unfiltered** order of the bucket, taken fresh on
//! every call, so an index always names the same employee as the last full listing.
//!
//! ## Generic Over DataStore
//!
//! `RosterApi<S: DataStore>` is generic over the storage backend. Only
//! `InMemoryStore` exists today, but tests and clients never depend on that.

use crate::commands::query::Criteria;
use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::index::{normalize_to_trash_index, parse_index_or_range, DisplayEmployee};
use crate::model::{EditRequest, EmployeeDraft, EmployeeId};
use crate::presenter::RosterView;
use crate::store::{Bucket, DataStore};

/// The main API facade for roster operations.
pub struct RosterApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> RosterApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add(&mut self, draft: &EmployeeDraft) -> Result<CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn edit(&mut self, id: EmployeeId, draft: &EmployeeDraft) -> Result<CmdResult> {
        commands::edit::run(&mut self.store, id, draft)
    }

    /// Edits only the fields present in `request`.
    pub fn update(&mut self, id: EmployeeId, request: &EditRequest) -> Result<CmdResult> {
        commands::edit::apply_request(&mut self.store, id, request)
    }

    pub fn set_bonus(&mut self, id: EmployeeId, percent: i64) -> Result<CmdResult> {
        commands::bonus::run(&mut self.store, id, percent)
    }

    pub fn soft_delete(&mut self, ids: &[EmployeeId]) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, ids)
    }

    pub fn restore(&mut self, ids: &[EmployeeId]) -> Result<CmdResult> {
        commands::restore::run(&mut self.store, ids)
    }

    pub fn permanent_delete(&mut self, ids: &[EmployeeId]) -> Result<CmdResult> {
        commands::purge::run(&mut self.store, ids)
    }

    pub fn empty_trash(&mut self) -> Result<CmdResult> {
        commands::purge::empty_trash(&mut self.store)
    }

    pub fn delete_below_threshold(&mut self, threshold: u64) -> Result<CmdResult> {
        commands::prune::run(&mut self.store, threshold)
    }

    /// The employees `delete_below_threshold` would move, without moving them.
    pub fn below_threshold(&self, threshold: u64) -> Result<Vec<DisplayEmployee>> {
        commands::prune::preview(&self.store, threshold)
    }

    pub fn project(&self, criteria: &Criteria) -> Result<CmdResult> {
        commands::query::run(&self.store, criteria)
    }

    pub fn trash(&self) -> Result<CmdResult> {
        let listed = commands::helpers::indexed_trash(&self.store)?;
        let mut result = CmdResult::default();
        if listed.is_empty() {
            result.add_message(CmdMessage::info("Trash is empty."));
        }
        Ok(result.with_listed(listed))
    }

    pub fn summary(&self) -> Result<CmdResult> {
        commands::aggregate::run(&self.store)
    }

    pub fn bonus_amount(&self, id: EmployeeId) -> Result<u64> {
        let employee = self.store.get_employee(&id, Bucket::Active)?;
        Ok(commands::aggregate::bonus_amount(&employee))
    }

    /// Current display row of an employee.
    pub fn get(&self, id: EmployeeId, bucket: Bucket) -> Result<DisplayEmployee> {
        let mut rows = commands::helpers::display_rows(&self.store, bucket, &[id])?;
        Ok(rows.remove(0))
    }

    pub fn view(
        &self,
        criteria: &Criteria,
        show_trash: bool,
        messages: Vec<CmdMessage>,
    ) -> Result<RosterView> {
        commands::view::run(&self.store, criteria, show_trash, messages)
    }

    /// Resolves user selectors to the rows they name in `bucket`.
    ///
    /// Duplicates collapse; any unresolvable selector fails the whole call.
    pub fn resolve<I: AsRef<str>>(
        &self,
        inputs: &[I],
        bucket: Bucket,
    ) -> Result<Vec<DisplayEmployee>> {
        if inputs.is_empty() {
            return Err(RosterError::Api("No employees selected".to_string()));
        }
        let selectors = inputs
            .iter()
            .map(|input| {
                let input = input.as_ref();
                let normalized = match bucket {
                    Bucket::Active => input.trim().to_string(),
                    Bucket::Trash => normalize_to_trash_index(input),
                };
                parse_index_or_range(&normalized).map_err(RosterError::Api)
            })
            .collect::<Result<Vec<_>>>()?;
        commands::helpers::resolve_selectors(&self.store, bucket, &selectors)
    }

    /// Resolves user selectors straight to ids.
    pub fn resolve_ids<I: AsRef<str>>(&self, inputs: &[I], bucket: Bucket) -> Result<Vec<EmployeeId>> {
        Ok(self
            .resolve(inputs, bucket)?
            .iter()
            .map(DisplayEmployee::id)
            .collect())
    }
}
