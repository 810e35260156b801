//! # Command Layer
//!
//! This module contains the **core business logic** of roster. Each command lives in its
//! own submodule and implements plain functions over a [`DataStore`](crate::store::DataStore).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Validate input and apply mutations to the active roster and the trash
//! - Derive filtered projections and aggregates
//! - Return a structured [`CmdResult`] with affected employees and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: no stdout, stderr or terminal concerns
//! - **Index parsing**: commands take [`EmployeeId`]s, display indexes are resolved by the API
//! - **User interaction**: no prompts, no confirmations (the session asks first)
//!
//! ## Structured Returns
//!
//! [`CmdResult`] carries:
//! - `affected`: employees that were changed, with their post-operation display index
//! - `listed`: rows to display (projections, trash listings)
//! - `summary`: aggregates, when the command computed them
//! - `messages`: structured messages with levels (info, success, warning, error)
//!
//! ## Testing Strategy
//!
//! Most of the testing lives here. Command tests use `InMemoryStore` and the
//! `StoreFixture` builder, cover every branch and check `CmdResult` contents along
//! with the resulting store state.
//!
//! ## Command Modules
//!
//! - [`add`]: Create an employee
//! - [`edit`]: Replace the editable fields of an active employee
//! - [`bonus`]: Set the bonus percent of an active employee
//! - [`delete`]: Soft-delete (move to trash)
//! - [`restore`]: Move trashed employees back to the active roster
//! - [`purge`]: Permanently delete trashed employees, or empty the trash
//! - [`prune`]: Move every employee at or below a salary threshold to the trash
//! - [`query`]: Filter and sort projections of the active roster
//! - [`aggregate`]: Counts, payroll and bonus totals
//! - [`view`]: Assemble the full [`RosterView`](crate::presenter::RosterView)
//! - [`helpers`]: Shared utilities (indexing, selector resolution)

use crate::index::DisplayEmployee;
use crate::model::EmployeeId;
use serde::Serialize;

pub mod add;
pub mod aggregate;
pub mod bonus;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod prune;
pub mod purge;
pub mod query;
pub mod restore;
pub mod view;

pub use aggregate::Summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Result of a command execution.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CmdResult {
    /// Employees changed by the command, indexed as they are after it ran.
    /// Permanently deleted employees keep the trash index they had.
    pub affected: Vec<DisplayEmployee>,
    /// Rows to display.
    pub listed: Vec<DisplayEmployee>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, affected: Vec<DisplayEmployee>) -> Self {
        self.affected = affected;
        self
    }

    pub fn with_listed(mut self, listed: Vec<DisplayEmployee>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_summary(mut self, summary: Summary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn affected_ids(&self) -> Vec<EmployeeId> {
        self.affected.iter().map(DisplayEmployee::id).collect()
    }
}

/// "1 employee" / "3 employees".
pub(crate) fn plural(count: usize) -> String {
    if count == 1 {
        "1 employee".to_string()
    } else {
        format!("{} employees", count)
    }
}
