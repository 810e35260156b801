//! # Presentation Adapter Boundary
//!
//! The core never draws anything or asks the user anything directly. A client
//! implements [`Presenter`] and the [`Session`](crate::session::Session) calls it:
//!
//! - [`Presenter::confirm`] before destructive operations
//! - [`Presenter::prompt`] when an intent is missing a value (bonus percent, threshold, edit fields)
//! - [`Presenter::render`] once after every successful mutation, filter change or trash toggle
//!
//! Everything handed to `render` is a snapshot: a [`RosterView`] owns clones of the
//! rows, so the presenter cannot reach back into the store.

use crate::commands::aggregate::bonus_amount;
use crate::commands::query::Criteria;
use crate::commands::{CmdMessage, Summary};
use crate::index::DisplayEmployee;
use serde::Serialize;

pub trait Presenter {
    /// Yes/no question. `false` cancels the pending intent.
    fn confirm(&mut self, message: &str) -> bool;

    /// Asks for a value, optionally pre-filled. `None` cancels the pending intent.
    fn prompt(&mut self, message: &str, default: Option<&str>) -> Option<String>;

    fn render(&mut self, view: &RosterView);
}

/// A display row: the indexed employee plus its derived bonus amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeRow {
    #[serde(flatten)]
    pub entry: DisplayEmployee,
    pub bonus_amount: u64,
}

impl From<DisplayEmployee> for EmployeeRow {
    fn from(entry: DisplayEmployee) -> Self {
        let bonus_amount = bonus_amount(&entry.employee);
        Self {
            entry,
            bonus_amount,
        }
    }
}

/// Everything a client needs to draw the roster after a change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RosterView {
    /// The current projection of the active roster.
    pub rows: Vec<EmployeeRow>,
    /// The whole trash, in deletion order. Clients show it when `show_trash` is set.
    pub trash: Vec<EmployeeRow>,
    pub summary: Summary,
    pub criteria: Criteria,
    pub show_trash: bool,
    /// Messages from the command that triggered this render.
    pub messages: Vec<CmdMessage>,
}

impl RosterView {
    /// True when a filter hides part of the roster.
    pub fn filtered(&self) -> bool {
        self.criteria.filters()
    }
}
