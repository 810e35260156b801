//! # Shell Behavior
//!
//! This is **one possible UI client** for rosterapp, not the application itself.
//! It is the only place that knows about terminal I/O, exit codes and formatting.
//!
//! ## Session Model
//!
//! `roster` starts an interactive shell over an empty roster. Each input line is one
//! command (`add`, `edit`, `delete 1-3`, `filter --role Engineer`...). After every
//! change the full roster view is re-rendered: the filtered table, the summary line
//! and, when toggled on with `trash`, the trash table.
//!
//! Indexes are the numbers shown in the first column. Active rows are `1`, `2`...
//! and trash rows are `t1`, `t2`... They never change with filtering.
//!
//! ## Confirmation and Prompts
//!
//! Destructive commands ask `[y/N]` first unless `--yes` is given or `confirm = false`
//! is configured. `bonus` without a percent, `prune` without a threshold and `edit`
//! without any field flags prompt for the missing values; an empty answer keeps the
//! shown default and end of input cancels.
//!
//! ## Module Structure
//!
//! - `commands`: read loop, logging setup, line dispatch
//! - `presenter`: the `Presenter` implementation over stdin/stdout
//! - `render`: output formatting (tables, summary, messages)
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styling
//! - `templates`: output templates

mod commands;
mod presenter;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
