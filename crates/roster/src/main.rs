//! # Roster CLI Architecture
//!
//! The binary is intentionally thin: the shell lives in `src/cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/rosterapp/`: UI-agnostic library: store, commands, session, presenter trait
//! - `crates/roster/`: this interactive shell, one presentation adapter for the library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (crates/roster/src/cli/)                             │
//! │  - clap parsing of process args and shell lines (setup.rs)  │
//! │  - read loop + intent dispatch (commands.rs)                │
//! │  - Presenter impl over stdin/stdout (presenter.rs)          │
//! │  - minijinja templates for tables (render.rs)               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (crates/rosterapp/src/session.rs)                  │
//! │  - Confirmation, prompts, one render per change             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API + Commands (crates/rosterapp/src/{api,commands})       │
//! │  - Business logic, no knowledge of stdout/stdin             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The roster only exists in memory, so the shell is a read loop rather than one
//! process per command: every line is split with `shlex`, parsed with clap and turned
//! into a session intent. Piped input works the same way, which is what the
//! end-to-end tests use.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
