//! # Roster Architecture
//!
//! Roster is a **UI-agnostic employee roster engine**. The terminal shell shipped in the
//! `roster` crate is one client of this library, not the application itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation Adapter (roster crate, or any Presenter impl) │
//! │  - Raises intents, answers prompts, draws RosterView        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs)                                       │
//! │  - One intent at a time, confirmation, re-render on change  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, resolves display indexes to employee ids    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Mutations, query engine, aggregates                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait over the Active and Trash buckets        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Nothing in this crate writes to stdout/stderr or reads from stdin. Confirmation,
//! value prompts and rendering go through the [`presenter::Presenter`] trait, so the
//! same core could drive a terminal, a web page or a test harness.
//!
//! ## State Ownership
//!
//! Both collections live inside a single [`store::InMemoryStore`]. The API owns the
//! store, the session owns the API, and everything handed to a presenter is a clone.
//! Every mutation addresses records by [`model::EmployeeId`]; display indexes are
//! resolved to ids before a command runs (see [`index`]).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`session`]: Intent handling and view synchronisation
//! - [`presenter`]: The presentation adapter boundary and `RosterView`
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: Core data types (`Employee`, `Status`, drafts and edit requests)
//! - [`validation`]: Field rules shared by add and edit
//! - [`index`]: Display indexing (`3`, `t2`) and selector parsing
//! - [`config`]: Configuration loading
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod presenter;
pub mod session;
pub mod store;
pub mod validation;
