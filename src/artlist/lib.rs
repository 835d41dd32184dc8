//! # Artlist Architecture
//!
//! Artlist is a **UI-agnostic artwork catalogue library**. It keeps an ordered
//! list of artwork records in memory, lets one record at a time be edited
//! through a draft, filters the list by free text, moves the list in and out
//! of spreadsheet documents and renders a printable summary. The terminal
//! session in `cli/` is one client of it.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads session lines, formats output, terminal I/O        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the session state        │
//! │  - Normalizes inputs (paths → formats, files → photos)      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic over session, filter, table, printable    │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - MemoryStore (records live for one session)               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never calls
//! `std::process::exit`. Documents are produced into any `Write` and parsed
//! from byte slices; only the `*_file` helpers on the API touch the
//! filesystem.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests of the business logic against
//!    `MemoryStore` and the `StoreFixture` builder.
//! 2. **API** (`api.rs`): dispatch tests.
//! 3. **CLI** (`tests/`): the binary driven with scripted session lines.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`session`]: The single-draft edit state machine
//! - [`filter`]: Search query and scope matching
//! - [`table`]: Tabular documents (CSV, XLSX) and column mapping
//! - [`printable`]: HTML summary rendering
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Artwork`, `Record`, `Status`, `Photo`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod printable;
pub mod session;
pub mod store;
pub mod table;
