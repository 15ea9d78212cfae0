//! # Idreg Architecture
//!
//! Idreg keeps a small registry of people and entities identified by Polish
//! national identifiers (PESEL, NIP, REGON). The registry is a single JSON
//! document that is read, changed and written back as one unit.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Interactive menu, subcommands, colored output            │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load → mutate → save, one document per call              │
//! │  - Identifier validators and password policy are pure       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait                                        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Responsibilities at the edges
//!
//! The store is deliberately dumb. It does not check `user_id` uniqueness,
//! it does not validate identifiers, and an edit never clears a field.
//! Callers that want any of that (the CLI does validate identifiers) do it
//! before calling in.
//!
//! A missing or unreadable document is not an error for readers: it loads
//! as an empty registry. Writes do fail loudly.
//!
//! There is no locking. Two processes writing the same file race and the
//! last writer wins.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `UserRecord`, `Document`, `RecordUpdate`
//! - [`validate`]: PESEL / NIP / REGON checksum validators
//! - [`password`]: Password generation and strength policy
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod password;
pub mod store;
pub mod validate;
