//! Role-keyed system messages with JSON persistence.
//!
//! `system-messages` keeps a small registry of named system prompts ("roles")
//! for LLM agents. One message, `default`, is always the fallback: asking for
//! no role or an unknown role returns it, and it cannot be overwritten by
//! [`add`](MessageStore::add) or [`edit`](MessageStore::edit).
//!
//! # Getting started
//!
//! ```no_run
//! use system_messages::prelude::*;
//!
//! fn main() -> Result<(), StoreError> {
//!     let mut store = MessageStore::new("You are a helpful assistant.");
//!     store.add("reviewer", "Review the diff and list concrete issues.")?;
//!
//!     assert_eq!(store.get(None)?, "You are a helpful assistant.");
//!     assert_eq!(store.get(Some("reviewer"))?, "Review the diff and list concrete issues.");
//!     // Unknown roles fall back to the default message.
//!     assert_eq!(store.get(Some("planner"))?, "You are a helpful assistant.");
//!
//!     store.save("system_data.json")?;
//!
//!     // Writes a timestamped `*-backup.json` of the current data first.
//!     let backup = store.load("system_data.json")?;
//!     println!("backup: {:?}", backup.path());
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`store`] | [`MessageStore`]: add/get/edit, save/load, backup flag |
//! | [`message`] | [`SystemMessage`] entry and [`DEFAULT_ROLE`] |
//! | [`config`] | [`StoreConfig`], backup directory, missing-default policy |
//! | [`backup`] | Backup file naming and [`BackupOutcome`] |
//! | [`error`] | [`StoreError`] |

pub mod backup;
pub mod config;
pub mod error;
pub mod message;
pub mod prelude;
pub mod store;

pub use backup::BackupOutcome;
pub use config::{BackupConfig, MissingDefaultPolicy, StoreConfig};
pub use error::StoreError;
pub use message::{DEFAULT_ROLE, SystemMessage};
pub use store::MessageStore;
