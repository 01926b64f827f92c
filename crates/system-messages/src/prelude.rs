//! Convenience re-exports for common `system-messages` types.
//!
//! ```ignore
//! use system_messages::prelude::*;
//! ```

pub use crate::backup::BackupOutcome;
pub use crate::config::{BackupConfig, MissingDefaultPolicy, StoreConfig};
pub use crate::error::StoreError;
pub use crate::message::{DEFAULT_ROLE, SystemMessage};
pub use crate::store::MessageStore;
