//! Configuration for [`MessageStore`](crate::store::MessageStore).
//!
//! Defaults match the classic behavior: backups on, written to the current
//! working directory, and any file extension accepted on save. Loading a
//! file without a `default` message is rejected unless the policy says
//! otherwise.
//!
//! ```
//! use system_messages::config::{MissingDefaultPolicy, StoreConfig};
//!
//! let config = StoreConfig::default()
//!     .with_backup_dir("backups")
//!     .with_missing_default(MissingDefaultPolicy::Allow)
//!     .with_require_json_extension(true);
//!
//! assert!(config.backup.enabled);
//! assert!(config.require_json_extension);
//! ```

use std::path::PathBuf;

// ── Backup config ──────────────────────────────────────────────────

/// Settings for the snapshot taken before each `load`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupConfig {
    /// Initial value of the store's backup flag. Default: `true`.
    pub enabled: bool,
    /// Directory backups are written into. Default: `.` (the CWD).
    pub dir: PathBuf,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: PathBuf::from("."),
        }
    }
}

impl BackupConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

// ── Missing-default policy ─────────────────────────────────────────

/// What `load` does with a file that has no `default` entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingDefaultPolicy {
    /// Fail with [`StoreError::MissingDefault`](crate::StoreError::MissingDefault)
    /// and keep the current data.
    #[default]
    Reject,
    /// Replace the data anyway; default lookups then return `NotFound`.
    Allow,
}

// ── StoreConfig ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    pub backup: BackupConfig,
    pub missing_default: MissingDefaultPolicy,
    /// Reject `save` targets without a `.json` extension. Default: `false`.
    pub require_json_extension: bool,
}

impl StoreConfig {
    pub fn with_backup(mut self, enabled: bool) -> Self {
        self.backup.enabled = enabled;
        self
    }

    pub fn with_backup_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.backup.dir = dir.into();
        self
    }

    pub fn with_missing_default(mut self, policy: MissingDefaultPolicy) -> Self {
        self.missing_default = policy;
        self
    }

    pub fn with_require_json_extension(mut self, require: bool) -> Self {
        self.require_json_extension = require;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = StoreConfig::default();
        assert!(config.backup.enabled);
        assert_eq!(config.backup.dir, PathBuf::from("."));
        assert_eq!(config.missing_default, MissingDefaultPolicy::Reject);
        assert!(!config.require_json_extension);
    }

    #[test]
    fn disabled_backup_keeps_default_dir() {
        let backup = BackupConfig::disabled();
        assert!(!backup.enabled);
        assert_eq!(backup.dir, PathBuf::from("."));
    }

    #[test]
    fn builders_override_fields() {
        let config = StoreConfig::default()
            .with_backup(false)
            .with_backup_dir("/tmp/snapshots")
            .with_missing_default(MissingDefaultPolicy::Allow)
            .with_require_json_extension(true);
        assert!(!config.backup.enabled);
        assert_eq!(config.backup.dir, PathBuf::from("/tmp/snapshots"));
        assert_eq!(config.missing_default, MissingDefaultPolicy::Allow);
        assert!(config.require_json_extension);
    }
}
