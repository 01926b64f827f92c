//! Role-keyed system message store with JSON persistence.
//!
//! [`MessageStore`] holds one [`SystemMessage`] per role and always falls back
//! to the `default` message for missing or unknown roles. The default message
//! is protected: [`add`](MessageStore::add) cannot overwrite it and
//! [`edit`](MessageStore::edit) refuses to touch it. Only a full
//! [`load`](MessageStore::load) replaces it.
//!
//! On-disk format (pretty-printed, sorted by role):
//! ```text
//! {
//!     "default": {
//!         "role": "default",
//!         "content": "You are a helpful assistant."
//!     },
//!     "reviewer": {
//!         "role": "reviewer",
//!         "content": "Review the diff."
//!     }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;
use tracing::{debug, warn};

use crate::backup::{BackupOutcome, backup_path};
use crate::config::{MissingDefaultPolicy, StoreConfig};
use crate::error::StoreError;
use crate::message::{DEFAULT_ROLE, SystemMessage};

type Messages = BTreeMap<String, SystemMessage>;

/// In-memory registry of system messages keyed by role.
#[derive(Debug, Clone)]
pub struct MessageStore {
    messages: Messages,
    backup: bool,
    config: StoreConfig,
}

impl MessageStore {
    /// Build a store from either a JSON role map or a plain default message.
    ///
    /// If `initial_data` parses as a `{"<role>": {"role", "content"}}` object,
    /// that map becomes the store as is. Anything else (plain text, or JSON of
    /// another shape) becomes the content of a single `default` message.
    pub fn new(initial_data: &str) -> Self {
        Self::with_config(initial_data, StoreConfig::default())
    }

    /// Like [`new`](Self::new), with explicit configuration.
    pub fn with_config(initial_data: &str, config: StoreConfig) -> Self {
        let messages = match serde_json::from_str::<Messages>(initial_data) {
            Ok(parsed) => {
                let messages = normalize_roles(parsed);
                if !messages.contains_key(DEFAULT_ROLE) {
                    warn!("Initial system messages have no '{DEFAULT_ROLE}' entry");
                }
                debug!("Initialized {} system messages from JSON", messages.len());
                messages
            }
            Err(_) => {
                debug!("Initialized default system message from plain text");
                Messages::from([(
                    DEFAULT_ROLE.to_string(),
                    SystemMessage::default_role(initial_data),
                )])
            }
        };

        Self {
            messages,
            backup: config.backup.enabled,
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // ── Messages ───────────────────────────────────────────────────

    /// Add a message under a new role.
    ///
    /// Fails with [`StoreError::AlreadyExists`] if the role is taken,
    /// including `default`. The store is unchanged on failure.
    pub fn add(
        &mut self,
        role: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<(), StoreError> {
        let role = role.into();
        if self.messages.contains_key(&role) {
            return Err(StoreError::AlreadyExists { role });
        }
        self.messages
            .insert(role.clone(), SystemMessage::new(role, content));
        Ok(())
    }

    /// Content for `role`, falling back to the default message.
    ///
    /// `None` and unknown roles both resolve to `default`. Only a store with
    /// no default message at all returns [`StoreError::NotFound`].
    pub fn get(&self, role: Option<&str>) -> Result<&str, StoreError> {
        if let Some(msg) = role.and_then(|r| self.messages.get(r)) {
            return Ok(&msg.content);
        }
        self.messages
            .get(DEFAULT_ROLE)
            .map(|msg| msg.content.as_str())
            .ok_or_else(|| StoreError::NotFound {
                role: DEFAULT_ROLE.to_string(),
            })
    }

    /// Replace the content of an existing non-default role.
    ///
    /// Returns `false` without changing anything when the role is unknown or
    /// is `default`.
    pub fn edit(&mut self, role: &str, new_content: impl Into<String>) -> bool {
        if role == DEFAULT_ROLE {
            return false;
        }
        match self.messages.get_mut(role) {
            Some(msg) => {
                msg.content = new_content.into();
                true
            }
            None => false,
        }
    }

    /// Exact lookup, no fallback.
    pub fn lookup(&self, role: &str) -> Option<&SystemMessage> {
        self.messages.get(role)
    }

    pub fn contains(&self, role: &str) -> bool {
        self.messages.contains_key(role)
    }

    /// Roles in sorted order.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SystemMessage> {
        self.messages.values()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    // ── Backup flag ────────────────────────────────────────────────

    /// Turn the pre-load backup on or off.
    pub fn set_backup_enabled(&mut self, enabled: bool) {
        self.backup = enabled;
    }

    pub fn is_backup_enabled(&self) -> bool {
        self.backup
    }

    // ── Persistence ────────────────────────────────────────────────

    /// Serialize all messages the way [`save`](Self::save) writes them.
    pub fn to_json(&self) -> Result<String, StoreError> {
        to_json_pretty(&self.messages)
    }

    /// Write all messages to `path`.
    ///
    /// The JSON goes to a temp file in the same directory first and is then
    /// renamed over `path`, so the target holds either the old or the new
    /// content, never a partial write.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        if self.config.require_json_extension && !has_json_extension(path) {
            return Err(StoreError::InvalidExtension {
                path: path.to_path_buf(),
            });
        }
        self.write_atomic(path)?;
        debug!(
            "Saved {} system messages to {}",
            self.messages.len(),
            path.display()
        );
        Ok(())
    }

    /// Replace every message with the contents of `path`.
    ///
    /// With the backup flag on, the current messages are first written to a
    /// timestamped file in the backup directory. A failed backup is reported
    /// in the returned [`BackupOutcome`] and does not stop the load.
    ///
    /// Read, parse, and missing-default failures leave the store unchanged.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<BackupOutcome, StoreError> {
        let path = path.as_ref();
        let backup = if self.backup {
            self.write_backup()
        } else {
            BackupOutcome::Disabled
        };

        let json = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        let parsed: Messages = serde_json::from_str(&json).map_err(|e| StoreError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        let messages = normalize_roles(parsed);

        if !messages.contains_key(DEFAULT_ROLE) {
            match self.config.missing_default {
                MissingDefaultPolicy::Reject => {
                    return Err(StoreError::MissingDefault {
                        path: path.to_path_buf(),
                    });
                }
                MissingDefaultPolicy::Allow => {
                    warn!(
                        "Loaded {} without a '{DEFAULT_ROLE}' system message",
                        path.display()
                    );
                }
            }
        }

        debug!(
            "Loaded {} system messages from {}",
            messages.len(),
            path.display()
        );
        self.messages = messages;
        Ok(backup)
    }

    fn write_backup(&self) -> BackupOutcome {
        let path = backup_path(&self.config.backup.dir, Local::now());
        match self.write_atomic(&path) {
            Ok(()) => {
                debug!("Backed up system messages to {}", path.display());
                BackupOutcome::Written(path)
            }
            Err(error) => {
                warn!("Backup to {} failed: {error}", path.display());
                BackupOutcome::Failed { path, error }
            }
        }
    }

    fn write_atomic(&self, path: &Path) -> Result<(), StoreError> {
        let json = self.to_json()?;
        let tmp_path = temp_path_for(path)?;
        std::fs::write(&tmp_path, json).map_err(|e| StoreError::io(&tmp_path, e))?;
        if let Err(e) = std::fs::rename(&tmp_path, path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(StoreError::io(path, e));
        }
        Ok(())
    }
}

// ── Helpers ────────────────────────────────────────────────────────

/// Force every entry's `role` to match its key.
fn normalize_roles(mut messages: Messages) -> Messages {
    for (key, msg) in &mut messages {
        if msg.role != *key {
            warn!(
                "System message stored under '{key}' had role '{}'; using '{key}'",
                msg.role
            );
            msg.role.clone_from(key);
        }
    }
    messages
}

/// Pretty JSON with four-space indentation.
fn to_json_pretty(messages: &Messages) -> Result<String, StoreError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    messages.serialize(&mut ser)?;
    // serde_json only emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn has_json_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// `dir/.name.tmp` next to `path`.
fn temp_path_for(path: &Path) -> Result<PathBuf, StoreError> {
    let name = path.file_name().ok_or_else(|| {
        StoreError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}

// ── Tests ──────────────────────────────────────────────────────────
