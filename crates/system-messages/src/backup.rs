//! Timestamped backups written before a `load` replaces the store.
//!
//! Backup files are named `<YYYY-MM-DD_HH-MM-SS>-backup.json`, so a plain
//! directory listing sorts them chronologically. Resolution is one second;
//! two backups in the same second share a name and the later one wins.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::StoreError;

/// `strftime` pattern for the timestamp prefix.
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Suffix appended after the timestamp.
pub const BACKUP_SUFFIX: &str = "-backup.json";

/// Backup file name for the given instant.
pub fn backup_file_name(now: DateTime<Local>) -> String {
    format!("{}{BACKUP_SUFFIX}", now.format(BACKUP_TIMESTAMP_FORMAT))
}

/// Full backup path inside `dir` for the given instant.
pub fn backup_path(dir: &Path, now: DateTime<Local>) -> PathBuf {
    dir.join(backup_file_name(now))
}

/// Whether `name` looks like a file produced by [`backup_file_name`].
pub fn is_backup_file_name(name: &str) -> bool {
    let Some(stamp) = name.strip_suffix(BACKUP_SUFFIX) else {
        return false;
    };
    chrono::NaiveDateTime::parse_from_str(stamp, BACKUP_TIMESTAMP_FORMAT).is_ok()
}

/// What happened to the pre-load backup.
///
/// A failed backup never blocks the load itself; it is reported here so the
/// caller can decide whether it matters.
#[derive(Debug)]
pub enum BackupOutcome {
    /// The backup flag was off.
    Disabled,
    /// The pre-load data was written to this path.
    Written(PathBuf),
    /// Writing the backup failed.
    Failed { path: PathBuf, error: StoreError },
}

impl BackupOutcome {
    /// Path of the written backup, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Written(path) => Some(path),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_instant() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 9, 5, 3)
            .single()
            .unwrap()
    }

    #[test]
    fn file_name_is_zero_padded() {
        assert_eq!(
            backup_file_name(fixed_instant()),
            "2025-01-08_09-05-03-backup.json"
        );
    }

    #[test]
    fn path_joins_dir() {
        let path = backup_path(Path::new("snapshots"), fixed_instant());
        assert_eq!(
            path,
            PathBuf::from("snapshots/2025-01-08_09-05-03-backup.json")
        );
    }

    #[test]
    fn recognizes_backup_names() {
        assert!(is_backup_file_name("2025-01-08_09-05-03-backup.json"));
        assert!(is_backup_file_name(&backup_file_name(Local::now())));
        assert!(!is_backup_file_name("system_data.json"));
        assert!(!is_backup_file_name("2025-01-08-backup.json"));
        assert!(!is_backup_file_name("2025-01-08_09-05-03.json"));
    }

    #[test]
    fn outcome_accessors() {
        let written = BackupOutcome::Written(PathBuf::from("a-backup.json"));
        assert_eq!(written.path(), Some(Path::new("a-backup.json")));
        assert!(!written.is_failed());

        assert!(BackupOutcome::Disabled.path().is_none());

        let failed = BackupOutcome::Failed {
            path: PathBuf::from("b-backup.json"),
            error: StoreError::io(
                "b-backup.json",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            ),
        };
        assert!(failed.is_failed());
        assert!(failed.path().is_none());
    }
}
