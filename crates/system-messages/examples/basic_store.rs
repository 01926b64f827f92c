//! Minimal store example: add roles, save, edit, and load back.
//!
//! Backups are written into the system temp directory rather than the CWD.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example basic_store
//! ```

use system_messages::prelude::*;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<(), StoreError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let workdir = std::env::temp_dir().join("system-messages-example");
    std::fs::create_dir_all(&workdir).map_err(|e| StoreError::Io {
        path: workdir.clone(),
        source: e,
    })?;

    // 1. Start from a plain default message.
    let config = StoreConfig::default().with_backup_dir(&workdir);
    let mut store = MessageStore::with_config("You are a helpful assistant.", config);

    // 2. Register a custom role. Adding it twice fails.
    store.add("reviewer", "Review the diff and list concrete issues.")?;
    if let Err(e) = store.add("reviewer", "Something else") {
        println!("expected failure: {e}");
    }

    // 3. Persist, then change the in-memory copy.
    let path = workdir.join("system_data.json");
    store.save(&path)?;
    store.edit("reviewer", "Only point out bugs.");
    println!("default can't be edited: {}", !store.edit(DEFAULT_ROLE, "nope"));

    // 4. Load the saved file back; the edited state is backed up first.
    match store.load(&path)? {
        BackupOutcome::Written(backup) => println!("backup: {}", backup.display()),
        BackupOutcome::Failed { path, error } => {
            println!("backup to {} failed: {error}", path.display())
        }
        BackupOutcome::Disabled => println!("backup disabled"),
    }

    for msg in store.iter() {
        println!("{:>10}: {}", msg.role, msg.content);
    }
    println!("unknown role -> {}", store.get(Some("planner"))?);

    Ok(())
}
