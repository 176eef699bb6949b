use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::snapshot::SnapshotStore;
use crate::ui::messages::success;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sessions { list, new, show } = cmd {
        let store = SnapshotStore::new(&cfg.json_dir);

        if *new {
            store.reset_session();
            success("New session will be created on next save.");
        }

        if *list {
            let files = store.list();
            if files.is_empty() {
                println!("No snapshot files in {}.", store.dir().display());
            } else {
                let current = store.open_session();
                for f in &files {
                    let name = f
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_default();
                    let marker = if current.current_file() == Some(f.as_path()) {
                        " (current)"
                    } else {
                        ""
                    };
                    println!("{name}{marker}");
                }
            }
        }

        if let Some(file) = show {
            let Some(payload) = store.load(Path::new(file)) else {
                return Err(AppError::NotFound(format!(
                    "Snapshot '{file}' is missing or unreadable"
                )));
            };
            let json = serde_json::to_string_pretty(&payload)
                .map_err(|e| AppError::Snapshot(e.to_string()))?;
            println!("{json}");
        }
    }
    Ok(())
}
