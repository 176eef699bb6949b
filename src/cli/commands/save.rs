use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::save::SaveLogic;
use crate::db::reports::FailureKind;
use crate::errors::{AppError, AppResult};
use crate::models::payload::ReportPayload;
use crate::ui::messages::{info, success, warning};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Save { file, new_session } = cmd {
        let raw = fs::read_to_string(file)?;
        let mut payload: ReportPayload = ReportPayload::from_json(&raw)
            .map_err(|e| AppError::Validation(format!("Invalid payload file '{file}': {e}")))?;

        // Config-level convenience default, matching the entry form.
        if payload.project_name.trim().is_empty() && !cfg.default_project.is_empty() {
            payload.project_name = cfg.default_project.clone();
        }

        match SaveLogic::save(cfg, &mut payload, *new_session) {
            Ok(outcome) => {
                success(format!("Report saved (ID: {}).", outcome.report_id));
                info(format!(
                    "Saved to {}. You can share this file or analyze it with the dashboard.",
                    cfg.database
                ));
                if let Some(path) = &outcome.snapshot_file {
                    success(format!("Session JSON saved: {}", path.display()));
                }
                if let Some(err) = &outcome.snapshot_error {
                    warning(format!("Snapshot not written: {err}"));
                }
                Ok(())
            }
            Err(failure) => Err(match failure.kind {
                FailureKind::Validation => AppError::Validation(failure.message),
                FailureKind::Storage => AppError::Other(format!(
                    "Error saving report: {} (no partial data was written)",
                    failure.message
                )),
            }),
        }
    } else {
        Ok(())
    }
}
