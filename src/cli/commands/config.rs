use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!(
                "{}",
                serde_yaml::to_string(&cfg).map_err(|_| AppError::ConfigLoad)?
            );
        }

        // ---- CHECK CONFIG ----
        if *check {
            let mut ok = true;

            let config_file = Config::config_file();
            if config_file.exists() {
                println!("✅ Config file : {}", config_file.display());
            } else {
                println!("⚠️ Config file missing (defaults in effect): {}", config_file.display());
            }

            if Path::new(&cfg.database).exists() {
                println!("✅ Database    : {}", cfg.database);
            } else {
                println!("❌ Database missing: {} (run `sitelogger init`)", cfg.database);
                ok = false;
            }

            if Path::new(&cfg.json_dir).is_dir() {
                println!("✅ Snapshots   : {}", cfg.json_dir);
            } else {
                println!("⚠️ Snapshot directory missing (created on first save): {}", cfg.json_dir);
            }

            if !ok {
                return Err(AppError::Config("configuration check failed".to_string()));
            }
        }
    }
    Ok(())
}
