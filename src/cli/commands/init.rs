use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::ensure_schema;
use crate::db::log;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database and report schema
///  - the snapshot directory
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let path = Config::config_file();
    let cfg = Config::load();
    let db_path = cli.db.clone().unwrap_or_else(|| cfg.database.clone());

    println!("⚙️  Initializing sitelogger…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    ensure_schema(&conn)?;

    println!("✅ Database initialized at {}", &db_path);

    // Audit entry is best-effort here.
    if let Err(e) = log::audit(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write audit log: {}", e);
    }

    println!("🎉 sitelogger initialization completed!");
    Ok(())
}
