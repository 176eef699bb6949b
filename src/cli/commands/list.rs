use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::projects::find_project_by_name;
use crate::db::reports::list_reports;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { project, date } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        // Read-only lookup: listing must not create projects.
        let Some(project_id) = find_project_by_name(&pool.conn, project)? else {
            return Err(AppError::NotFound(format!(
                "Project '{}' does not exist",
                project.trim()
            )));
        };

        let mut reports = list_reports(&pool.conn, project_id)?;

        if let Some(d) = date {
            let wanted = parse_date(d)?;
            reports.retain(|r| r.report_date == wanted);
        }

        if reports.is_empty() {
            println!("No reports for project '{}'.", project.trim());
            return Ok(());
        }

        let mut table = Table::new(vec!["Report ID", "Date"]);
        for r in &reports {
            table.add_row(vec![
                r.report_id.to_string(),
                r.report_date.format("%Y-%m-%d").to_string(),
            ]);
        }
        println!("{}", table.render());
    }
    Ok(())
}
