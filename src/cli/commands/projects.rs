use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::projects::list_projects;
use crate::errors::AppResult;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Projects = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let projects = list_projects(&pool.conn)?;

        if projects.is_empty() {
            println!("No projects found. Save a report first.");
            return Ok(());
        }

        let mut table = Table::new(vec!["ID", "Project", "Location"]);
        for p in &projects {
            table.add_row(vec![
                p.project_id.to_string(),
                p.project_name.clone(),
                p.location.clone().unwrap_or_default(),
            ]);
        }
        println!("{}", table.render());
    }
    Ok(())
}
