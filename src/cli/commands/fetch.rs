use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::docsource::{DirDocSource, ReportDocSource};
use crate::errors::AppResult;
use crate::models::report::ReportView;
use crate::ui::messages::info;

use super::show::print_view;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fetch {
        root,
        app_id,
        user_id,
    } = cmd
    {
        let source = DirDocSource::new(root);
        let payloads = source.fetch_reports(app_id, user_id)?;

        if payloads.is_empty() {
            println!("No report documents found for user '{user_id}'.");
            return Ok(());
        }

        info(format!("Fetched {} report document(s).", payloads.len()));
        println!();

        // Same reconstruction path as the relational reader.
        for payload in &payloads {
            let view = ReportView::from_payload(payload);
            print_view(&view);
            println!();
        }

        if let Ok(pool) = DbPool::new(&cfg.database) {
            let _ = audit(
                &pool.conn,
                "fetch",
                &format!("{app_id}/{user_id}"),
                &format!("{} document(s) fetched", payloads.len()),
            );
        }
    }
    Ok(())
}
