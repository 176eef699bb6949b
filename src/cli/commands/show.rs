use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::reports::load_report;
use crate::errors::AppResult;
use crate::models::report::ReportView;
use crate::models::status::ActivityStatus;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { report_id } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let view = load_report(&pool.conn, *report_id)?;
        print_view(&view);
    }
    Ok(())
}

/// Render one reconstructed report, section by section. Shared with
/// `fetch`, which builds its views from external documents.
pub fn print_view(view: &ReportView) {
    let date = view
        .report_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "(no date)".to_string());

    println!("=== Report: {} — {} ===", view.project_name, date);
    if let Some(id) = view.report_id {
        println!("Report ID:       {}", id);
    }
    println!("Prepared By:     {}", or_dash(&view.prepared_by));
    println!("Weather:         {}", or_dash(&view.weather));
    println!("Site Conditions: {}", or_dash(&view.site_conditions));
    println!();

    println!("Work Activities");
    if view.activities.is_empty() {
        println!("  No work activities logged.");
    } else {
        let mut t = Table::new(vec!["Description", "Status", "% Complete", "Notes"]);
        for a in &view.activities {
            t.add_row(vec![
                a.activity_description.clone(),
                a.status.clone(),
                a.percent_complete.to_string(),
                a.notes.clone(),
            ]);
        }
        print!("{}", indent(&t.render()));

        let done = view
            .activities
            .iter()
            .filter(|a| ActivityStatus::from_db_str(&a.status).is_some_and(|s| s.is_done()))
            .count();
        println!("  {done}/{} completed", view.activities.len());
    }
    println!();

    println!("Manpower");
    if view.manpower.is_empty() {
        println!("  No manpower logged.");
    } else {
        let mut t = Table::new(vec!["Trade", "Workers", "Hours"]);
        for m in &view.manpower {
            t.add_row(vec![
                m.trade.clone(),
                m.number_of_workers.to_string(),
                format!("{:.1}", m.hours_worked),
            ]);
        }
        print!("{}", indent(&t.render()));

        println!("  Hours by trade:");
        for (trade, hours) in view.manpower_hours_by_trade() {
            println!("    {trade}: {hours:.1}");
        }
    }
    println!();

    println!("Equipment");
    if view.equipment.is_empty() {
        println!("  No equipment logged.");
    } else {
        let mut t = Table::new(vec!["Equipment", "Qty", "Hours Used"]);
        for e in &view.equipment {
            t.add_row(vec![
                e.equipment_name.clone(),
                e.quantity.to_string(),
                format!("{:.1}", e.hours_used),
            ]);
        }
        print!("{}", indent(&t.render()));
    }
    println!();

    println!("Materials");
    if view.materials.is_empty() {
        println!("  No materials delivered.");
    } else {
        let mut t = Table::new(vec!["Material", "Qty", "Unit", "Supplier", "Ticket #"]);
        for m in &view.materials {
            t.add_row(vec![
                m.material_name.clone(),
                format!("{}", m.quantity),
                m.unit.clone(),
                m.supplier.clone(),
                m.ticket_number.clone(),
            ]);
        }
        print!("{}", indent(&t.render()));
    }
    println!();

    println!("General Notes");
    println!("  {}", or_dash(&view.general_notes));
}

fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() { "--" } else { s }
}

fn indent(block: &str) -> String {
    block
        .lines()
        .map(|l| format!("  {l}\n"))
        .collect::<String>()
}
