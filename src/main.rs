//! Rollcall Attendance Console
//!
//! Command-line entry point: loads configuration, connects to the remote
//! attendance API and prints today's attendance snapshot with the latest
//! statistics.

use tracing::{info, warn};

use rollcall::controllers::{RosterController, StatsController};
use rollcall::utils::{logging, time};
use rollcall::{ApiClient, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard must outlive all logging
    let _logging_guard = logging::init_logging(&settings.logging)?;

    info!("Starting Rollcall Attendance Console...");

    let api = ApiClient::new(&settings.api)?;
    let today = time::today_at_offset(settings.roster.timezone_offset_hours);

    info!(date = %today, year = settings.roster.school_year, "Loading roster snapshot");
    let mut roster = RosterController::new(api.clone(), settings.roster.school_year, today);
    roster.load().await?;

    println!("출석 현황 {} ({}명)", time::format_date(today), roster.entries().len());
    for (label, entries) in roster.grouped() {
        let marked = entries.iter().filter(|entry| entry.status.is_set()).count();
        println!("  {}: {} / {}", label, marked, entries.len());
    }

    let mut stats = StatsController::new(api);
    match stats.load().await {
        Ok(()) => {
            println!();
            println!("학년별 최근 주 출석률");
            for grade in stats.grade_summary() {
                println!(
                    "  {} {}학년: {}% ({} / {})",
                    grade.school_type.display_name(),
                    grade.grade,
                    grade.rate,
                    grade.attended,
                    grade.total
                );
            }
        }
        Err(e) => warn!(error = %e, "Statistics unavailable, printed roster only"),
    }

    info!("Snapshot complete");
    Ok(())
}
