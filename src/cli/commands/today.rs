use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_day_entries;
use crate::errors::{AppError, AppResult};
use crate::models::day_summary::DaySummary;
use crate::ui::messages::warning;
use crate::utils::colors::{RESET, color_for_net, color_for_status};
use crate::utils::formatting::mins2readable;
use crate::utils::time::parse_optional_timestamp;
use crate::utils::{date, describe_work_mode};
use chrono::{NaiveDate, Utc};

/// Reconstruct and display one day. With `--watch` the computation is
/// re-run at the configured interval: no new I/O is strictly needed to
/// advance `now`, but re-fetching also picks up entries recorded from
/// another terminal, so each tick reloads the day.
pub fn handle(cmd: &Commands, cfg: &Config, worker: &str) -> AppResult<()> {
    if let Commands::Today {
        date: day_arg,
        details,
        watch,
        at,
    } = cmd
    {
        let at_parsed = parse_optional_timestamp(at.as_ref())?;

        // Day priority: explicit --date, then the --at day, then today (UTC)
        let day: NaiveDate = match day_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => at_parsed.map(|t| t.date_naive()).unwrap_or_else(date::today),
        };

        let mut pool = DbPool::new(&cfg.database)?;

        loop {
            let now = at_parsed.unwrap_or_else(Utc::now);

            // A failed fetch renders the zero/empty state, never stale totals.
            let summary = match load_day_entries(&mut pool, worker, day) {
                Ok(entries) => Core::build_daily_summary(&entries, now),
                Err(AppError::Fetch(e)) => {
                    warning(format!("Fetch failed, showing empty day: {}", e));
                    Core::build_daily_summary(&[], now)
                }
                Err(e) => return Err(e),
            };

            print_day(&day, worker, &summary, *details);

            if !*watch {
                break;
            }

            std::thread::sleep(std::time::Duration::from_secs(cfg.refresh_secs.max(1)));
        }
    }

    Ok(())
}

fn print_day(day: &NaiveDate, worker: &str, summary: &DaySummary, details: bool) {
    println!("\n=== {} (worker {}) ===", day, worker);

    let status = summary.status.as_str();
    println!(
        "Status : {}{}{}",
        color_for_status(status),
        status,
        RESET
    );

    match &summary.timeline.session {
        Some(s) => {
            println!(
                "Session: {} → {}  ({} min)",
                s.start.format("%H:%M"),
                s.end.format("%H:%M"),
                s.minutes
            );
        }
        None => println!("Session: --:-- → --:--"),
    }

    let break_total: i64 = summary.timeline.breaks.iter().map(|b| b.minutes).sum();
    println!(
        "Breaks : {} ({} min)",
        summary.timeline.breaks.len(),
        break_total
    );
    for b in &summary.timeline.breaks {
        println!(
            "  - {} → {}  ({} min)",
            b.start.format("%H:%M"),
            b.end.format("%H:%M"),
            b.minutes
        );
    }

    println!(
        "Worked : {}{}{}  ({} min net)",
        color_for_net(summary.totals.net_minutes),
        mins2readable(summary.totals.net_minutes, false, false),
        RESET,
        summary.totals.net_minutes
    );

    if details {
        println!("\nEntries:");
        for e in &summary.timeline.entries {
            let (mode_label, _) = describe_work_mode(&e.work_mode);
            println!(
                "  {:>4}: {} | {:<12} | {}{}",
                e.id,
                e.timestamp.format("%H:%M:%S"),
                e.action.to_db_str(),
                mode_label,
                e.location
                    .map(|g| format!(" | @{}", g.to_db_str()))
                    .unwrap_or_default(),
            );
        }
    }
}
