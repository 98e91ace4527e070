use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_day_entries;
use crate::errors::AppResult;
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use crate::utils::formatting::mins2readable;
use crate::utils::table::{Column, Table};
use chrono::{NaiveDate, Utc};

/// Per-day summaries (or raw entries) over a period. Days without
/// entries are skipped.
pub fn handle(cmd: &Commands, cfg: &Config, worker: &str) -> AppResult<()> {
    if let Commands::List {
        period,
        now: only_today,
        events: events_only,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        let dates = if *only_today {
            vec![date::today()]
        } else {
            resolve_period(period)?
        };

        let mut table = Table::new(vec![
            Column {
                header: "DATE".into(),
                width: 10,
            },
            Column {
                header: "SESSION".into(),
                width: 16,
            },
            Column {
                header: "BREAKS".into(),
                width: 6,
            },
            Column {
                header: "WORKED".into(),
                width: 6,
            },
        ]);

        let mut any = false;

        for d in dates {
            let entries = load_day_entries(&mut pool, worker, d)?;

            if entries.is_empty() {
                continue;
            }
            any = true;

            if *events_only {
                print_entries(&d, &entries);
                continue;
            }

            let summary = Core::build_daily_summary(&entries, Utc::now());

            let session = summary
                .timeline
                .session
                .as_ref()
                .map(|s| {
                    format!(
                        "{} → {}",
                        s.start.format("%H:%M"),
                        s.end.format("%H:%M")
                    )
                })
                .unwrap_or_else(|| colorize_optional("--:-- → --:--"));

            table.add_row(vec![
                d.to_string(),
                session,
                summary.timeline.breaks.len().to_string(),
                mins2readable(summary.totals.net_minutes, false, true),
            ]);
        }

        if !any {
            println!("No entries for the selected period.");
        } else if !*events_only {
            println!("{}", table.render());
        }
    }
    Ok(())
}

fn resolve_period(period: &Option<String>) -> AppResult<Vec<NaiveDate>> {
    use crate::errors::AppError;

    if let Some(p) = period {
        if p.contains(':') {
            let parts: Vec<&str> = p.split(':').collect();
            if parts.len() == 2 {
                return date::generate_range(parts[0], parts[1]).map_err(AppError::InvalidDate);
            }
        }

        return date::generate_from_period(p).map_err(AppError::InvalidDate);
    }

    date::current_month_dates().map_err(AppError::InvalidDate)
}

fn print_entries(day: &NaiveDate, entries: &[crate::models::entry::TimeEntry]) {
    println!("ENTRIES for {}:", day);
    for e in entries {
        println!(
            "- {} | {} | mode={} | loc={}",
            e.timestamp.to_rfc3339(),
            e.action.to_db_str(),
            e.work_mode,
            e.location
                .map(|g| g.to_db_str())
                .unwrap_or_else(|| "--".into()),
        );
    }
}
