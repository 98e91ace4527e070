use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let entries: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM time_entries", [], |row| row.get(0))?;
    let leaves: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM leave_requests", [], |row| row.get(0))?;
    let holidays: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM company_holidays", [], |row| {
            row.get(0)
        })?;

    println!(
        "{}• Time entries:{} {}{}{}",
        CYAN, RESET, GREEN, entries, RESET
    );
    println!(
        "{}• Leave requests:{} {}{}{}",
        CYAN, RESET, GREEN, leaves, RESET
    );
    println!(
        "{}• Company holidays:{} {}{}{}",
        CYAN, RESET, GREEN, holidays, RESET
    );

    //
    // 3) ENTRY TIMESTAMP RANGE
    //
    use rusqlite::OptionalExtension;

    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM time_entries ORDER BY timestamp ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM time_entries ORDER BY timestamp DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.clone().unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.clone().unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Entry range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE ENTRIES/DAY
    //
    if let (Some(f), Some(l)) = (first, last) {
        let d1 = chrono::DateTime::parse_from_rfc3339(&f);
        let d2 = chrono::DateTime::parse_from_rfc3339(&l);

        if let (Ok(d1), Ok(d2)) = (d1, d2) {
            let days = (d2.date_naive() - d1.date_naive()).num_days().max(1);
            let avg = entries as f64 / days as f64;
            println!("{}• Average entries/day:{} {:.2}", CYAN, RESET, avg);
        }
    }

    println!();
    Ok(())
}
