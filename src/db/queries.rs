use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::models::entry::TimeEntry;
use crate::models::geo::GeoPoint;
use crate::models::holiday::CompanyHoliday;
use crate::models::leave::LeaveRequest;
use crate::models::settings::UserSettings;
use crate::utils::time::day_window_utc;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{Connection, Result, Row, params};

// ---------------------------------------------------------------
// Time entries (the store contract consumed by the aggregation core)
// ---------------------------------------------------------------

/// Load one worker's entries for a calendar day, ascending by timestamp.
///
/// The window is always UTC 00:00:00.000 – 23:59:59.999 of `day`,
/// whatever timezone the caller displays in. Failures surface as
/// `AppError::Fetch`: the caller shows an empty state, never stale totals.
pub fn load_day_entries(
    pool: &mut DbPool,
    worker_id: &str,
    day: NaiveDate,
) -> AppResult<Vec<TimeEntry>> {
    let (start, end) = day_window_utc(day);

    let run = |conn: &Connection| -> Result<Vec<TimeEntry>> {
        let mut stmt = conn.prepare(
            "SELECT * FROM time_entries
             WHERE worker_id = ?1 AND timestamp >= ?2 AND timestamp <= ?3
             ORDER BY timestamp ASC",
        )?;

        let rows = stmt.query_map(
            params![worker_id, start.to_rfc3339(), end.to_rfc3339()],
            map_entry_row,
        )?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    };

    run(&pool.conn).map_err(AppError::Fetch)
}

/// Append one entry. Atomic per event: either the row lands with its
/// store-assigned id, or `AppError::Persistence` is returned and the
/// caller's working set must remain untouched (no partial credit).
pub fn insert_entry(conn: &Connection, entry: &TimeEntry) -> AppResult<TimeEntry> {
    let run = || -> Result<TimeEntry> {
        conn.execute(
            "INSERT INTO time_entries (worker_id, action, work_mode, location, timestamp, source, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                entry.worker_id,
                entry.action.to_db_str(),
                entry.work_mode,
                entry.location.map(|g| g.to_db_str()),
                entry.timestamp.to_rfc3339(),
                entry.source,
                entry.created_at,
            ],
        )?;

        let mut persisted = entry.clone();
        persisted.id = conn.last_insert_rowid();
        Ok(persisted)
    };

    run().map_err(AppError::Persistence)
}

pub fn map_entry_row(row: &Row) -> Result<TimeEntry> {
    let ts_str: String = row.get("timestamp")?;
    let timestamp = parse_utc(&ts_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(ts_str.clone())),
        )
    })?;

    let action_str: String = row.get("action")?;
    let location: Option<String> = row.get("location")?;

    Ok(TimeEntry {
        id: row.get("id")?,
        worker_id: row.get("worker_id")?,
        // Unrecognized kinds decode to Action::Unknown; never a row error.
        action: Action::from_db_str(&action_str),
        work_mode: row.get("work_mode")?,
        location: location.as_deref().and_then(GeoPoint::from_db_str),
        timestamp,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

fn parse_utc(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Load entries for export: everything, or a date-bounded slice.
pub fn load_entries_between(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<TimeEntry>> {
    let conn = &pool.conn;

    let mut out = Vec::new();

    match bounds {
        None => {
            let mut stmt =
                conn.prepare("SELECT * FROM time_entries ORDER BY timestamp ASC")?;
            let rows = stmt.query_map([], map_entry_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        Some((from, to)) => {
            let (start, _) = day_window_utc(from);
            let (_, end) = day_window_utc(to);

            let mut stmt = conn.prepare(
                "SELECT * FROM time_entries
                 WHERE timestamp >= ?1 AND timestamp <= ?2
                 ORDER BY timestamp ASC",
            )?;
            let rows = stmt.query_map(params![start.to_rfc3339(), end.to_rfc3339()], map_entry_row)?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

// ---------------------------------------------------------------
// Leave requests
// ---------------------------------------------------------------

pub fn insert_leave(conn: &Connection, req: &LeaveRequest) -> AppResult<LeaveRequest> {
    conn.execute(
        "INSERT INTO leave_requests (worker_id, leave_type, start_date, end_date, reason, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            req.worker_id,
            req.leave_type,
            req.start_date.format("%Y-%m-%d").to_string(),
            req.end_date.format("%Y-%m-%d").to_string(),
            req.reason,
            req.status,
            req.created_at,
        ],
    )?;

    let mut persisted = req.clone();
    persisted.id = conn.last_insert_rowid();
    Ok(persisted)
}

/// One worker's requests, most recent first (by start date).
pub fn load_leaves(pool: &mut DbPool, worker_id: &str) -> AppResult<Vec<LeaveRequest>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM leave_requests WHERE worker_id = ?1 ORDER BY start_date DESC",
    )?;

    let rows = stmt.query_map([worker_id], map_leave_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn map_leave_row(row: &Row) -> Result<LeaveRequest> {
    let start_str: String = row.get("start_date")?;
    let end_str: String = row.get("end_date")?;

    Ok(LeaveRequest {
        id: row.get("id")?,
        worker_id: row.get("worker_id")?,
        leave_type: row.get("leave_type")?,
        start_date: parse_date_col(&start_str)?,
        end_date: parse_date_col(&end_str)?,
        reason: row.get("reason")?,
        status: row.get("status")?,
        created_at: row.get("created_at")?,
    })
}

fn parse_date_col(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(s.to_string())),
        )
    })
}

// ---------------------------------------------------------------
// Company holidays
// ---------------------------------------------------------------

pub fn insert_holiday(conn: &Connection, date: NaiveDate, name: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO company_holidays (date, name) VALUES (?1, ?2)",
        params![date.format("%Y-%m-%d").to_string(), name],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Full calendar, ascending by date.
pub fn load_holidays(pool: &mut DbPool) -> AppResult<Vec<CompanyHoliday>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM company_holidays ORDER BY date ASC")?;

    let rows = stmt.query_map([], |row| {
        let date_str: String = row.get("date")?;
        Ok(CompanyHoliday {
            id: row.get("id")?,
            date: parse_date_col(&date_str)?,
            name: row.get("name")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------
// User settings
// ---------------------------------------------------------------

/// A worker without a stored row gets the defaults.
pub fn load_settings(pool: &mut DbPool, worker_id: &str) -> AppResult<UserSettings> {
    use rusqlite::OptionalExtension;

    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM user_settings WHERE worker_id = ?1")?;

    let found = stmt
        .query_row([worker_id], map_settings_row)
        .optional()?;

    Ok(found.unwrap_or_else(|| UserSettings::defaults_for(worker_id)))
}

pub fn save_settings(conn: &Connection, s: &UserSettings) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO user_settings (
            worker_id, email_notifications, push_notifications, sms_notifications,
            worktime_reminder, leave_status_update, share_location, show_online_status,
            public_profile, auto_checkout, break_reminder, overtime_alert
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            s.worker_id,
            s.email_notifications as i32,
            s.push_notifications as i32,
            s.sms_notifications as i32,
            s.worktime_reminder as i32,
            s.leave_status_update as i32,
            s.share_location as i32,
            s.show_online_status as i32,
            s.public_profile as i32,
            s.auto_checkout as i32,
            s.break_reminder as i32,
            s.overtime_alert as i32,
        ],
    )?;
    Ok(())
}

fn map_settings_row(row: &Row) -> Result<UserSettings> {
    Ok(UserSettings {
        worker_id: row.get("worker_id")?,
        email_notifications: row.get::<_, i32>("email_notifications")? == 1,
        push_notifications: row.get::<_, i32>("push_notifications")? == 1,
        sms_notifications: row.get::<_, i32>("sms_notifications")? == 1,
        worktime_reminder: row.get::<_, i32>("worktime_reminder")? == 1,
        leave_status_update: row.get::<_, i32>("leave_status_update")? == 1,
        share_location: row.get::<_, i32>("share_location")? == 1,
        show_online_status: row.get::<_, i32>("show_online_status")? == 1,
        public_profile: row.get::<_, i32>("public_profile")? == 1,
        auto_checkout: row.get::<_, i32>("auto_checkout")? == 1,
        break_reminder: row.get::<_, i32>("break_reminder")? == 1,
        overtime_alert: row.get::<_, i32>("overtime_alert")? == 1,
    })
}
