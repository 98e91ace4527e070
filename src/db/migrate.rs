//! Schema migration engine. Every schema change goes through here;
//! applied versions are recorded as `migration_applied` rows in `log`.

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check whether a migration version was already applied.
fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut stmt = conn.prepare(
        "SELECT 1 FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
    )?;
    Ok(stmt.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Record a migration version as applied.
fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message) VALUES (?1, 'migration_applied', ?2, ?3)",
        rusqlite::params![chrono::Utc::now().to_rfc3339(), version, message],
    )?;
    Ok(())
}

/// Create the `time_entries` table.
///
/// `action` carries NO CHECK constraint: unrecognized action kinds must
/// round-trip through the store and be skipped by the timeline builder,
/// not rejected at the boundary.
fn create_time_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS time_entries (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            worker_id   TEXT NOT NULL,
            action      TEXT NOT NULL,
            work_mode   TEXT NOT NULL DEFAULT 'office',
            location    TEXT,
            timestamp   TEXT NOT NULL,
            source      TEXT NOT NULL DEFAULT 'cli',
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_worker_ts ON time_entries(worker_id, timestamp);
        CREATE INDEX IF NOT EXISTS idx_entries_ts ON time_entries(timestamp);
        "#,
    )?;
    Ok(())
}

fn create_leave_requests_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS leave_requests (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            worker_id   TEXT NOT NULL,
            leave_type  TEXT NOT NULL,
            start_date  TEXT NOT NULL,
            end_date    TEXT NOT NULL,
            reason      TEXT NOT NULL DEFAULT '',
            status      TEXT NOT NULL DEFAULT 'pending',
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_leave_worker_start ON leave_requests(worker_id, start_date);
        "#,
    )?;
    Ok(())
}

fn create_company_holidays_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS company_holidays (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            date  TEXT NOT NULL,
            name  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_holidays_date ON company_holidays(date);
        "#,
    )?;
    Ok(())
}

fn create_user_settings_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS user_settings (
            worker_id           TEXT PRIMARY KEY,
            email_notifications INTEGER NOT NULL DEFAULT 1,
            push_notifications  INTEGER NOT NULL DEFAULT 1,
            sms_notifications   INTEGER NOT NULL DEFAULT 0,
            worktime_reminder   INTEGER NOT NULL DEFAULT 1,
            leave_status_update INTEGER NOT NULL DEFAULT 1,
            share_location      INTEGER NOT NULL DEFAULT 1,
            show_online_status  INTEGER NOT NULL DEFAULT 1,
            public_profile      INTEGER NOT NULL DEFAULT 0,
            auto_checkout       INTEGER NOT NULL DEFAULT 0,
            break_reminder      INTEGER NOT NULL DEFAULT 1,
            overtime_alert      INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `time_entries` table has a `source` column.
fn entries_have_source_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('time_entries')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "source" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Migrate a pre-0.4 `time_entries` table to include the `source` column.
fn migrate_add_source_to_entries(conn: &Connection) -> Result<()> {
    let version = "20251118_0003_add_source_to_time_entries";

    if is_applied(conn, version)? {
        return Ok(());
    }

    if !entries_have_source_column(conn)? {
        conn.execute_batch(
            "ALTER TABLE time_entries ADD COLUMN source TEXT NOT NULL DEFAULT 'cli';",
        )?;
    }

    mark_applied(conn, version, "Added 'source' column to time_entries")?;
    Ok(())
}

/// Run all pending migrations. Safe to call on every startup: each step
/// is idempotent and versioned steps are recorded in `log`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn).map_err(|e| AppError::Migration(e.to_string()))?;

    create_time_entries_table(conn).map_err(|e| AppError::Migration(e.to_string()))?;
    create_leave_requests_table(conn).map_err(|e| AppError::Migration(e.to_string()))?;
    create_company_holidays_table(conn).map_err(|e| AppError::Migration(e.to_string()))?;
    create_user_settings_table(conn).map_err(|e| AppError::Migration(e.to_string()))?;

    migrate_add_source_to_entries(conn).map_err(|e| AppError::Migration(e.to_string()))?;

    Ok(())
}
