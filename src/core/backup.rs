use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use flate2::Compression;
use flate2::write::GzEncoder;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(
        _pool: &mut DbPool,
        cfg: &Config,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let expanded = crate::utils::path::expand_tilde(dest_file);
        let dest = expanded.as_path();

        // 1. Check DB exists
        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        // 2. Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // 2.5 Never overwrite without --force
        if dest.exists() && !force {
            return Err(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!(
                    "Destination already exists: {} (use --force to overwrite)",
                    dest.display()
                ),
            )
            .into());
        }

        // 3. Copy database
        fs::copy(src, dest)?;
        println!("✅ Backup created: {}", dest.display());

        // 4. Optional gzip compression
        let final_path = if compress {
            let compressed = compress_backup(dest)?;

            if compressed != dest.to_path_buf() {
                // remove uncompressed copy
                if let Err(e) = fs::remove_file(dest) {
                    eprintln!("⚠️ Failed to remove uncompressed backup: {}", e);
                }
            }

            compressed
        } else {
            dest.to_path_buf()
        };

        // 5. Log in DB
        if let Ok(conn) = Connection::open(src) {
            let _ = crate::db::log::ttlog(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }

        Ok(())
    }
}

/// Compress a backup into `<file>.gz`.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let gz_path = PathBuf::from(format!("{}.gz", path.display()));

    let input = fs::File::open(path)?;
    let output = fs::File::create(&gz_path)?;

    let mut encoder = GzEncoder::new(output, Compression::default());
    let mut reader = std::io::BufReader::new(input);
    std::io::copy(&mut reader, &mut encoder)?;
    encoder.finish()?;

    println!("📦 Compressed: {}", gz_path.display());

    Ok(gz_path)
}
