pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

// Re-exports kept for older call sites
pub use formatting::describe_work_mode;
pub use formatting::mins2readable;
