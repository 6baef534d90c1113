//! Database enumeration types.

/// Supported SQL dialects (sqlite3, mysql, pgsql).
pub mod dialect;
