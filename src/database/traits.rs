//! ORM seam traits.

/// Opens connections for connection specifications.
pub mod orm_factory;

/// A live connection handle.
pub mod connection;
