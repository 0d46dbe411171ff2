//! Database queries for the web handlers
//!
//! One module per entity. All writes run inside a transaction: commit on
//! success, rollback on any failure, connection returned to the pool
//! either way.

pub mod artists;
pub mod shows;
pub mod venues;
