//! Backend for the tally commission tracker.
//!
//! Canonical accounts are reachable from two entry points, a chat bot and a
//! web dashboard, and this crate owns the logic that keeps them unified:
//! identity resolution, account merging, work timers, and account data
//! teardown, plus the HTTP surface the dashboard consumes.

pub mod model;
pub mod server;
