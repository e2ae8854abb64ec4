//! Freelance workload repositories.
//!
//! This module contains repositories for the records a freelancer tracks
//! against their account: clients, projects, side projects, invoices, and
//! work timers. Each repository provides creation and lookup methods plus
//! the account-scoped bulk operations that account merge and data teardown
//! rely on.

pub mod client;
pub mod invoice;
pub mod project;
pub mod side_project;
pub mod timer;
