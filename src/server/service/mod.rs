//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that implements business logic and
//! coordinates between repositories. Each service wraps the multi-step
//! operations of one domain: OAuth sign-in, identity resolution and account
//! merging, work timers, workload records, dashboard stats, and account data
//! teardown. Steps that must land together run inside a database transaction.

pub mod auth;
pub mod identity;
pub mod lifecycle;
pub mod stats;
pub mod timer;
pub mod work;
