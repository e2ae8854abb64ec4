//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, organizing
//! data access by domain (identity records and freelance workload records).
//!
//! Every repository is generic over [`sea_orm::ConnectionTrait`] so services
//! can hand it either the shared connection pool or a live transaction.

pub mod identity;
pub mod work;
