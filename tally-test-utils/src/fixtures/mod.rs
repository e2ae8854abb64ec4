//! Test fixture modules for database rows and HTTP mock creation.
//!
//! Each submodule hangs an accessor off [`TestSetup`](crate::TestSetup):
//!
//! - `account` - canonical accounts, external logins, session rows
//! - `auth` - mock OAuth provider endpoints (token exchange, profile)
//! - `work` - owned workload rows (clients, projects, invoices, timers)

pub mod account;
pub mod auth;
pub mod work;
