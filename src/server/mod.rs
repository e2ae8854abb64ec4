//! Server application core modules.
//!
//! Everything backing the tally HTTP API and the chat-bot integration:
//! routing, OAuth sign-in, identity resolution and merging, work timers,
//! account data teardown, and the data access layer underneath them.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod oauth;
pub mod router;
pub mod service;
pub mod startup;
