//! Database entity definitions for the tally schema.
//!
//! One module per table. The `prelude` re-exports each table's `Entity`
//! under its table name for use with `EntityTrait` queries.

pub mod prelude;

pub mod account;
pub mod client;
pub mod external_login;
pub mod invoice;
pub mod project;
pub mod session;
pub mod side_project;
pub mod timer;
