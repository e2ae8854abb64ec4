//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including
//! application state, identity assertions produced by the sign-in surfaces,
//! and session data structures. These models bridge the gap between database
//! entities, HTTP handlers, and the identity services.

pub mod app;
pub mod identity;
pub mod session;
