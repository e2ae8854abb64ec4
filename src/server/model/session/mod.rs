//! Session data models and utilities.
//!
//! This module provides type-safe wrappers for session data storage and retrieval using
//! tower-sessions. Each submodule defines a specific piece of session state (account ID,
//! CSRF tokens) with methods for inserting, retrieving, and removing data from the
//! session store.

pub mod account;
pub mod auth;
pub mod token;
