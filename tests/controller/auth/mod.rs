//! Tests for authentication controller endpoints.
//!
//! This module contains integration tests for authentication-related HTTP endpoints,
//! including the OAuth login flow, callback handling, logout functionality, and
//! signed-in account retrieval.

mod account;
mod login;
mod logout;
