//! End-to-end flow tests.
//!
//! This module contains scenario tests that chain several endpoints the way
//! the dashboard drives them: the chat-to-web identity claim, a tracked work
//! session, and account teardown followed by a fresh sign-in.

mod sign_in;
mod work_session;
