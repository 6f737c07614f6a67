//! Integration test entry point.

mod helpers;

mod message_test;
mod session_test;
mod updates_test;
