//! Integration tests for coin-notify

mod common;
mod config_test;
mod notify_test;
mod payload_test;
