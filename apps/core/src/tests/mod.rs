//! Test Module
//!
//! Cross-module test suite for the lab core.
//!
//! ## Test Categories
//! - `engine_tests`: generation and analysis properties (proptest)
//! - `workspace_tests`: lab state flows from canvas to community feed
//! - `storage_tests`: file store and concept/metrics persistence

pub mod engine_tests;
