//! Test Module
//!
//! Cross-module tests for the assistant core.
//!
//! ## Test Categories
//! - `brain_tests`: Intent classification, categorization, scoring, generation
//! - `session_tests`: Chat session pipeline, busy flag, history, voice routing
//! - `handle_tests`: Session actor handle
//! - `dashboard_tests`: Charts and idea search
//! - `config_tests`: Environment overrides and validation

pub mod brain_tests;
pub mod session_tests;
