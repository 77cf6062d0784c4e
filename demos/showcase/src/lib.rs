//! Showcase demo library
//!
//! Exposes the app modules so integration tests can drive the UI against
//! a test backend.

pub mod action;
pub mod data;
pub mod reducer;
pub mod state;
pub mod ui;
