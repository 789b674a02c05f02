//! Pingboard library
//!
//! Core components for the live latency board: target loading, the shared
//! result table, per-target probers, rendering and the lifecycle controller.

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod probe;
pub mod state;
pub mod target;
pub mod terminal;
pub mod ui;
