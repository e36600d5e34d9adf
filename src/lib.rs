//! Consciousness Sandbox — pattern, recognition, and thought-stream experiments
//! rendered as a terminal dashboard.
//!
//! The thought stream is the only part with behavior over time: a
//! timer-driven, append-only log with start/pause control.

pub mod config;
pub mod error;
pub mod patterns;
pub mod recognition;
pub mod stream;
pub mod tui;
