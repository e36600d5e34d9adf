//! The dashboard — ratatui presentation layer.
//!
//! Three panels behind a view selector: pattern generation, recognition
//! tests, and the thought stream. Exactly one panel is visible.
//!
//! ## Architecture (TEA)
//!
//! Model (`SandboxApp`) + Update (message handler) + View (layout).
//! Immediate mode; every frame is drawn from the model.

pub mod app;
pub mod event;
pub mod input;
pub mod layout;
pub mod runner;
