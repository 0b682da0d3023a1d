//! Terminal window presentation layer
//!
//! The window only reads published snapshots and posts events; it never
//! mutates the countdown session itself.

pub mod app;
pub mod input_field;
pub mod render;
pub mod runner;

pub use app::{Focus, WindowApp};
pub use runner::run_window;
