//! Number window library for the average calculator
//!
//! Keeps the most recent distinct integers seen across upstream fetches and
//! reports their running average.
//!
//! # Modules
//! - `window`: the bounded, deduplicated, insertion-ordered window and merge
//! - `numeric`: exact integer summation and mean helpers
//! - `errors`: construction errors

pub mod errors;
pub mod numeric;
pub mod window;

pub use errors::WindowError;
pub use window::{MergeResult, NumberWindow, DEFAULT_WINDOW_SIZE};
