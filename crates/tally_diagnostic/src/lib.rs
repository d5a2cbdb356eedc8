//! Diagnostics for the Tally lexer.
//!
//! A [`Diagnostic`] is a message anchored to a byte offset in the source.
//! Rendering happens here, at the boundary: the producing code keeps
//! structured values and only formats them into the human-readable
//! message + caret snippet when a report is actually surfaced.
//!
//! ```text
//! expected a number after the decimal point
//! 1. + 2
//!   ^
//! ```

mod diagnostic;
pub mod snippet;

pub use diagnostic::{render_all, Diagnostic};
