//! Shared terminal utilities.
//!
//! Box drawing, layout helpers and the full-screen guard.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
