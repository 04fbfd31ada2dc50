//! UI helpers for consistent CLI output
//!
//! Styled output on interactive terminals, tagged plain lines otherwise
//! (pipes, CI).

mod context;
mod output;

pub use context::UiContext;
pub use output::{intro, key_value, remark, step_info, step_ok, step_warn, step_warn_hint};
