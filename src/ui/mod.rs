//! Styled terminal output with a plain fallback
//!
//! Fancy output (cliclack intro/outro and log steps) is used in interactive
//! terminals; CI and piped runs get plain prefixed lines. Subprocess output
//! is never captured, so there are no spinners to fight with it.

mod context;
mod output;

pub use context::UiContext;
pub use output::{
    confirm_inline, intro, outro_success, outro_warn, remark, section, step_info, step_ok,
    step_ok_detail, step_warn_detail, step_warn_hint,
};
