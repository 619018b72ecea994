//! Output functions for consistent CLI formatting

use super::context::UiContext;
use console::style;
use std::io::{self, Write};

/// Display intro banner
pub fn intro(ctx: &UiContext, title: &str) {
    if ctx.fancy() {
        cliclack::intro(style(title).green().bold()).ok();
    } else {
        println!("{}", style(format!("=== {} ===", title)).green().bold());
    }
}

/// Display success outro
pub fn outro_success(ctx: &UiContext, message: &str) {
    if ctx.fancy() {
        cliclack::outro(style(message).green().bold()).ok();
    } else {
        println!();
        println!("{} {}", style("[OK]").green(), message);
    }
}

/// Display warning outro
pub fn outro_warn(ctx: &UiContext, message: &str) {
    if ctx.fancy() {
        cliclack::outro(style(message).yellow().bold()).ok();
    } else {
        println!();
        println!("{} {}", style("[WARN]").yellow(), message);
    }
}

/// Display a section header
pub fn section(ctx: &UiContext, title: &str) {
    if ctx.fancy() {
        cliclack::log::info(style(title).bold()).ok();
    } else {
        println!();
        println!("{}", style(title).bold());
    }
}

/// Display a success step
pub fn step_ok(ctx: &UiContext, message: &str) {
    if ctx.fancy() {
        cliclack::log::success(message).ok();
    } else {
        println!("  {} {}", style("[OK]").green(), message);
    }
}

/// Display a success step with detail
pub fn step_ok_detail(ctx: &UiContext, message: &str, detail: &str) {
    if ctx.fancy() {
        cliclack::log::success(format!("{} ({})", message, style(detail).dim())).ok();
    } else {
        println!("  {} {} ({})", style("[OK]").green(), message, detail);
    }
}

/// Display a warning step with detail
pub fn step_warn_detail(ctx: &UiContext, message: &str, detail: &str) {
    if ctx.fancy() {
        cliclack::log::warning(format!("{}: {}", message, style(detail).dim())).ok();
    } else {
        println!("  {} {}: {}", style("[WARN]").yellow(), message, detail);
    }
}

/// Display a warning step with an actionable hint
pub fn step_warn_hint(ctx: &UiContext, message: &str, hint: &str) {
    if ctx.fancy() {
        cliclack::log::warning(format!("{} - {}", message, style(hint).dim())).ok();
    } else {
        println!("  {} {} - {}", style("[WARN]").yellow(), message, hint);
    }
}

/// Display an info step
pub fn step_info(ctx: &UiContext, message: &str) {
    if ctx.fancy() {
        cliclack::log::info(message).ok();
    } else {
        println!("  {} {}", style("[INFO]").cyan(), message);
    }
}

/// Display a remark/hint
pub fn remark(ctx: &UiContext, message: &str) {
    if ctx.fancy() {
        cliclack::log::remark(message).ok();
    } else {
        println!("  {}", style(message).dim());
    }
}

/// Inline confirmation
///
/// `--yes` auto-approves; non-interactive runs refuse rather than hang on
/// a prompt nobody will answer.
pub fn confirm_inline(ctx: &UiContext, prompt: &str, auto_yes: bool) -> bool {
    if auto_yes {
        println!("  {} (auto-approved)", prompt);
        return true;
    }

    if !ctx.is_interactive() {
        println!("  {} [y/N] (non-interactive, pass --yes to approve)", prompt);
        return false;
    }

    print!("  {} [y/N] ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    input.trim().eq_ignore_ascii_case("y")
}
