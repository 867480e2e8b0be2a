//! Shared CLI output helpers for consistent terminal output.
//!
//! Only data and success lines go to stdout; everything else goes to stderr.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: keys, hints
//! - Dimmed: comments, notes

use console::style;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ initialized`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ the local vault is disabled`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message to stderr (yellow).
///
/// Example: `⚠ 2 secrets are already overridden in the local vault`
pub fn warn(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ use --force to override these`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a dimmed comment line to stderr.
///
/// Example: `// 3 secrets found in the vault.`
pub fn comment(msg: &str) {
    if colors_enabled() {
        eprintln!("{}", style(format!("// {}", msg)).dim());
    } else {
        eprintln!("// {}", msg);
    }
}

/// Print an informational note to stderr.
///
/// Example: `! Secret "API_KEY" added in ".env.local".`
pub fn note(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("!").yellow(), msg);
    } else {
        eprintln!("! {}", msg);
    }
}

/// Print a list item with bullet.
///
/// Example: `  • DATABASE_URL`
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Print a key-value pair (label dimmed).
///
/// Example: `  API_KEY  sk-123`
pub fn kv(label: &str, value: &str) {
    if colors_enabled() {
        println!("  {}  {}", style(label).cyan(), value);
    } else {
        println!("  {}  {}", label, value);
    }
}

/// Format a key name in cyan.
pub fn key(k: &str) -> String {
    if colors_enabled() {
        style(k).cyan().to_string()
    } else {
        k.to_string()
    }
}

/// Print machine-readable data to stdout with no decoration.
pub fn data(s: &str) {
    println!("{}", s);
}

/// `"1 secret"` / `"2 secrets"`.
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
