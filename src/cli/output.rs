//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

/// Print a recoverable error ("error>" prefix, red) to stdout.
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "error>".red().bold(), msg);
}

/// Print a fatal error (red) to stderr.
pub fn fatal(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}", format!("Error: {}", msg).red());
}

/// Print a prompt ("name> ", cyan) without newline.
pub fn prompt(msg: &(impl std::fmt::Display + ?Sized)) {
    use std::io::Write;
    print!("{} ", format!("{}>", msg).cyan());
    std::io::stdout().flush().ok();
}
