//! Utilities module - Console output helpers

use colored::*;

use super::config::Config;

/// Print a progress line, e.g. `[+] Building: kernel...`
pub fn print_info(step: &str, content: &str) {
    println!("{} {}", format!("[+] {step}:").bright_green().bold(), content.bold());
}

/// Print an error line to stderr
pub fn print_error(step: &str, content: &str) {
    eprintln!("{} {}", format!("[E] {step}:").bright_red().bold(), content.bold());
}

/// Print a warning message
pub fn print_warning(step: &str, content: &str) {
    println!("{} {}", format!("[!] {step}:").bright_yellow().bold(), content.bold());
}

/// Print a detail line, only when verbose or dry-run
pub fn print_debug(config: &Config, step: &str, content: &str) {
    if config.show_debug() {
        println!("{} {}", format!("[?] {step}:").bright_blue().bold(), content.bold());
    }
}
