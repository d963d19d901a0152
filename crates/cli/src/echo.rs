use owo_colors::OwoColorize;

use crate::VERSION;

/// Startup logo. Static constant, no process-wide mutable state.
const LOGO: &str = r"
                _                 _
  _ __ ___   __| | __ _ _ __ __ _| |__
 | '_ ` _ \ / _` |/ _` | '__/ _` | '_ \
 | | | | | | (_| | (_| | | | (_| | |_) |
 |_| |_| |_|\__,_|\__, |_|  \__,_|_.__/
                  |___/
";

/// Print the startup banner
pub fn print_banner() {
    eprintln!("{}", LOGO.bright_blue());
    eprintln!(
        "{} {} {}",
        "mdgrab".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Grab a CSDN article and save it as Markdown".dimmed());
    eprintln!("{}", "=".repeat(50).dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}
