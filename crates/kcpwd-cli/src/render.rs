//! Terminal rendering utilities.
//!
//! Status lines and the yes/no confirmation prompt.

use std::io;

use console::{style, Emoji};

use crate::Terminal;

static CHECK: Emoji = Emoji("✓ ", "");

/// Print a success line on stdout.
pub fn render_success(term: &mut Terminal<'_>, message: &str) -> io::Result<()> {
    writeln!(term.out(), "{}{}", style(CHECK).green(), message)
}

/// Print a failure line on stderr.
pub fn render_error(term: &mut Terminal<'_>, message: &str) -> io::Result<()> {
    writeln!(term.err(), "{}", style(message).red().for_stderr())
}

/// Ask a yes/no question; anything but an explicit yes is a no.
pub fn render_confirm(term: &mut Terminal<'_>, question: &str) -> io::Result<bool> {
    write!(term.err(), "{} ", style(format!("{question} [y/N]:")).bold().for_stderr())?;
    term.err().flush()?;

    let answer = term.read_line()?.unwrap_or_default();
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
