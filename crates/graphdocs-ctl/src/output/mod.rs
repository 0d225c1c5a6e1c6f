//! Styled terminal output for `graphdocs-ctl`.
//!
//! Status messages go to stderr so that generated AsciiDoc on stdout can be piped
//! straight into a file. `anstream` strips the styling when the stream is not a
//! terminal.

mod styles;

use std::io::Write;

pub(crate) use styles::clap_styles;

use styles::{ERROR, HINT, SUCCESS, WARNING};

/// Print a success message (green checkmark prefix).
pub(crate) fn success(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{SUCCESS}✓{SUCCESS:#} {SUCCESS}{msg}{SUCCESS:#}").ok();
}

/// Print an error message (red X prefix).
pub(crate) fn error(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{ERROR}✗ {msg}{ERROR:#}").ok();
}

/// Print a warning message (yellow exclamation prefix).
pub(crate) fn warning(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{WARNING}! {msg}{WARNING:#}").ok();
}

/// Print a hint/suggestion (dimmed, for guidance text).
pub(crate) fn hint(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{HINT}{msg}{HINT:#}").ok();
}

/// Print a blank line.
pub(crate) fn blank() {
    let mut out = anstream::stderr().lock();
    writeln!(out).ok();
}

/// Print plain text (for guidance that doesn't need styling).
pub(crate) fn plain(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{msg}").ok();
}
