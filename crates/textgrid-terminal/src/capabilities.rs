//! Terminal capability detection.
//!
//! Detects the output width and color support from environment variables and
//! the terminal itself. Detection only: no styling is ever emitted here.

use std::env;
use std::io;

use crossterm::tty::IsTty;
use tracing::debug;

use crate::env::get_env;

/// Which standard output stream to probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputStream {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
}

/// Whether the given stream is attached to a terminal.
///
/// Redirected and piped streams are not terminals.
pub fn is_terminal(stream: OutputStream) -> bool {
    match stream {
        OutputStream::Stdout => io::stdout().is_tty(),
        OutputStream::Stderr => io::stderr().is_tty(),
    }
}

/// The output width budget in columns, `0` when unknown.
///
/// A `COLUMNS` environment override is honored first, then the terminal is
/// queried. A failed query (not a terminal, no size available) yields `0`,
/// which callers treat as "unbounded" rather than retrying.
pub fn output_width() -> usize {
    if let Ok(columns) = env::var("COLUMNS") {
        if let Ok(width) = columns.parse::<usize>() {
            if width > 0 {
                return width;
            }
        }
    }

    match crossterm::terminal::size() {
        Ok((columns, _rows)) => usize::from(columns),
        Err(_) => 0,
    }
}

/// Whether the given stream supports color output.
///
/// Always false for a non-terminal stream: color escapes in a piped or
/// redirected stream are useless bytes for whatever reads them. Otherwise
/// the usual environment conventions apply: `NO_COLOR` disables, a dumb
/// `TERM` disables, and any other terminal is assumed capable.
pub fn supports_color(stream: OutputStream) -> bool {
    if !is_terminal(stream) {
        return false;
    }
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    get_env("TERM", "") != "dumb"
}

/// Terminal configuration consumed by the renderer.
///
/// Computed once by the caller via [`RenderConfig::detect`] and passed
/// explicitly wherever rendering happens; there is no hidden process-wide
/// terminal state.
///
/// # Example
///
/// ```
/// use textgrid_terminal::RenderConfig;
///
/// let config = RenderConfig::new(80, false);
/// assert_eq!(config.width, 80);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Output width in columns, `0` when unknown.
    pub width: usize,
    /// Whether color output is supported on stdout.
    pub supports_color: bool,
}

impl RenderConfig {
    /// Create a configuration with explicit values.
    pub fn new(width: usize, supports_color: bool) -> Self {
        Self {
            width,
            supports_color,
        }
    }

    /// Detect the configuration for standard output.
    pub fn detect() -> Self {
        let config = Self {
            width: output_width(),
            supports_color: supports_color(OutputStream::Stdout),
        };
        debug!(
            width = config.width,
            supports_color = config.supports_color,
            "detected terminal configuration"
        );
        config
    }
}
