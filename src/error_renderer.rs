//! Human-readable rendering of view errors using miette
//!
//! Renders a [`ViewError`] with its diagnostic code and help text, in the
//! same report style used for terminal output elsewhere.

use crate::ViewError;
use miette::{GraphicalReportHandler, GraphicalTheme, ThemeCharacters, ThemeStyles};
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The character set to use for rendering.
    pub charset: CharSet,
    /// Column at which long messages wrap.
    pub width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig {
    const fn default() -> Self {
        Self {
            color: true,
            charset: CharSet::Unicode,
            width: 80,
        }
    }

    fn theme(&self) -> GraphicalTheme {
        let characters = match self.charset {
            CharSet::Unicode => ThemeCharacters::unicode(),
            CharSet::Ascii => ThemeCharacters::ascii(),
        };
        let styles = if self.color {
            ThemeStyles::rgb()
        } else {
            ThemeStyles::none()
        };
        GraphicalTheme { characters, styles }
    }
}

/// Render an error to stderr using the default config.
///
/// # Example
/// ```no_run
/// use sliceview::{FrozenView, SliceArgs, render_error};
///
/// let data = vec![1, 2, 3];
/// if let Err(e) = FrozenView::new(&data, SliceArgs::full().step(0)) {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &ViewError) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use sliceview::{RenderConfig, ViewError, render_error_to};
///
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&ViewError::InvalidStep, &mut buf, &config).unwrap();
/// assert!(String::from_utf8_lossy(&buf).contains("slice step cannot be zero"));
/// ```
pub fn render_error_to(
    error: &ViewError,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let handler = GraphicalReportHandler::new_themed(config.theme())
        .with_width(config.width)
        .with_links(false);

    let mut out = String::new();
    handler
        .render_report(&mut out, error)
        .map_err(|_| std::io::Error::other("failed to format diagnostic"))?;
    writer.write_all(out.as_bytes())
}
