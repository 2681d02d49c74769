//! Colorizer - resolves color specifiers and wraps text in escape codes.
//!
//! Names are looked up in the default colors first, then in the custom
//! colors given at construction. Ids are turned into 8-bit indexed codes.
//! A missing specifier picks a random 8-bit color.

use std::fmt;
use std::io::{self, Write};

use indexmap::IndexMap;

use crate::color::{
    ColorError, DEFAULT_COLOR_CODES, RESET_COLOR_CODE, default_color_code, id_to_code,
    indexed_id, make_bold, random_color,
};
use crate::custom::{CustomColorTable, CustomColorValue};
use crate::specifier::ColorSpecifier;

/// Options passed through to the output stream when printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// String to append after the colorized text.
    pub end: String,
    /// Flush the writer after printing.
    pub flush: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl PrintOptions {
    /// Create new print options with defaults (trailing newline, no flush).
    #[must_use]
    pub fn new() -> Self {
        Self {
            end: String::from("\n"),
            flush: false,
        }
    }

    /// Print options that suppress the trailing newline.
    #[must_use]
    pub fn no_newline() -> Self {
        Self::new().with_end("")
    }

    /// Set the string appended after the text.
    #[must_use]
    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = end.into();
        self
    }

    /// Enable or disable flushing after each print.
    #[must_use]
    pub fn with_flush(mut self, flush: bool) -> Self {
        self.flush = flush;
        self
    }
}

/// Error returned by the printing operations.
#[derive(Debug)]
pub enum PrintError {
    /// The requested color could not be resolved.
    Color(ColorError),
    /// Writing to the output failed.
    Io(io::Error),
}

impl fmt::Display for PrintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "Failed to write colorized output: {err}"),
        }
    }
}

impl std::error::Error for PrintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Color(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<ColorError> for PrintError {
    fn from(err: ColorError) -> Self {
        Self::Color(err)
    }
}

impl From<io::Error> for PrintError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Wraps text in ANSI color escape sequences.
///
/// # Thread Safety
///
/// `Colorizer` is `Send + Sync`. Custom colors are normalized once, by the
/// first thread that needs them, and are read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Colorizer {
    custom_colors: CustomColorTable,
    ignore_invalid_colors: bool,
}

impl Colorizer {
    /// Create a colorizer with only the default colors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a colorizer with custom colors, failing on unknown names.
    pub fn with_custom_colors<I, K, V>(custom_colors: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<CustomColorValue>,
    {
        Self::builder().custom_colors(custom_colors).build()
    }

    /// Create a builder for custom configuration.
    #[must_use]
    pub fn builder() -> ColorizerBuilder {
        ColorizerBuilder::new()
    }

    /// Whether unknown color names resolve to the empty code instead of failing.
    #[must_use]
    pub const fn ignore_invalid_colors(&self) -> bool {
        self.ignore_invalid_colors
    }

    /// The normalized custom colors, keyed by uppercased name.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::IdOutOfRange`] if a custom id is outside 0-255.
    pub fn custom_colors(&self) -> Result<&IndexMap<String, String>, ColorError> {
        self.custom_colors.get()
    }

    /// Whether the custom colors have been normalized yet.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.custom_colors.is_normalized()
    }

    /// Names of all loaded colors: the defaults in fixed order, then the
    /// custom colors in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::IdOutOfRange`] if a custom id is outside 0-255.
    pub fn all_loaded_colors(&self) -> Result<Vec<String>, ColorError> {
        let custom = self.custom_colors()?;
        let mut names = Vec::with_capacity(DEFAULT_COLOR_CODES.len() + custom.len());
        names.extend(DEFAULT_COLOR_CODES.iter().map(|(name, _)| (*name).to_string()));
        names.extend(custom.keys().cloned());
        Ok(names)
    }

    /// Resolve a specifier to its escape code.
    ///
    /// - Labeled ids resolve to the indexed code for the id; the label is ignored.
    /// - Ids resolve to their indexed code, which is then passed back through
    ///   the name lookup (a pass-through, since well-formed codes resolve to
    ///   themselves).
    /// - Names are looked up case-insensitively in the default colors, then the
    ///   custom colors.
    ///
    /// # Errors
    ///
    /// - [`ColorError::IdOutOfRange`] for ids outside 0-255, regardless of
    ///   [`ignore_invalid_colors`](Self::ignore_invalid_colors)
    /// - [`ColorError::UnknownColor`] for unknown names, unless invalid colors
    ///   are ignored, in which case the empty code is returned
    /// - [`ColorError::UnsupportedSpecifier`] for [`ColorSpecifier::Random`],
    ///   which only [`colorize`](Self::colorize) knows how to handle
    pub fn resolve_color(&self, specifier: &ColorSpecifier) -> Result<String, ColorError> {
        match specifier {
            ColorSpecifier::Labeled { id, .. } => id_to_code(*id),
            ColorSpecifier::Id(id) => {
                let code = id_to_code(*id)?;
                self.resolve_name(&code)
            }
            ColorSpecifier::Name(name) => self.resolve_name(name),
            ColorSpecifier::Random => Err(ColorError::UnsupportedSpecifier),
        }
    }

    fn resolve_name(&self, name: &str) -> Result<String, ColorError> {
        if is_color_code(name) {
            return Ok(name.to_string());
        }

        if let Some(code) = default_color_code(name) {
            return Ok(code.to_string());
        }

        if let Some(code) = self.custom_colors()?.get(&name.to_uppercase()) {
            return Ok(code.clone());
        }

        if self.ignore_invalid_colors {
            log::debug!("ignoring unknown color {name:?}");
            Ok(String::new())
        } else {
            Err(ColorError::UnknownColor(name.to_string()))
        }
    }

    /// Wrap `text` in the code for `color`, followed by the reset code.
    ///
    /// An absent color (random marker, empty name or id `0`) picks a random
    /// 8-bit color. With `bold`, `1;` is inserted after the code's first `[`.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`resolve_color`](Self::resolve_color).
    pub fn colorize(
        &self,
        text: &str,
        color: impl Into<ColorSpecifier>,
        bold: bool,
    ) -> Result<String, ColorError> {
        let color = color.into();
        let mut code = if color.is_absent() {
            random_color()
        } else {
            self.resolve_color(&color)?
        };

        if bold {
            code = make_bold(&code);
        }

        Ok(format!("{code}{text}{RESET_COLOR_CODE}"))
    }

    /// Wrap `text` in a random 8-bit color, followed by the reset code.
    #[must_use]
    pub fn colorize_random(&self, text: &str, bold: bool) -> String {
        let code = random_color();
        let code = if bold { make_bold(&code) } else { code };
        format!("{code}{text}{RESET_COLOR_CODE}")
    }

    /// Print colorized text to stdout.
    ///
    /// # Errors
    ///
    /// Returns [`PrintError::Color`] if the color cannot be resolved (nothing
    /// is printed then) and [`PrintError::Io`] if writing fails.
    pub fn print_colorized(
        &self,
        text: &str,
        color: impl Into<ColorSpecifier>,
        bold: bool,
        options: &PrintOptions,
    ) -> Result<(), PrintError> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.print_colorized_to(&mut lock, text, color, bold, options)
    }

    /// Print colorized text to a writer.
    ///
    /// # Errors
    ///
    /// Same as [`print_colorized`](Self::print_colorized).
    pub fn print_colorized_to<W: Write>(
        &self,
        writer: &mut W,
        text: &str,
        color: impl Into<ColorSpecifier>,
        bold: bool,
        options: &PrintOptions,
    ) -> Result<(), PrintError> {
        let colored = self.colorize(text, color, bold)?;
        writer.write_all(colored.as_bytes())?;
        writer.write_all(options.end.as_bytes())?;
        if options.flush {
            writer.flush()?;
        }
        Ok(())
    }

    /// Print every loaded color name to stdout, each in its own color.
    ///
    /// # Errors
    ///
    /// Returns [`PrintError::Color`] if the custom colors fail to normalize
    /// and [`PrintError::Io`] if writing fails.
    pub fn print_available_colors(&self) -> Result<(), PrintError> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.print_available_colors_to(&mut lock)
    }

    /// Print every loaded color name to a writer, each in its own color.
    ///
    /// # Errors
    ///
    /// Same as [`print_available_colors`](Self::print_available_colors).
    pub fn print_available_colors_to<W: Write>(&self, writer: &mut W) -> Result<(), PrintError> {
        writeln!(writer, "All Available Colors: ")?;
        let options = PrintOptions::new();
        for name in self.all_loaded_colors()? {
            self.print_colorized_to(writer, &name, name.as_str(), false, &options)?;
        }
        Ok(())
    }
}

/// Whether `name` is already a well-formed color code (named or indexed).
fn is_color_code(name: &str) -> bool {
    indexed_id(name).is_some() || DEFAULT_COLOR_CODES.iter().any(|(_, code)| *code == name)
}

/// Builder for creating a [`Colorizer`] with custom options.
#[derive(Debug, Clone, Default)]
pub struct ColorizerBuilder {
    custom_colors: Vec<(String, CustomColorValue)>,
    ignore_invalid_colors: bool,
}

impl ColorizerBuilder {
    /// Create a new builder with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one custom color.
    #[must_use]
    pub fn custom_color(
        mut self,
        name: impl Into<String>,
        value: impl Into<CustomColorValue>,
    ) -> Self {
        self.custom_colors.push((name.into(), value.into()));
        self
    }

    /// Add several custom colors, in order.
    #[must_use]
    pub fn custom_colors<I, K, V>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<CustomColorValue>,
    {
        self.custom_colors
            .extend(colors.into_iter().map(|(name, value)| (name.into(), value.into())));
        self
    }

    /// Resolve unknown names to the empty code instead of failing.
    #[must_use]
    pub fn ignore_invalid_colors(mut self, ignore: bool) -> Self {
        self.ignore_invalid_colors = ignore;
        self
    }

    /// Build the colorizer.
    #[must_use]
    pub fn build(self) -> Colorizer {
        Colorizer {
            custom_colors: CustomColorTable::new(self.custom_colors),
            ignore_invalid_colors: self.ignore_invalid_colors,
        }
    }
}
