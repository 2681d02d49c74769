//! Color codes for terminal rendering.
//!
//! This module holds the fixed tables and pure transforms the colorizer is
//! built from:
//! - 7 named foreground colors (bright ANSI variants)
//! - 8-bit indexed colors (`ESC[38;5;<id>m`, id in 0-255)
//! - Bold conversion and the reset sequence
//!
//! # Examples
//!
//! ```
//! use colorizer::color::{id_to_code, make_bold, default_color_code};
//!
//! assert_eq!(default_color_code("red"), Some("\x1b[91m"));
//! assert_eq!(id_to_code(210).unwrap(), "\x1b[38;5;210m");
//! assert_eq!(make_bold("\x1b[91m"), "\x1b[1;91m");
//! assert!(id_to_code(256).is_err());
//! ```

use rand::Rng;
use regex::Regex;
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

/// Escape sequence that restores default terminal rendering.
pub const RESET_COLOR_CODE: &str = "\x1b[0m";

/// Prefix shared by all 8-bit indexed color codes.
pub const CUSTOM_COLOR_PREFIX: &str = "\x1b[38;5;";

/// Escape character every well-formed color code starts with.
pub const ESCAPE: char = '\x1b';

/// Ids accepted for 8-bit indexed colors.
pub const VALID_ID_RANGE: RangeInclusive<i64> = 0..=255;

/// Named default colors, in display order.
pub static DEFAULT_COLOR_CODES: [(&str, &str); 7] = [
    ("RED", "\x1b[91m"),
    ("GREEN", "\x1b[92m"),
    ("BLUE", "\x1b[94m"),
    ("YELLOW", "\x1b[93m"),
    ("MAGENTA", "\x1b[95m"),
    ("CYAN", "\x1b[96m"),
    ("WHITE", "\x1b[97m"),
];

/// Look up one of the default colors by name (case-insensitive).
#[must_use]
pub fn default_color_code(name: &str) -> Option<&'static str> {
    let upper = name.to_uppercase();
    DEFAULT_COLOR_CODES
        .iter()
        .find(|(default_name, _)| *default_name == upper)
        .map(|(_, code)| *code)
}

/// Build the indexed color code for an 8-bit color id.
///
/// # Errors
///
/// Returns [`ColorError::IdOutOfRange`] when `id` is outside 0-255. This is
/// never suppressed, not even by a colorizer that ignores unknown names.
pub fn id_to_code(id: i64) -> Result<String, ColorError> {
    if VALID_ID_RANGE.contains(&id) {
        Ok(format!("{CUSTOM_COLOR_PREFIX}{id}m"))
    } else {
        Err(ColorError::IdOutOfRange(id))
    }
}

/// Make a color code bold by inserting `1;` after its first `[`.
///
/// Codes without a `[` (including the empty code) are returned unchanged.
#[must_use]
pub fn make_bold(code: &str) -> String {
    code.replacen('[', "[1;", 1)
}

/// Pick a uniformly random indexed color code, id in 0-255 inclusive.
///
/// Draws from the thread-local generator, so concurrent callers never
/// contend on a shared lock.
#[must_use]
pub fn random_color() -> String {
    let id: u8 = rand::rng().random_range(0..=u8::MAX);
    log::trace!("picked random color id {id}");
    format!("{CUSTOM_COLOR_PREFIX}{id}m")
}

/// Extract the id from an indexed color code (bold or not).
///
/// Returns `None` for named codes, the empty code, and malformed input.
#[must_use]
pub fn indexed_id(code: &str) -> Option<u8> {
    static INDEXED_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^\x1b\[(?:1;)?38;5;(\d{1,3})m$").expect("valid regex"));

    INDEXED_RE
        .captures(code)
        .and_then(|caps| caps[1].parse::<u8>().ok())
}

/// Error type for color resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// An 8-bit color id outside 0-255.
    IdOutOfRange(i64),
    /// A name found in neither the default nor the custom colors.
    UnknownColor(String),
    /// A specifier that cannot be resolved to a code, i.e. the random marker.
    UnsupportedSpecifier,
}

impl ColorError {
    /// Whether this is an invalid color code (bad id or unknown name),
    /// as opposed to a caller handing over an unresolvable specifier.
    #[must_use]
    pub const fn is_invalid_color_code(&self) -> bool {
        matches!(self, Self::IdOutOfRange(_) | Self::UnknownColor(_))
    }
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdOutOfRange(id) => write!(
                f,
                "Invalid color code {id}: color id must be an integer between 0 and 255"
            ),
            Self::UnknownColor(name) => write!(f, "Invalid color code: unknown color {name:?}"),
            Self::UnsupportedSpecifier => {
                write!(f, "color must be a string or mapping")
            }
        }
    }
}

impl std::error::Error for ColorError {}
