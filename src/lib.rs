//! # colorizer
//!
//! Wrap text in ANSI escape sequences so that terminal emulators render it
//! in color, optionally bold, with an automatic reset at the end.
//!
//! ## Quick Start
//!
//! ```rust
//! use colorizer::prelude::*;
//!
//! let colorizer = Colorizer::builder()
//!     .custom_color("light_pink", 210)
//!     .build();
//!
//! let warning = colorizer.colorize("Warning: Low disk space", "yellow", false).unwrap();
//! assert_eq!(warning, "\x1b[93mWarning: Low disk space\x1b[0m");
//!
//! let pink = colorizer.colorize("hi", "light_pink", false).unwrap();
//! assert_eq!(pink, "\x1b[38;5;210mhi\x1b[0m");
//! ```
//!
//! ## Core Concepts
//!
//! - **Colorizer**: Resolves color specifiers and wraps text
//! - **ColorSpecifier**: A color name, an 8-bit id, a labeled id, or "random"
//! - **CustomColorTable**: Caller-supplied colors, normalized once on first use
//! - **ColorLogger**: A `log` backend that colors level labels

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod colorizer;
pub mod custom;
pub mod logging;
pub mod specifier;
pub mod sync;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::color::{
        ColorError, CUSTOM_COLOR_PREFIX, DEFAULT_COLOR_CODES, RESET_COLOR_CODE, id_to_code,
        make_bold, random_color,
    };
    pub use crate::colorizer::{Colorizer, ColorizerBuilder, PrintError, PrintOptions};
    pub use crate::custom::{CustomColorTable, CustomColorValue};
    pub use crate::logging::ColorLogger;
    pub use crate::specifier::ColorSpecifier;
}

// Re-export key types at crate root
pub use color::ColorError;
pub use colorizer::{Colorizer, ColorizerBuilder, PrintError, PrintOptions};
pub use custom::CustomColorValue;
pub use specifier::ColorSpecifier;
