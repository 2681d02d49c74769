//! Color specifiers: the ways a caller can ask for a color.

use std::fmt;

/// A requested color, before resolution to an escape code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ColorSpecifier {
    /// A color name, matched case-insensitively against default then custom colors.
    /// A well-formed named or indexed color code is also accepted and passed through.
    Name(String),
    /// An 8-bit color id; valid ids are 0-255.
    Id(i64),
    /// An id carried alongside a label. Only the id affects the resolved code.
    Labeled { label: String, id: i64 },
    /// No color requested: the colorizer picks a random one.
    #[default]
    Random,
}

impl ColorSpecifier {
    /// Build a specifier from a label-to-id mapping.
    ///
    /// The first entry wins and the rest are ignored. An empty mapping
    /// requests a random color.
    pub fn from_mapping<I, S>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        match mapping.into_iter().next() {
            Some((label, id)) => Self::Labeled {
                label: label.into(),
                id,
            },
            None => Self::Random,
        }
    }

    /// Whether this specifier asks for no particular color.
    ///
    /// True for [`ColorSpecifier::Random`], an empty name and id `0`.
    /// A labeled id is never absent, not even with id `0`.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Random => true,
            Self::Name(name) => name.is_empty(),
            Self::Id(id) => *id == 0,
            Self::Labeled { .. } => false,
        }
    }
}

impl fmt::Display for ColorSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{}", name.escape_debug()),
            Self::Id(id) => write!(f, "color({id})"),
            Self::Labeled { label, id } => write!(f, "{label}=color({id})"),
            Self::Random => write!(f, "random"),
        }
    }
}

impl From<&str> for ColorSpecifier {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ColorSpecifier {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&String> for ColorSpecifier {
    fn from(name: &String) -> Self {
        Self::Name(name.clone())
    }
}

impl From<i64> for ColorSpecifier {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<i32> for ColorSpecifier {
    fn from(id: i32) -> Self {
        Self::Id(i64::from(id))
    }
}

impl From<u8> for ColorSpecifier {
    fn from(id: u8) -> Self {
        Self::Id(i64::from(id))
    }
}

impl<S: Into<String>> From<(S, i64)> for ColorSpecifier {
    fn from((label, id): (S, i64)) -> Self {
        Self::Labeled {
            label: label.into(),
            id,
        }
    }
}

impl<T: Into<ColorSpecifier>> From<Option<T>> for ColorSpecifier {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Random, Into::into)
    }
}
