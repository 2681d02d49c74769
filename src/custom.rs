//! Caller-supplied custom colors.
//!
//! Custom colors are handed over raw, as 8-bit ids or as ready-made escape
//! sequences, and normalized into name -> code entries on first access.
//! Normalization runs once; afterwards the raw input is gone and the
//! normalized table never changes.

use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use std::sync::Mutex;

use crate::color::{ColorError, ESCAPE, id_to_code};
use crate::sync::lock_recover;

/// A raw custom color value, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CustomColorValue {
    /// An 8-bit color id, converted to an indexed code on normalization.
    Id(i64),
    /// A text value. Kept verbatim if it starts with the escape character,
    /// dropped otherwise.
    Code(String),
}

impl From<i64> for CustomColorValue {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<i32> for CustomColorValue {
    fn from(id: i32) -> Self {
        Self::Id(i64::from(id))
    }
}

impl From<u8> for CustomColorValue {
    fn from(id: u8) -> Self {
        Self::Id(i64::from(id))
    }
}

impl From<&str> for CustomColorValue {
    fn from(code: &str) -> Self {
        Self::Code(code.to_string())
    }
}

impl From<String> for CustomColorValue {
    fn from(code: String) -> Self {
        Self::Code(code)
    }
}

/// Custom color table with compute-once normalization.
///
/// # Thread Safety
///
/// The raw entries sit behind a mutex and are drained by whichever thread
/// normalizes first; every other access reads the finished table.
#[derive(Debug, Default)]
pub struct CustomColorTable {
    raw: Mutex<Vec<(String, CustomColorValue)>>,
    normalized: OnceCell<IndexMap<String, String>>,
}

impl CustomColorTable {
    /// Create a table from raw `(label, value)` entries, in insertion order.
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<CustomColorValue>,
    {
        let raw = entries
            .into_iter()
            .map(|(label, value)| (label.into(), value.into()))
            .collect();
        Self {
            raw: Mutex::new(raw),
            normalized: OnceCell::new(),
        }
    }

    /// The normalized table, keyed by uppercased name.
    ///
    /// The first call normalizes the raw input; later calls return the same
    /// table without recomputation.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::IdOutOfRange`] if a raw id is outside 0-255.
    /// The raw input is kept in that case, so the next access fails the same way.
    pub fn get(&self) -> Result<&IndexMap<String, String>, ColorError> {
        self.normalized.get_or_try_init(|| {
            let mut raw = lock_recover(&self.raw);
            let table = normalize(&raw)?;
            log::debug!(
                "normalized {} of {} custom colors",
                table.len(),
                raw.len()
            );
            raw.clear();
            raw.shrink_to_fit();
            Ok(table)
        })
    }

    /// Whether normalization has already run.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.normalized.get().is_some()
    }

    #[cfg(test)]
    fn pending(&self) -> usize {
        lock_recover(&self.raw).len()
    }
}

impl Clone for CustomColorTable {
    fn clone(&self) -> Self {
        Self {
            raw: Mutex::new(lock_recover(&self.raw).clone()),
            normalized: self.normalized.clone(),
        }
    }
}

fn normalize(
    raw: &[(String, CustomColorValue)],
) -> Result<IndexMap<String, String>, ColorError> {
    let mut table = IndexMap::with_capacity(raw.len());
    for (label, value) in raw {
        let code = match value {
            CustomColorValue::Id(id) => id_to_code(*id)?,
            CustomColorValue::Code(code) if code.starts_with(ESCAPE) => code.clone(),
            CustomColorValue::Code(code) => {
                log::debug!("dropping custom color {label:?}: {code:?} is not an escape sequence");
                continue;
            }
        };
        table.insert(label.to_uppercase(), code);
    }
    Ok(table)
}
