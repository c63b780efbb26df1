//! The per-block string table.

use crate::error::FormatError;
use crate::osm::model;

/// Interned strings of a single `PrimitiveBlock`.
///
/// Index `0` is the reserved delimiter used by dense tag streams and
/// never resolves to a value, even though the table stores an entry there.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StringTable(Vec<String>);

impl StringTable {
    pub fn from_raw(table: &model::StringTable) -> Self {
        StringTable(
            table
                .s
                .iter()
                .map(|raw| String::from_utf8_lossy(raw).into_owned())
                .collect(),
        )
    }

    /// Looks up a string by its index, returning `None` for the reserved
    /// index and for anything outside the table.
    #[inline]
    pub fn get(&self, index: i64) -> Option<&str> {
        if index <= 0 {
            return None;
        }

        usize::try_from(index)
            .ok()
            .and_then(|index| self.0.get(index))
            .map(String::as_str)
    }

    /// Like [`StringTable::get`], for references that must resolve.
    #[inline]
    pub fn require(&self, index: i64) -> Result<&str, FormatError> {
        self.get(index).ok_or(FormatError::MissingString { index })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StringTable {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        StringTable(iter.into_iter().map(Into::into).collect())
    }
}
