//! Processed element variants

pub mod dense;
pub mod node;
pub mod relation;
pub mod way;

pub use node::*;
pub use relation::*;
pub use way::*;

pub mod common {
    use indexmap::IndexMap;
    use std::ops::Deref;

    use crate::error::FormatError;
    use crate::osm::model;
    use crate::osm::primitive::{PrimitiveScope, StringTable, Timestamp};

    /// Running sum over delta-coded values, starting from zero.
    pub fn undelta<T: Copy + Into<i64>>(
        field: &'static str,
        deltas: &[T],
    ) -> Result<Vec<i64>, FormatError> {
        deltas
            .iter()
            .scan(0i64, |acc, &delta| {
                let raw: i64 = delta.into();
                Some(match acc.checked_add(raw) {
                    Some(sum) => {
                        *acc = sum;
                        Ok(sum)
                    }
                    None => Err(FormatError::Overflow { field, raw }),
                })
            })
            .collect()
    }

    #[inline]
    pub(crate) fn ensure_len(
        field: &'static str,
        expected: usize,
        found: usize,
    ) -> Result<(), FormatError> {
        if expected == found {
            Ok(())
        } else {
            Err(FormatError::LengthMismatch {
                field,
                expected,
                found,
            })
        }
    }

    /// Tag keys and values of an element, in the order they were written.
    ///
    /// Keys are unique: a key repeated within one element fails with
    /// [`FormatError::DuplicateTag`] rather than losing a value.
    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    pub struct Tags(IndexMap<String, String>);

    impl Tags {
        pub fn new(map: IndexMap<String, String>) -> Self {
            Tags(map)
        }

        /// Recovers the strings at each `(KeyIndex, ValueIndex)` pair.
        /// Every index must resolve; tags are never optional.
        pub fn resolve(
            pairs: impl Iterator<Item = (i64, i64)>,
            strings: &StringTable,
        ) -> Result<Self, FormatError> {
            let mut tags: IndexMap<String, String> = IndexMap::new();
            for (k, v) in pairs {
                let key = strings.require(k)?;
                if tags.contains_key(key) {
                    return Err(FormatError::DuplicateTag(key.to_owned()));
                }
                tags.insert(key.to_owned(), strings.require(v)?.to_owned());
            }

            Ok(Tags(tags))
        }

        /// Tags stored as the parallel `keys` and `vals` arrays of plain
        /// nodes, ways and relations.
        pub fn from_parallel(
            keys: &[u32],
            vals: &[u32],
            strings: &StringTable,
        ) -> Result<Self, FormatError> {
            ensure_len("vals", keys.len(), vals.len())?;
            Tags::resolve(
                keys.iter()
                    .zip(vals.iter())
                    .map(|(&k, &v)| (i64::from(k), i64::from(v))),
                strings,
            )
        }

        pub fn get(&self, key: &str) -> Option<&str> {
            self.0.get(key).map(String::as_str)
        }
    }

    impl Deref for Tags {
        type Target = IndexMap<String, String>;

        fn deref(&self) -> &Self::Target {
            &self.0
        }
    }

    /// Edit metadata of an element, with the user name resolved.
    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    pub struct Meta {
        pub version: Option<i32>,
        pub timestamp: Option<Timestamp>,
        pub changeset: Option<i64>,
        pub uid: Option<i64>,
        pub user: Option<String>,
        pub visible: Option<bool>,
    }

    impl Meta {
        pub fn from_info(info: &model::Info, scope: &PrimitiveScope) -> Result<Self, FormatError> {
            Ok(Meta {
                version: info.version,
                timestamp: scope.context.decode_timestamp(info.timestamp)?,
                changeset: info.changeset,
                uid: info.uid.map(i64::from),
                user: info
                    .user_sid
                    .and_then(|sid| scope.strings.get(i64::from(sid)))
                    .map(str::to_owned),
                visible: info.visible,
            })
        }

        /// Resolves the optional `Info` of a plain element, honouring
        /// whether the scope decodes metadata at all.
        pub(crate) fn resolve(
            info: Option<&model::Info>,
            scope: &PrimitiveScope,
        ) -> Result<Option<Self>, FormatError> {
            info.filter(|_| scope.metadata)
                .map(|info| Meta::from_info(info, scope))
                .transpose()
        }
    }
}

pub use common::*;
