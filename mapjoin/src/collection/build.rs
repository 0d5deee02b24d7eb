use std::fmt::{self, Debug};
use std::hash::Hash;
use std::str::FromStr;
use indexmap::IndexMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{DuplicateKeyError, JoinError};

/// What to do when two elements produce the same key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "camelCase"))]
pub enum CollisionPolicy {
    /// Fail with [`DuplicateKeyError`].
    #[default]
    Reject,
    /// Keep the first element seen for the key.
    Ignore,
    /// Keep the last element seen for the key, at the first one's position.
    Override,
}

impl CollisionPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            CollisionPolicy::Reject => "reject",
            CollisionPolicy::Ignore => "ignore",
            CollisionPolicy::Override => "override",
        }
    }
}

impl FromStr for CollisionPolicy {
    type Err = JoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reject" => Ok(CollisionPolicy::Reject),
            "ignore" => Ok(CollisionPolicy::Ignore),
            "override" => Ok(CollisionPolicy::Override),
            other => Err(JoinError::UnknownCollisionPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collect `iterable` into an insertion-ordered map.
///
/// `key_fn` receives each element together with its zero-based position in
/// the input. Repeated keys are handled according to `policy`.
///
/// # Example
///
/// ```
/// use mapjoin::{from_iterable, CollisionPolicy};
///
/// let users = vec![(7, "alice"), (3, "bob")];
/// let map = from_iterable(users, |user, _| user.0, CollisionPolicy::Reject).unwrap();
/// assert_eq!(map[&3], (3, "bob"));
/// ```
pub fn from_iterable<I, K, F>(iterable: I, mut key_fn: F, policy: CollisionPolicy) -> Result<IndexMap<K, I::Item>, DuplicateKeyError<K>>
where
    I: IntoIterator,
    K: Hash + Eq + Debug,
    F: FnMut(&I::Item, usize) -> K,
{
    let iter = iterable.into_iter();
    let mut map: IndexMap<K, I::Item> = IndexMap::with_capacity(iter.size_hint().0);

    for (index, value) in iter.enumerate() {
        let key = key_fn(&value, index);
        let Some(slot) = map.get_index_of(&key) else {
            map.insert(key, value);
            continue;
        };
        match policy {
            CollisionPolicy::Reject => {
                tracing::debug!(index, "rejecting duplicate key");
                return Err(DuplicateKeyError { key, index });
            }
            CollisionPolicy::Ignore => {
                tracing::trace!(index, "ignoring duplicate key");
            }
            CollisionPolicy::Override => {
                tracing::trace!(index, "overriding duplicate key");
                map[slot] = value;
            }
        }
    }

    Ok(map)
}

/// `from_iterable` as a method on anything iterable.
pub trait KeyBy: IntoIterator + Sized {
    fn key_by<K, F>(self, key_fn: F, policy: CollisionPolicy) -> Result<IndexMap<K, Self::Item>, DuplicateKeyError<K>>
    where
        K: Hash + Eq + Debug,
        F: FnMut(&Self::Item, usize) -> K,
    {
        from_iterable(self, key_fn, policy)
    }
}

impl<I: IntoIterator> KeyBy for I {}
