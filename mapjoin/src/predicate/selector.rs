use std::fmt;
use std::rc::Rc;

use super::{JoinPredicate, JoinType, Pair};
use crate::error::JoinError;

/// Either a named join type or a caller-supplied predicate.
///
/// This is what [`join`](crate::join()) dispatches on. Named types convert
/// with `From`, type names with `TryFrom<&str>`, closures with
/// [`Selector::predicate`].
pub enum Selector<'f, K, L, R> {
    Type(JoinType),
    Predicate(Rc<dyn for<'p> Fn(Pair<'p, L, R>, &'p K) -> bool + 'f>),
}

impl<'f, K, L, R> Selector<'f, K, L, R> {
    pub fn predicate<F>(f: F) -> Self
        where F: for<'p> Fn(Pair<'p, L, R>, &'p K) -> bool + 'f,
    {
        Selector::Predicate(Rc::new(f))
    }

    pub fn join_type(&self) -> Option<JoinType> {
        match self {
            Selector::Type(t) => Some(*t),
            Selector::Predicate(_) => None,
        }
    }
}

impl<'f, K, L, R> JoinPredicate<K, L, R> for Selector<'f, K, L, R> {
    fn select(&self, pair: Pair<'_, L, R>, key: &K) -> bool {
        match self {
            Selector::Type(t) => t.includes(pair.has_left(), pair.has_right()),
            Selector::Predicate(p) => p(pair, key),
        }
    }
}

impl<'f, K, L, R> Clone for Selector<'f, K, L, R> {
    fn clone(&self) -> Self {
        match self {
            Selector::Type(t) => Selector::Type(*t),
            Selector::Predicate(p) => Selector::Predicate(Rc::clone(p)),
        }
    }
}

impl<'f, K, L, R> fmt::Debug for Selector<'f, K, L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Type(t) => f.debug_tuple("Type").field(t).finish(),
            Selector::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl<'f, K, L, R> From<JoinType> for Selector<'f, K, L, R> {
    fn from(t: JoinType) -> Self {
        Selector::Type(t)
    }
}

impl<'s, 'f, K, L, R> TryFrom<&'s str> for Selector<'f, K, L, R> {
    type Error = JoinError;

    fn try_from(name: &'s str) -> Result<Self, Self::Error> {
        Ok(Selector::Type(name.parse()?))
    }
}
