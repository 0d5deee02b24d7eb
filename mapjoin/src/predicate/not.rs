use std::ops;

use super::{JoinPredicate, Pair, Selector};

/// Logical negation of a statically known predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<K, L, R, P: JoinPredicate<K, L, R>> JoinPredicate<K, L, R> for Not<P> {
    fn select(&self, pair: Pair<'_, L, R>, key: &K) -> bool {
        !self.0.select(pair, key)
    }
}

/// Named types become their complementary type where one exists; `Full` and
/// custom predicates become a negating predicate.
impl<'f, K: 'f, L: 'f, R: 'f> ops::Not for Selector<'f, K, L, R> {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Selector::Type(t) => t.negate(),
            Selector::Predicate(p) => Selector::predicate(move |pair, key| !p(pair, key)),
        }
    }
}

/// Negate a selector. Same as `!selector`.
pub fn not<'f, K: 'f, L: 'f, R: 'f>(selector: Selector<'f, K, L, R>) -> Selector<'f, K, L, R> {
    !selector
}
