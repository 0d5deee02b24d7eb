use itertools::EitherOrBoth;

pub mod builtin;
pub use self::builtin::{predicate_for_type, JoinType};
mod selector;
pub use self::selector::Selector;
mod not;
pub use self::not::{not, Not};

/// The values a key maps to on each side of a join.
///
/// A key always comes from at least one of the two collections, so the
/// "absent on both sides" case cannot be expressed.
pub type Pair<'a, L, R> = EitherOrBoth<&'a L, &'a R>;

/// Decides whether a key takes part in the join result.
///
/// Implemented by [`JoinType`] (the built-in predicates), by [`Selector`],
/// by [`Not`] and by every `Fn(Pair<L, R>, &K) -> bool`.
pub trait JoinPredicate<K, L, R> {
    fn select(&self, pair: Pair<'_, L, R>, key: &K) -> bool;
}

impl<K, L, R, F> JoinPredicate<K, L, R> for F
    where F: for<'p> Fn(Pair<'p, L, R>, &'p K) -> bool,
{
    fn select(&self, pair: Pair<'_, L, R>, key: &K) -> bool {
        self(pair, key)
    }
}

/// Identity function that pins a closure to the predicate signature.
///
/// Closures handed directly to a generic `P: JoinPredicate` parameter don't get
/// their argument lifetimes inferred; routing them through here does.
///
/// ```
/// use mapjoin::predicate;
///
/// let only_x = predicate::<char, i32, i32, _>(|_, key| *key == 'x');
/// # let _ = only_x;
/// ```
pub fn predicate<K, L, R, F>(f: F) -> F
    where F: for<'p> Fn(Pair<'p, L, R>, &'p K) -> bool,
{
    f
}
