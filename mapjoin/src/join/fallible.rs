use std::iter::FusedIterator;

use super::{pairs, Pairs};
use crate::collection::KeyedCollection;
use crate::predicate::Pair;

/// A join whose predicate and resolve function can fail.
///
/// Yields `Ok` for every resolved key. The first error coming out of either
/// function is yielded as is and ends the join; there is no way to continue
/// past it.
pub struct TryJoin<'a, LC, RC, P, F>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
{
    pairs: Pairs<'a, LC, RC>,
    select: P,
    resolve: F,
}

/// Join with a fallible predicate and resolve function.
///
/// ```
/// use mapjoin::{try_join, KeyedMap};
///
/// let left: KeyedMap<_, _> = vec![(1, "1"), (2, "two")].into_iter().collect();
/// let right: KeyedMap<_, _> = vec![(1, "10")].into_iter().collect();
///
/// let mut it = try_join(&left, &right, |_, _| Ok(true), |pair, _| {
///     pair.left().copied().unwrap_or("0").parse::<i32>()
/// });
/// assert_eq!(Some(Ok(1)), it.next());
/// assert!(matches!(it.next(), Some(Err(_))));
/// assert_eq!(None, it.next());
/// ```
pub fn try_join<'a, LC, RC, P, F, U, E>(left: &'a LC, right: &'a RC, select: P, resolve: F) -> TryJoin<'a, LC, RC, P, F>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
          P: FnMut(Pair<'a, LC::Value, RC::Value>, &'a LC::Key) -> Result<bool, E>,
          F: FnMut(Pair<'a, LC::Value, RC::Value>, &'a LC::Key) -> Result<U, E>,
{
    tracing::debug!(left = left.len(), right = right.len(), "starting fallible join");
    TryJoin { pairs: pairs(left, right), select, resolve }
}

impl<'a, LC, RC, P, F, U, E> Iterator for TryJoin<'a, LC, RC, P, F>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
          P: FnMut(Pair<'a, LC::Value, RC::Value>, &'a LC::Key) -> Result<bool, E>,
          F: FnMut(Pair<'a, LC::Value, RC::Value>, &'a LC::Key) -> Result<U, E>,
{
    type Item = Result<U, E>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((key, pair)) = self.pairs.next() {
            let outcome = match (self.select)(pair.clone(), key) {
                Ok(false) => continue,
                Ok(true) => (self.resolve)(pair, key),
                Err(e) => Err(e),
            };
            if outcome.is_err() {
                tracing::trace!("join stopped by caller error");
                self.pairs.finish();
            }
            return Some(outcome);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.pairs.size_hint().1)
    }
}

impl<'a, LC, RC, P, F, U, E> FusedIterator for TryJoin<'a, LC, RC, P, F>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
          P: FnMut(Pair<'a, LC::Value, RC::Value>, &'a LC::Key) -> Result<bool, E>,
          F: FnMut(Pair<'a, LC::Value, RC::Value>, &'a LC::Key) -> Result<U, E>,
{}
