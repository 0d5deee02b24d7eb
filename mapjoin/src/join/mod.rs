use std::iter::FusedIterator;

mod pairs;
pub use self::pairs::{pairs, Pairs};
mod resolve;
pub use self::resolve::{Resolve, LeftResolve, RightResolve, InnerResolve, LeftOuterResolve, RightOuterResolve};
mod named;
pub use self::named::*;
mod fallible;
pub use self::fallible::{try_join, TryJoin};

use crate::collection::KeyedCollection;
use crate::error::JoinError;
use crate::predicate::{JoinPredicate, Not, Pair, Selector};

/// Lazily joins two keyed collections.
///
/// Each call to `next` advances the two-pass scan until a key passes the
/// predicate and returns what the resolve function makes of it. Nothing is
/// buffered; dropping a partially consumed join is always fine.
pub struct Join<'a, LC, RC, P, F>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
{
    pairs: Pairs<'a, LC, RC>,
    select: P,
    resolve: F,
}

impl<'a, LC, RC, P, F> Join<'a, LC, RC, P, F>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
{
    fn new(left: &'a LC, right: &'a RC, select: P, resolve: F) -> Self {
        tracing::debug!(left = left.len(), right = right.len(), "starting join");
        Join { pairs: pairs(left, right), select, resolve }
    }
}

impl<'a, LC, RC, P, F> Iterator for Join<'a, LC, RC, P, F>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
          P: JoinPredicate<LC::Key, LC::Value, RC::Value>,
          F: Resolve<'a, LC::Key, LC::Value, RC::Value>,
{
    type Item = F::Output;

    fn next(&mut self) -> Option<Self::Item> {
        for (key, pair) in &mut self.pairs {
            if self.select.select(pair.clone(), key) {
                return Some(self.resolve.resolve(pair, key));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.pairs.size_hint().1)
    }
}

impl<'a, LC, RC, P, F> FusedIterator for Join<'a, LC, RC, P, F>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
          P: JoinPredicate<LC::Key, LC::Value, RC::Value>,
          F: Resolve<'a, LC::Key, LC::Value, RC::Value>,
{}

/// Join `left` and `right`, selecting keys with a named join type, a join
/// type name or a [`Selector`].
///
/// The selector is resolved before anything else happens: an unknown type
/// name fails here, not while iterating.
///
/// # Example
///
/// ```
/// use mapjoin::{join, JoinType, KeyedMap};
///
/// let left: KeyedMap<_, _> = vec![("a", 1), ("b", 2)].into_iter().collect();
/// let right: KeyedMap<_, _> = vec![("a", 5), ("c", 9)].into_iter().collect();
///
/// let keys: Vec<_> = join(&left, &right, "outer", |_, k| *k).unwrap().collect();
/// assert_eq!(keys, vec!["b", "c"]);
///
/// let keys: Vec<_> = join(&left, &right, JoinType::Full, |_, k| *k).unwrap().collect();
/// assert_eq!(keys, vec!["a", "b", "c"]);
///
/// assert!(join(&left, &right, "nope", |_, k| *k).is_err());
/// ```
pub fn join<'a, 'f, LC, RC, S, F, U>(left: &'a LC, right: &'a RC, select: S, resolve: F)
    -> Result<SelectorJoin<'a, 'f, LC, RC, F>, JoinError>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
          S: TryInto<Selector<'f, LC::Key, LC::Value, RC::Value>>,
          JoinError: From<S::Error>,
          F: FnMut(Pair<'a, LC::Value, RC::Value>, &'a LC::Key) -> U,
{
    let select = select.try_into()?;
    tracing::trace!(?select, "resolved selector");
    Ok(Join::new(left, right, select, resolve))
}

/// Join with a statically dispatched predicate.
///
/// Closures need [`predicate`](crate::predicate()) to be accepted here.
pub fn join_with<'a, LC, RC, P, F, U>(left: &'a LC, right: &'a RC, select: P, resolve: F) -> Join<'a, LC, RC, P, F>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
          P: JoinPredicate<LC::Key, LC::Value, RC::Value>,
          F: FnMut(Pair<'a, LC::Value, RC::Value>, &'a LC::Key) -> U,
{
    Join::new(left, right, select, resolve)
}

/// A join driven by a [`Selector`], as returned by [`join`].
pub type SelectorJoin<'a, 'f, LC, RC, F> = Join<'a, LC, RC, SelectorFor<'f, LC, RC>, F>;

type SelectorFor<'f, LC, RC> =
    Selector<'f, <LC as KeyedCollection>::Key, <LC as KeyedCollection>::Value, <RC as KeyedCollection>::Value>;

/// Resolve function of [`discarded`]: hands back each rejected key with its pair.
pub type Discard<'a, K, L, R> = fn(Pair<'a, L, R>, &'a K) -> (&'a K, Pair<'a, L, R>);

/// The join returned by [`discarded`].
pub type Discarded<'a, LC, RC, P> = Join<'a, LC, RC, Not<P>, DiscardFor<'a, LC, RC>>;

type DiscardFor<'a, LC, RC> =
    Discard<'a, <LC as KeyedCollection>::Key, <LC as KeyedCollection>::Value, <RC as KeyedCollection>::Value>;

/// The keys `select` rejects, with the values they map to.
pub fn discarded<'a, LC, RC, P>(left: &'a LC, right: &'a RC, select: P) -> Discarded<'a, LC, RC, P>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
          P: JoinPredicate<LC::Key, LC::Value, RC::Value>,
{
    let keep: DiscardFor<'a, LC, RC> = |pair, key| (key, pair);
    Join::new(left, right, Not(select), keep)
}

#[cfg(test)]
mod test {
    use std::cell::Cell;
    use itertools::EitherOrBoth::{Both, Left, Right};
    use crate::collection::KeyedMap;
    use crate::predicate::{predicate, JoinType};
    use super::*;

    type Sample = KeyedMap<&'static str, i32>;

    fn sample() -> (Sample, Sample) {
        (
            vec![("a", 1), ("b", 2)].into_iter().collect(),
            vec![("a", 5), ("c", 9)].into_iter().collect(),
        )
    }

    fn sum(pair: Pair<'_, i32, i32>, key: &&'static str) -> (&'static str, i32) {
        let value = match pair {
            Both(l, r) => l + r,
            Left(l) => *l,
            Right(r) => *r,
        };
        (*key, value)
    }

    fn run(t: JoinType) -> Vec<(&'static str, i32)> {
        let (left, right) = sample();
        join(&left, &right, t, sum).unwrap().collect()
    }

    #[test]
    fn test_inner() {
        assert_eq!(vec![("a", 6)], run(JoinType::Inner));
    }

    #[test]
    fn test_full() {
        assert_eq!(vec![("a", 6), ("b", 2), ("c", 9)], run(JoinType::Full));
    }

    #[test]
    fn test_outer() {
        assert_eq!(vec![("b", 2), ("c", 9)], run(JoinType::Outer));
    }

    #[test]
    fn test_left_and_right() {
        assert_eq!(vec![("a", 6), ("b", 2)], run(JoinType::Left));
        assert_eq!(vec![("a", 6), ("c", 9)], run(JoinType::Right));
        assert_eq!(vec![("b", 2)], run(JoinType::LeftOuter));
        assert_eq!(vec![("c", 9)], run(JoinType::RightOuter));
    }

    #[test]
    fn test_by_name() {
        let (left, right) = sample();
        let out: Vec<_> = join(&left, &right, "leftOuter", sum).unwrap().collect();
        assert_eq!(vec![("b", 2)], out);
    }

    #[test]
    fn test_unknown_name_fails_eagerly() {
        let (left, right) = sample();
        let resolved = Cell::new(0);
        let res = join(&left, &right, "nope", |_, _| resolved.set(resolved.get() + 1));
        assert_eq!(Some(JoinError::UnknownJoinType("nope".into())), res.err());
        assert_eq!(0, resolved.get());
    }

    #[test]
    fn test_custom_predicate_call_counts() {
        let left: KeyedMap<_, _> = vec![('a', 1), ('x', 2), ('b', 3)].into_iter().collect();
        let right: KeyedMap<_, _> = vec![('a', 4), ('c', 5)].into_iter().collect();
        let selected = Cell::new(0);
        let resolved = Cell::new(0);

        let select: Selector<'_, char, i32, i32> = Selector::predicate(|_, key| {
            selected.set(selected.get() + 1);
            *key == 'x'
        });
        let out: Vec<_> = join(&left, &right, select, |pair, key| {
            resolved.set(resolved.get() + 1);
            (*key, pair.clone().left().copied(), pair.right().copied())
        }).unwrap().collect();

        assert_eq!(vec![('x', Some(2), None)], out);
        assert_eq!(4, selected.get());
        assert_eq!(1, resolved.get());
    }

    #[test]
    fn test_predicate_and_resolve_see_same_pair() {
        let (left, right) = sample();
        let seen = std::cell::RefCell::new(Vec::new());
        let select: Selector<'_, &str, i32, i32> = Selector::predicate(|pair, key| {
            seen.borrow_mut().push((*key, pair.has_left(), pair.has_right()));
            true
        });
        let out: Vec<_> = join(&left, &right, select, |pair, key| (*key, pair.has_left(), pair.has_right()))
            .unwrap()
            .collect();
        assert_eq!(vec![("a", true, true), ("b", true, false), ("c", false, true)], out);
        assert_eq!(out, *seen.borrow());
    }

    #[test]
    fn test_lazy() {
        let (left, right) = sample();
        let resolved = Cell::new(0);
        let mut it = join(&left, &right, JoinType::Full, |_, k| {
            resolved.set(resolved.get() + 1);
            *k
        }).unwrap();
        assert_eq!(0, resolved.get());
        assert_eq!(Some("a"), it.next());
        assert_eq!(1, resolved.get());
        drop(it);
        assert_eq!(1, resolved.get());
    }

    #[test]
    fn test_recomputes_every_time() {
        let (left, right) = sample();
        let resolved = Cell::new(0);
        for _ in 0..2 {
            let n = join(&left, &right, JoinType::Inner, |_, _| resolved.set(resolved.get() + 1)).unwrap().count();
            assert_eq!(1, n);
        }
        assert_eq!(2, resolved.get());
    }

    #[test]
    fn test_resolve_borrows_inputs() {
        let left: KeyedMap<u32, String> = vec![(1, "one".to_string()), (2, "two".to_string())].into_iter().collect();
        let right: KeyedMap<u32, String> = vec![(2, "deux".to_string())].into_iter().collect();
        let out: Vec<(&str, Option<&str>)> = join_with(&left, &right, JoinType::Left, |pair, _| {
            (pair.clone().left().map(String::as_str).unwrap_or_default(), pair.right().map(String::as_str))
        }).collect();
        assert_eq!(vec![("one", None), ("two", Some("deux"))], out);
    }

    #[test]
    fn test_join_with_closure_and_not() {
        let (left, right) = sample();
        let big = predicate::<&str, i32, i32, _>(|pair, _| pair.reduce(|l, r| l.max(r)) > &4);
        let out: Vec<_> = join_with(&left, &right, &big, sum).collect();
        assert_eq!(vec![("a", 6), ("c", 9)], out);
        let out: Vec<_> = join_with(&left, &right, Not(&big), sum).collect();
        assert_eq!(vec![("b", 2)], out);
    }

    #[test]
    fn test_discarded() {
        let (left, right) = sample();
        let dropped: Vec<_> = discarded(&left, &right, JoinType::Inner).map(|(k, pair)| (*k, pair.is_left())).collect();
        assert_eq!(vec![("b", true), ("c", false)], dropped);
        assert_eq!(0, discarded(&left, &right, JoinType::Full).count());
    }

    #[test]
    fn test_size_hint_and_fuse() {
        let (left, right) = sample();
        let mut it = join_with(&left, &right, JoinType::Inner, sum);
        assert_eq!((0, Some(4)), it.size_hint());
        assert_eq!(Some(("a", 6)), it.next());
        assert_eq!(None, it.next());
        assert_eq!(None, it.next());
    }
}
