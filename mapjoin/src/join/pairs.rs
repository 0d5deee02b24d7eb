use std::iter::FusedIterator;
use itertools::EitherOrBoth::{Both, Left, Right};

use crate::collection::KeyedCollection;
use crate::predicate::Pair;

/// Every key of two collections, exactly once, with the values it maps to.
///
/// Keys of the left collection come first, in left order, paired with the
/// right value if the right collection has one. Keys found only in the right
/// collection follow, in right order. Keys present in both are never seen a
/// second time.
pub struct Pairs<'a, LC, RC>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
{
    left: &'a LC,
    right: &'a RC,
    left_entries: LC::Iter<'a>,
    right_entries: RC::Iter<'a>,
    phase: Phase,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Left,
    Right,
    Done,
}

/// Walk the keys of `left` and `right` in join order.
pub fn pairs<'a, LC, RC>(left: &'a LC, right: &'a RC) -> Pairs<'a, LC, RC>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
{
    Pairs {
        left,
        right,
        left_entries: left.entries(),
        right_entries: right.entries(),
        phase: Phase::Left,
    }
}

impl<'a, LC, RC> Pairs<'a, LC, RC>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
{
    /// Skip everything that is left; the cursor only returns `None` from now on.
    pub(super) fn finish(&mut self) {
        self.phase = Phase::Done;
    }
}

impl<'a, LC, RC> Iterator for Pairs<'a, LC, RC>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
{
    type Item = (&'a LC::Key, Pair<'a, LC::Value, RC::Value>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.phase {
                Phase::Left => match self.left_entries.next() {
                    Some((key, l)) => {
                        let pair = match self.right.lookup(key) {
                            Some(r) => Both(l, r),
                            None => Left(l),
                        };
                        return Some((key, pair));
                    }
                    None => {
                        tracing::trace!("left pass exhausted");
                        self.phase = Phase::Right;
                    }
                },
                Phase::Right => match self.right_entries.next() {
                    // matched or not, keys of the left collection were decided in the left pass
                    Some((key, _)) if self.left.contains_key(key) => {}
                    Some((key, r)) => return Some((key, Right(r))),
                    None => self.phase = Phase::Done,
                },
                Phase::Done => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.phase {
            Phase::Left => {
                let (lower, left_upper) = self.left_entries.size_hint();
                let (_, right_upper) = self.right_entries.size_hint();
                let upper = left_upper.zip(right_upper).and_then(|(l, r)| l.checked_add(r));
                (lower, upper)
            }
            Phase::Right => (0, self.right_entries.size_hint().1),
            Phase::Done => (0, Some(0)),
        }
    }
}

impl<'a, LC, RC> FusedIterator for Pairs<'a, LC, RC>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
{}
