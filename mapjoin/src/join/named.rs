//! One entry point per join type.
//!
//! Each of these behaves exactly like [`join`](super::join()) with the
//! corresponding [`JoinType`], but hands the resolve function only the values
//! that are guaranteed to exist for that join type.

use super::{Join, LeftResolve, RightResolve, InnerResolve, LeftOuterResolve, RightOuterResolve};
use crate::collection::KeyedCollection;
use crate::predicate::{JoinType, Pair};

/// All keys of `left`. `resolve(left, right?, key)`.
pub fn left_join<'a, LC, RC, F, U>(left: &'a LC, right: &'a RC, resolve: F) -> Join<'a, LC, RC, JoinType, LeftResolve<F>>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
          F: FnMut(&'a LC::Value, Option<&'a RC::Value>, &'a LC::Key) -> U,
{
    Join::new(left, right, JoinType::Left, LeftResolve(resolve))
}

/// All keys of `right`. `resolve(left?, right, key)`.
pub fn right_join<'a, LC, RC, F, U>(left: &'a LC, right: &'a RC, resolve: F) -> Join<'a, LC, RC, JoinType, RightResolve<F>>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
          F: FnMut(Option<&'a LC::Value>, &'a RC::Value, &'a LC::Key) -> U,
{
    Join::new(left, right, JoinType::Right, RightResolve(resolve))
}

/// Keys present in both. `resolve(left, right, key)`.
pub fn inner_join<'a, LC, RC, F, U>(left: &'a LC, right: &'a RC, resolve: F) -> Join<'a, LC, RC, JoinType, InnerResolve<F>>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
          F: FnMut(&'a LC::Value, &'a RC::Value, &'a LC::Key) -> U,
{
    Join::new(left, right, JoinType::Inner, InnerResolve(resolve))
}

/// Keys present on exactly one side.
pub fn outer_join<'a, LC, RC, F, U>(left: &'a LC, right: &'a RC, resolve: F) -> Join<'a, LC, RC, JoinType, F>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
          F: FnMut(Pair<'a, LC::Value, RC::Value>, &'a LC::Key) -> U,
{
    Join::new(left, right, JoinType::Outer, resolve)
}

/// Every key of either side.
pub fn full_join<'a, LC, RC, F, U>(left: &'a LC, right: &'a RC, resolve: F) -> Join<'a, LC, RC, JoinType, F>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
          F: FnMut(Pair<'a, LC::Value, RC::Value>, &'a LC::Key) -> U,
{
    Join::new(left, right, JoinType::Full, resolve)
}

/// Keys only `left` has. `resolve(left, key)`.
pub fn left_outer_join<'a, LC, RC, F, U>(left: &'a LC, right: &'a RC, resolve: F) -> Join<'a, LC, RC, JoinType, LeftOuterResolve<F>>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
          F: FnMut(&'a LC::Value, &'a LC::Key) -> U,
{
    Join::new(left, right, JoinType::LeftOuter, LeftOuterResolve(resolve))
}

/// Keys only `right` has. `resolve(right, key)`.
pub fn right_outer_join<'a, LC, RC, F, U>(left: &'a LC, right: &'a RC, resolve: F) -> Join<'a, LC, RC, JoinType, RightOuterResolve<F>>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
          F: FnMut(&'a RC::Value, &'a LC::Key) -> U,
{
    Join::new(left, right, JoinType::RightOuter, RightOuterResolve(resolve))
}
