use itertools::EitherOrBoth::{Both, Left, Right};

use crate::predicate::Pair;

/// Turns an accepted key and its values into an output element.
///
/// Every `FnMut(Pair<L, R>, &K) -> U` is a `Resolve`. The other implementors
/// adapt resolve functions with narrower signatures for joins where one side
/// is known to be present.
pub trait Resolve<'a, K: 'a, L: 'a, R: 'a> {
    type Output;

    fn resolve(&mut self, pair: Pair<'a, L, R>, key: &'a K) -> Self::Output;
}

impl<'a, K: 'a, L: 'a, R: 'a, F, U> Resolve<'a, K, L, R> for F
    where F: FnMut(Pair<'a, L, R>, &'a K) -> U,
{
    type Output = U;

    fn resolve(&mut self, pair: Pair<'a, L, R>, key: &'a K) -> U {
        self(pair, key)
    }
}

/// Resolve for joins that only accept keys present on the left.
#[derive(Clone)]
pub struct LeftResolve<F>(pub F);

impl<'a, K: 'a, L: 'a, R: 'a, F, U> Resolve<'a, K, L, R> for LeftResolve<F>
    where F: FnMut(&'a L, Option<&'a R>, &'a K) -> U,
{
    type Output = U;

    fn resolve(&mut self, pair: Pair<'a, L, R>, key: &'a K) -> U {
        match pair {
            Both(l, r) => (self.0)(l, Some(r), key),
            Left(l) => (self.0)(l, None, key),
            Right(_) => unreachable!("right-only key accepted by a left join"),
        }
    }
}

/// Resolve for joins that only accept keys present on the right.
#[derive(Clone)]
pub struct RightResolve<F>(pub F);

impl<'a, K: 'a, L: 'a, R: 'a, F, U> Resolve<'a, K, L, R> for RightResolve<F>
    where F: FnMut(Option<&'a L>, &'a R, &'a K) -> U,
{
    type Output = U;

    fn resolve(&mut self, pair: Pair<'a, L, R>, key: &'a K) -> U {
        match pair {
            Both(l, r) => (self.0)(Some(l), r, key),
            Right(r) => (self.0)(None, r, key),
            Left(_) => unreachable!("left-only key accepted by a right join"),
        }
    }
}

#[derive(Clone)]
pub struct InnerResolve<F>(pub F);

impl<'a, K: 'a, L: 'a, R: 'a, F, U> Resolve<'a, K, L, R> for InnerResolve<F>
    where F: FnMut(&'a L, &'a R, &'a K) -> U,
{
    type Output = U;

    fn resolve(&mut self, pair: Pair<'a, L, R>, key: &'a K) -> U {
        match pair {
            Both(l, r) => (self.0)(l, r, key),
            _ => unreachable!("one-sided key accepted by an inner join"),
        }
    }
}

#[derive(Clone)]
pub struct LeftOuterResolve<F>(pub F);

impl<'a, K: 'a, L: 'a, R: 'a, F, U> Resolve<'a, K, L, R> for LeftOuterResolve<F>
    where F: FnMut(&'a L, &'a K) -> U,
{
    type Output = U;

    fn resolve(&mut self, pair: Pair<'a, L, R>, key: &'a K) -> U {
        match pair {
            Left(l) => (self.0)(l, key),
            _ => unreachable!("key with a right value accepted by a left outer join"),
        }
    }
}

#[derive(Clone)]
pub struct RightOuterResolve<F>(pub F);

impl<'a, K: 'a, L: 'a, R: 'a, F, U> Resolve<'a, K, L, R> for RightOuterResolve<F>
    where F: FnMut(&'a R, &'a K) -> U,
{
    type Output = U;

    fn resolve(&mut self, pair: Pair<'a, L, R>, key: &'a K) -> U {
        match pair {
            Right(r) => (self.0)(r, key),
            _ => unreachable!("key with a left value accepted by a right outer join"),
        }
    }
}
