use std::convert::Infallible;
use futures::{Async, Future, Poll, Stream};

use crate::collection::KeyedCollection;
use crate::join::{Join, TryJoin};

/// A join driven through `futures::Stream`.
///
/// Joins never wait on anything, so polling always returns `Ready`.
pub struct JoinStream<I>(I);

impl<I: Iterator> Stream for JoinStream<I> {
    type Item = I::Item;
    type Error = Infallible;

    fn poll(&mut self) -> Poll<Option<Self::Item>, Self::Error> {
        Ok(Async::Ready(self.0.next()))
    }
}

/// A fallible join driven through `futures::Stream`; its errors become the
/// stream's errors.
pub struct TryJoinStream<I>(I);

impl<I, T, E> Stream for TryJoinStream<I>
    where I: Iterator<Item = Result<T, E>>,
{
    type Item = T;
    type Error = E;

    fn poll(&mut self) -> Poll<Option<Self::Item>, Self::Error> {
        match self.0.next() {
            Some(Ok(item)) => Ok(Async::Ready(Some(item))),
            Some(Err(e)) => Err(e),
            None => Ok(Async::Ready(None)),
        }
    }
}

impl<'a, LC, RC, P, F> Join<'a, LC, RC, P, F>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
{
    pub fn into_stream(self) -> JoinStream<Self> {
        JoinStream(self)
    }
}

impl<'a, LC, RC, P, F> TryJoin<'a, LC, RC, P, F>
    where LC: KeyedCollection + 'a,
          RC: KeyedCollection<Key = LC::Key> + 'a,
{
    pub fn into_stream(self) -> TryJoinStream<Self> {
        TryJoinStream(self)
    }
}

pub trait NowOrNever: Future {
    fn now_or_never(self) -> Option<Self::Item>;
}

impl<F: Future<Error = Infallible>> NowOrNever for F {
    fn now_or_never(mut self) -> Option<Self::Item> {
        match self.poll() {
            Ok(Async::Ready(item)) => Some(item),
            Ok(Async::NotReady) => None,
            Err(x) => match x {},
        }
    }
}
