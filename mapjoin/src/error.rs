use std::convert::Infallible;
use std::fmt::Debug;

/// Errors raised while setting up a join.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JoinError {
    /// A join type name outside of the seven known types.
    #[error("unexpected join type: {0}")]
    UnknownJoinType(String),

    /// A collision policy name other than `reject`, `ignore` or `override`.
    #[error("unexpected collision policy: {0}")]
    UnknownCollisionPolicy(String),
}

impl From<Infallible> for JoinError {
    fn from(x: Infallible) -> Self {
        match x {}
    }
}

/// A key was produced twice while building a collection with
/// [`CollisionPolicy::Reject`](crate::CollisionPolicy::Reject).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("key {key:?} already exists (repeated at index {index})")]
pub struct DuplicateKeyError<K: Debug> {
    /// The offending key.
    pub key: K,
    /// Position of the element that repeated the key.
    pub index: usize,
}
