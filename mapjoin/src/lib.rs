#![deny(unsafe_code)]

//! Relational-style joins over two keyed collections.
//!
//! Both inputs are read-only maps sharing a key type. A join walks every key
//! of the left collection in order, then every right-only key in order, asks a
//! [`JoinPredicate`] whether the key belongs in the result and hands accepted
//! keys to a resolve function. Output is produced lazily, one element per
//! `next()`.
//!
//! ```
//! use mapjoin::{from_iterable, inner_join, CollisionPolicy};
//!
//! let left = from_iterable(vec![("a", 1), ("b", 2)], |x, _| x.0, CollisionPolicy::Reject).unwrap();
//! let right = from_iterable(vec![("a", 5), ("c", 9)], |x, _| x.0, CollisionPolicy::Reject).unwrap();
//!
//! let sums: Vec<_> = inner_join(&left, &right, |l, r, k| (*k, l.1 + r.1)).collect();
//! assert_eq!(sums, vec![("a", 6)]);
//! ```

pub mod collection;
pub mod predicate;
pub mod join;
mod error;
mod stream;

pub use collection::*;
pub use predicate::*;
pub use join::*;
pub use error::*;
pub use stream::*;
