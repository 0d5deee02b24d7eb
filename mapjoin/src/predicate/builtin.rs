//! The seven built-in join predicates.
//!
//! Each one only looks at which sides are present; the key and the values
//! themselves never matter.

use std::fmt;
use std::str::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{JoinPredicate, Pair, Selector};
use crate::error::JoinError;

pub fn left(has_left: bool, _has_right: bool) -> bool {
    has_left
}

pub fn right(_has_left: bool, has_right: bool) -> bool {
    has_right
}

pub fn inner(has_left: bool, has_right: bool) -> bool {
    has_left && has_right
}

pub fn outer(has_left: bool, has_right: bool) -> bool {
    has_left != has_right
}

/// Union. Always true for pairs produced by a join.
pub fn full(has_left: bool, has_right: bool) -> bool {
    has_left || has_right
}

pub fn left_outer(has_left: bool, has_right: bool) -> bool {
    has_left && !has_right
}

pub fn right_outer(has_left: bool, has_right: bool) -> bool {
    has_right && !has_left
}

/// Named join types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "camelCase"))]
pub enum JoinType {
    /// Every key of the left collection.
    Left,
    /// Every key of the right collection.
    Right,
    /// Keys present in both collections.
    Inner,
    /// Keys present in exactly one collection.
    Outer,
    /// Every key of either collection.
    Full,
    /// Keys present only in the left collection.
    LeftOuter,
    /// Keys present only in the right collection.
    RightOuter,
}

impl JoinType {
    pub const ALL: [JoinType; 7] = [
        JoinType::Left,
        JoinType::Right,
        JoinType::Inner,
        JoinType::Outer,
        JoinType::Full,
        JoinType::LeftOuter,
        JoinType::RightOuter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            JoinType::Left => "left",
            JoinType::Right => "right",
            JoinType::Inner => "inner",
            JoinType::Outer => "outer",
            JoinType::Full => "full",
            JoinType::LeftOuter => "leftOuter",
            JoinType::RightOuter => "rightOuter",
        }
    }

    pub fn predicate(self) -> fn(bool, bool) -> bool {
        match self {
            JoinType::Left => left,
            JoinType::Right => right,
            JoinType::Inner => inner,
            JoinType::Outer => outer,
            JoinType::Full => full,
            JoinType::LeftOuter => left_outer,
            JoinType::RightOuter => right_outer,
        }
    }

    pub fn includes(self, has_left: bool, has_right: bool) -> bool {
        (self.predicate())(has_left, has_right)
    }

    /// The join type selecting exactly the keys this one rejects.
    ///
    /// `Full` has none: it rejects nothing, and no named type selects nothing.
    pub fn complement(self) -> Option<JoinType> {
        match self {
            JoinType::Left => Some(JoinType::RightOuter),
            JoinType::Right => Some(JoinType::LeftOuter),
            JoinType::Inner => Some(JoinType::Outer),
            JoinType::Outer => Some(JoinType::Inner),
            JoinType::Full => None,
            JoinType::LeftOuter => Some(JoinType::Right),
            JoinType::RightOuter => Some(JoinType::Left),
        }
    }

    /// Negation as a selector: the complementary type if there is one, a
    /// predicate that never matches for `Full`.
    pub fn negate<'f, K: 'f, L: 'f, R: 'f>(self) -> Selector<'f, K, L, R> {
        match self.complement() {
            Some(complement) => Selector::Type(complement),
            None => Selector::predicate(|_, _| false),
        }
    }
}

impl FromStr for JoinType {
    type Err = JoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JoinType::ALL.iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| JoinError::UnknownJoinType(s.to_string()))
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<K, L, R> JoinPredicate<K, L, R> for JoinType {
    fn select(&self, pair: Pair<'_, L, R>, _key: &K) -> bool {
        self.includes(pair.has_left(), pair.has_right())
    }
}

/// Look up the built-in predicate for a join type name.
pub fn predicate_for_type(name: &str) -> Result<fn(bool, bool) -> bool, JoinError> {
    Ok(name.parse::<JoinType>()?.predicate())
}

#[cfg(test)]
mod test {
    use itertools::EitherOrBoth::{Both, Left, Right};
    use super::*;

    const BOTH: (bool, bool) = (true, true);
    const LEFT_ONLY: (bool, bool) = (true, false);
    const RIGHT_ONLY: (bool, bool) = (false, true);

    fn table(t: JoinType) -> [bool; 3] {
        [BOTH, LEFT_ONLY, RIGHT_ONLY].map(|(l, r)| t.includes(l, r))
    }

    #[test]
    fn test_truth_table() {
        //                                      both   left   right
        assert_eq!(table(JoinType::Left),       [true,  true,  false]);
        assert_eq!(table(JoinType::Right),      [true,  false, true]);
        assert_eq!(table(JoinType::Inner),      [true,  false, false]);
        assert_eq!(table(JoinType::Outer),      [false, true,  true]);
        assert_eq!(table(JoinType::Full),       [true,  true,  true]);
        assert_eq!(table(JoinType::LeftOuter),  [false, true,  false]);
        assert_eq!(table(JoinType::RightOuter), [false, false, true]);
    }

    #[test]
    fn test_complement_is_negation() {
        for t in JoinType::ALL {
            let negated = t.complement().map(table).unwrap_or([false; 3]);
            let expected = table(t).map(|x| !x);
            assert_eq!(expected, negated, "{t}");
        }
    }

    #[test]
    fn test_complement_is_involution() {
        for t in JoinType::ALL.into_iter().filter(|&t| t != JoinType::Full) {
            assert_eq!(Some(t), t.complement().and_then(JoinType::complement));
        }
    }

    #[test]
    fn test_select_ignores_key_and_values() {
        let (a, b) = (1, "x");
        assert!(JoinPredicate::<u8, _, _>::select(&JoinType::Inner, Both(&a, &b), &0));
        assert!(!JoinPredicate::<u8, _, &str>::select(&JoinType::Inner, Left(&a), &0));
        assert!(JoinPredicate::<u8, i32, _>::select(&JoinType::RightOuter, Right(&b), &9));
    }

    #[test]
    fn test_names() {
        for t in JoinType::ALL {
            assert_eq!(Ok(t), t.as_str().parse::<JoinType>());
        }
        assert_eq!("leftOuter", JoinType::LeftOuter.to_string());
        assert_eq!(Err(JoinError::UnknownJoinType("nope".into())), "nope".parse::<JoinType>());
        assert_eq!(Err(JoinError::UnknownJoinType("Inner".into())), "Inner".parse::<JoinType>());
    }

    #[test]
    fn test_predicate_for_type() {
        let select = predicate_for_type("leftOuter").unwrap();
        assert!(select(true, false));
        assert!(!select(true, true));
        assert!(predicate_for_type("sideways").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_names() {
        assert_eq!("\"rightOuter\"", serde_json::to_string(&JoinType::RightOuter).unwrap());
        assert_eq!(JoinType::Full, serde_json::from_str::<JoinType>("\"full\"").unwrap());
        assert!(serde_json::from_str::<JoinType>("\"nope\"").is_err());
    }
}
