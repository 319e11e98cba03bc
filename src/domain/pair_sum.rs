use std::collections::HashMap;
use std::fmt;

/// Two values from a sequence that add up to a target.
///
/// `first` always sits at an earlier position than `second`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Pair {
    pub first: i64,
    pub second: i64,
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Numbers: {} and {}", self.first, self.second)
    }
}

/// Positions of a [`Pair`] in the scanned sequence, with `first < second`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PairPositions {
    pub first: usize,
    pub second: usize,
}

/// Finds the positions of the first pair, in scan order, whose values sum to `target`.
///
/// Scans once from left to right, keeping the first position seen for every value.
/// The pair returned is the one whose second element comes earliest; its first element
/// is the earliest occurrence of the complement.
///
/// Sequences with fewer than two elements simply yield `None`.
///
/// `target - value` is computed with checked arithmetic. If it overflows `i64` no
/// complement can exist for that element, so it is only recorded, never matched.
pub fn find_pair_positions(sequence: &[i64], target: i64) -> Option<PairPositions> {
    let mut first_seen: HashMap<i64, usize> = HashMap::with_capacity(sequence.len());

    for (i, &value) in sequence.iter().enumerate() {
        if let Some(complement) = target.checked_sub(value)
            && let Some(&first) = first_seen.get(&complement)
        {
            return Some(PairPositions { first, second: i });
        }

        first_seen.entry(value).or_insert(i);
    }

    None
}

/// Finds the first pair of values, in scan order, that sum to `target`.
///
/// See [`find_pair_positions`] for the selection rule.
pub fn find_pair(sequence: &[i64], target: i64) -> Option<Pair> {
    find_pair_positions(sequence, target).map(|positions| Pair {
        first: sequence[positions.first],
        second: sequence[positions.second],
    })
}
