//! Pair-sum checks over a slice of integers.
//!
//! Every function here compares an element only against elements at other
//! positions, so a lone `3` never pairs with itself for a target of `6`.
//! Sums are exact: when `target - value` does not fit in an `i64`, no
//! partner for `value` can exist.

use crate::domain::model::{MatchMode, Pair};
use std::collections::{HashMap, HashSet};

/// Returns `true` if two distinct positions of `sequence` hold values summing to `target`.
///
/// Single pass with a seen-set: each value is looked up against the values
/// before it, then recorded.
pub fn has_pair_summing_to(sequence: &[i64], target: i64) -> bool {
    let mut seen: HashSet<i64> = HashSet::with_capacity(sequence.len());

    for &value in sequence {
        if let Some(complement) = target.checked_sub(value) {
            if seen.contains(&complement) {
                return true;
            }
        }
        seen.insert(value);
    }

    false
}

/// Returns the pair with the smallest possible second index, matched with the
/// earliest position holding the complement.
pub fn first_pair(sequence: &[i64], target: i64) -> Option<Pair> {
    let mut first_seen: HashMap<i64, usize> = HashMap::with_capacity(sequence.len());

    for (index, &value) in sequence.iter().enumerate() {
        if let Some(complement) = target.checked_sub(value) {
            if let Some(&earlier) = first_seen.get(&complement) {
                return Some(Pair {
                    first_index: earlier,
                    second_index: index,
                    first_value: complement,
                    second_value: value,
                });
            }
        }
        first_seen.entry(value).or_insert(index);
    }

    None
}

/// Returns every pair `i < j` summing to `target`, ordered by `j` then `i`.
pub fn find_pairs(sequence: &[i64], target: i64) -> Vec<Pair> {
    let mut positions: HashMap<i64, Vec<usize>> = HashMap::with_capacity(sequence.len());
    let mut pairs = Vec::new();

    for (index, &value) in sequence.iter().enumerate() {
        if let Some(complement) = target.checked_sub(value) {
            if let Some(earlier) = positions.get(&complement) {
                pairs.extend(earlier.iter().map(|&first_index| Pair {
                    first_index,
                    second_index: index,
                    first_value: complement,
                    second_value: value,
                }));
            }
        }
        positions.entry(value).or_default().push(index);
    }

    pairs
}

/// Counts the positions whose value has a partner at some other position.
pub fn match_count(sequence: &[i64], target: i64) -> usize {
    let mut occurrences: HashMap<i64, usize> = HashMap::with_capacity(sequence.len());
    for &value in sequence {
        *occurrences.entry(value).or_insert(0) += 1;
    }

    sequence
        .iter()
        .filter(|&&value| {
            let Some(complement) = target.checked_sub(value) else {
                return false;
            };
            // 與自身相同的補數需要出現在另一個位置
            let needed = if complement == value { 2 } else { 1 };
            occurrences.get(&complement).copied().unwrap_or(0) >= needed
        })
        .count()
}

/// Evaluates `sequence` against `target` under the given mode.
pub fn check(sequence: &[i64], target: i64, mode: MatchMode) -> bool {
    match mode {
        MatchMode::Exists => has_pair_summing_to(sequence, target),
        MatchMode::EvenMatchCount => {
            let count = match_count(sequence, target);
            count > 0 && count % 2 == 0
        }
    }
}
