use std::cmp::Ordering;
use std::collections::HashMap;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TwoSumError {
    #[error("no pair of elements sums to the target")]
    NoSolution,
}

type Error = TwoSumError;
type Result<T> = std::result::Result<T, Error>;

/// A pair of positions into the searched sequence, normalized so that
/// `first` is the smaller of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexPair {
    pub first: usize,
    pub second: usize,
}

impl IndexPair {
    pub fn new(a: usize, b: usize) -> Self {
        if a < b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }
}

/// Finds two positions in `nums` whose values sum to `target`.
///
/// Single left-to-right pass keeping a map from each seen value to its
/// first position. For the value at position `i` the map is probed for the
/// complement `target - nums[i]`; a hit at `j` completes the pair, and
/// `j < i` holds since `j` was inserted on an earlier iteration.
///
/// O(n) time, O(n) auxiliary space. Returns [`TwoSumError::NoSolution`]
/// when no pair exists or the input has fewer than two elements.
pub fn two_sum(nums: &[i32], target: i32) -> Result<IndexPair> {
    let mut num_by_diff: HashMap<i32, usize> = HashMap::with_capacity(nums.len());

    for (i, &n) in nums.iter().enumerate() {
        let diff = target - n;

        match num_by_diff.get(&diff) {
            Some(&j) => return Ok(IndexPair::new(j, i)),
            // or_insert keeps the first position of a repeated value
            None => num_by_diff.entry(n).or_insert(i),
        };
    }

    Err(Error::NoSolution)
}

/// Checks every pair of distinct positions `(i, j)` with `i < j`, returning
/// the first match in lexicographic order of `(i, j)`.
///
/// O(n^2) time, no auxiliary storage. Slow but obviously correct, which
/// makes it the reference oracle for the other strategies.
pub fn two_sum_brute_force(nums: &[i32], target: i32) -> Result<IndexPair> {
    for i in 0..nums.len() {
        for j in i + 1..nums.len() {
            if nums[i] + nums[j] == target {
                return Ok(IndexPair::new(i, j));
            }
        }
    }

    Err(Error::NoSolution)
}

/// Sorts a copy of `nums` paired with original positions, then converges a
/// two-pointer scan from both ends: a sum below the target advances the low
/// pointer, a sum above it retreats the high pointer.
///
/// The input is never mutated, and the returned positions are positions
/// into the original sequence, normalized ascending. Sorting by
/// `(value, position)` keeps the result deterministic when values repeat.
///
/// O(n log n) time dominated by the sort, O(n) auxiliary space.
pub fn two_sum_sorted(nums: &[i32], target: i32) -> Result<IndexPair> {
    if nums.len() < 2 {
        return Err(Error::NoSolution);
    }

    let mut indexed: Vec<(i32, usize)> = nums.iter().enumerate().map(|(i, &n)| (n, i)).collect();
    indexed.sort_unstable();

    let mut low = 0;
    let mut high = indexed.len() - 1;

    while low < high {
        match (indexed[low].0 + indexed[high].0).cmp(&target) {
            Ordering::Less => low += 1,
            Ordering::Greater => high -= 1,
            Ordering::Equal => return Ok(IndexPair::new(indexed[low].1, indexed[high].1)),
        };
    }

    Err(Error::NoSolution)
}
