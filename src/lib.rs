//! Standalone solutions to introductory array interview problems.
//!
//! The centerpiece is [`arrays::two_sum`]: three interchangeable strategies
//! for locating the pair of positions in a sequence whose values sum to a
//! target, with the slower variants doubling as testing oracles for the
//! fast one.

pub mod arrays;

pub use arrays::contains_duplicate::contains_duplicate;
pub use arrays::longest_common_prefix::longest_common_prefix;
pub use arrays::two_sum::{
    two_sum, two_sum_brute_force, two_sum_sorted, IndexPair, TwoSumError,
};
