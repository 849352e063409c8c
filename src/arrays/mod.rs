pub mod contains_duplicate;
pub mod longest_common_prefix;
pub mod two_sum;
