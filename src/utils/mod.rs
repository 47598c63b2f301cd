//! Various unsorted geometrical and logical operators.

pub use self::sorted_pair::SortedPair;

pub mod hashmap;
mod sorted_pair;
