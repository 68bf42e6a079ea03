// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Combine operators for range folds.
//!
//! A combine operator must be associative. It need not be commutative:
//! the tree always passes the operand covering lower indices as `left`.

use std::ops::Add;

/// An associative operator folding two aggregates into one.
pub trait Combine<T> {
    /// Fold `left` and `right`, where `left` covers the lower indices.
    fn combine(&self, left: &T, right: &T) -> T;
}

impl<T, F> Combine<T> for F
where
    F: Fn(&T, &T) -> T,
{
    fn combine(&self, left: &T, right: &T) -> T {
        return self(left, right);
    }
}

/// Sum aggregate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sum;

impl<T: Add<Output = T> + Clone> Combine<T> for Sum {
    fn combine(&self, left: &T, right: &T) -> T {
        return left.clone() + right.clone();
    }
}

/// Minimum aggregate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Min;

impl<T: Ord + Clone> Combine<T> for Min {
    fn combine(&self, left: &T, right: &T) -> T {
        return left.min(right).clone();
    }
}

/// Maximum aggregate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Max;

impl<T: Ord + Clone> Combine<T> for Max {
    fn combine(&self, left: &T, right: &T) -> T {
        return left.max(right).clone();
    }
}

/// Concatenation, the usual non-commutative operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Concat;

impl Combine<String> for Concat {
    fn combine(&self, left: &String, right: &String) -> String {
        let mut out = String::with_capacity(left.len() + right.len());
        out.push_str(left);
        out.push_str(right);
        return out;
    }
}

impl<U: Clone> Combine<Vec<U>> for Concat {
    fn combine(&self, left: &Vec<U>, right: &Vec<U>) -> Vec<U> {
        let mut out = Vec::with_capacity(left.len() + right.len());
        out.extend_from_slice(left);
        out.extend_from_slice(right);
        return out;
    }
}
