// file: src/filter/intersection.rs
// description: set intersection test over string lists
// reference: std::collections::HashSet

use std::collections::HashSet;

/// Returns true when at least one string appears in both lists.
/// Comparison is exact and case sensitive.
pub fn has_intersection<A, B>(left: &[A], right: &[B]) -> bool
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    if left.len() <= right.len() {
        shares_item(left, right)
    } else {
        shares_item(right, left)
    }
}

fn shares_item<S, L>(small: &[S], large: &[L]) -> bool
where
    S: AsRef<str>,
    L: AsRef<str>,
{
    if small.is_empty() {
        return false;
    }

    let seen: HashSet<&str> = small.iter().map(AsRef::as_ref).collect();
    large.iter().any(|item| seen.contains(item.as_ref()))
}
