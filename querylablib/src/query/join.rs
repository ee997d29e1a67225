//! Equality joins over two slices.
//!
//! Both joins hash the right side once by key, then walk the left side in
//! order, so output order is left order first and right order within a key.

use std::collections::HashMap;
use std::hash::Hash;

/// Index the right side by key, keeping source order inside each bucket.
fn build_lookup<'a, R, K, RK>(right: &'a [R], right_key: RK) -> HashMap<K, Vec<&'a R>>
where
    K: Eq + Hash,
    RK: Fn(&'a R) -> K,
{
    let mut lookup: HashMap<K, Vec<&'a R>> = HashMap::new();
    for item in right {
        lookup.entry(right_key(item)).or_default().push(item);
    }
    lookup
}

/// Pair every left element with every right element sharing its key.
///
/// Elements without a partner on the other side are dropped.
///
/// ```rust
/// use querylablib::query::inner_join;
///
/// let left = [("a", 1), ("b", 2)];
/// let right = [(1, "x"), (1, "y"), (3, "z")];
/// let pairs = inner_join(&left, &right, |l| l.1, |r| r.0, |l, r| (l.0, r.1));
/// assert_eq!(pairs, vec![("a", "x"), ("a", "y")]);
/// ```
pub fn inner_join<'a, L, R, K, LK, RK, O, F>(
    left: &'a [L],
    right: &'a [R],
    left_key: LK,
    right_key: RK,
    mut select: F,
) -> Vec<O>
where
    K: Eq + Hash,
    LK: Fn(&'a L) -> K,
    RK: Fn(&'a R) -> K,
    F: FnMut(&'a L, &'a R) -> O,
{
    let lookup = build_lookup(right, right_key);
    let mut out = Vec::new();
    for item in left {
        if let Some(matches) = lookup.get(&left_key(item)) {
            for &partner in matches {
                out.push(select(item, partner));
            }
        }
    }
    out
}

/// Pair every left element with the set of right elements sharing its key.
///
/// Produces exactly one row per left element; the set may be empty.
pub fn group_join<'a, L, R, K, LK, RK, O, F>(
    left: &'a [L],
    right: &'a [R],
    left_key: LK,
    right_key: RK,
    mut select: F,
) -> Vec<O>
where
    K: Eq + Hash,
    LK: Fn(&'a L) -> K,
    RK: Fn(&'a R) -> K,
    F: FnMut(&'a L, Vec<&'a R>) -> O,
{
    let lookup = build_lookup(right, right_key);
    left.iter()
        .map(|item| {
            let matches = lookup.get(&left_key(item)).cloned().unwrap_or_default();
            select(item, matches)
        })
        .collect()
}
