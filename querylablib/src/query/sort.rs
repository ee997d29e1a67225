//! Stable multi-key sorting.

use std::cmp::Ordering;

use super::options::OrderDirection;

type Comparator<'f, T> = Box<dyn Fn(&T, &T) -> Ordering + 'f>;

/// An ordered list of sort keys, each with its own direction.
///
/// Keys are compared in the order they were added; later keys only break
/// ties left by earlier ones. Elements equal under every key keep their
/// source order.
///
/// ```rust
/// use querylablib::query::{OrderDirection, SortSpec};
///
/// let mut rows = vec![(1, 'b'), (2, 'a'), (1, 'a')];
/// SortSpec::new()
///     .then_by(|r: &(i32, char)| r.0, OrderDirection::Descending)
///     .then_with(|a: &(i32, char), b: &(i32, char)| a.1.cmp(&b.1), OrderDirection::Ascending)
///     .sort(&mut rows);
/// assert_eq!(rows, vec![(2, 'a'), (1, 'a'), (1, 'b')]);
/// ```
pub struct SortSpec<'f, T> {
    keys: Vec<Comparator<'f, T>>,
}

impl<'f, T> Default for SortSpec<'f, T> {
    fn default() -> Self {
        Self { keys: Vec::new() }
    }
}

impl<'f, T> SortSpec<'f, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key extracted by `key`, compared with `Ord`.
    pub fn then_by<K, F>(mut self, key: F, direction: OrderDirection) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'f,
    {
        self.keys
            .push(Box::new(move |a, b| direction.apply(key(a).cmp(&key(b)))));
        self
    }

    /// Add a floating point key, compared with `f64::total_cmp`.
    pub fn then_by_float<F>(mut self, key: F, direction: OrderDirection) -> Self
    where
        F: Fn(&T) -> f64 + 'f,
    {
        self.keys.push(Box::new(move |a, b| {
            direction.apply(key(a).total_cmp(&key(b)))
        }));
        self
    }

    /// Add a key given directly as an ascending comparator.
    pub fn then_with<F>(mut self, compare: F, direction: OrderDirection) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'f,
    {
        self.keys
            .push(Box::new(move |a, b| direction.apply(compare(a, b))));
        self
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Compare two elements key by key.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.keys
            .iter()
            .map(|cmp| cmp(a, b))
            .find(|o| *o != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }

    /// Sort in place (stable).
    pub fn sort(&self, items: &mut [T]) {
        items.sort_by(|a, b| self.compare(a, b));
    }

    /// Sort an owned vector and return it.
    pub fn sorted(&self, mut items: Vec<T>) -> Vec<T> {
        self.sort(&mut items);
        items
    }
}
