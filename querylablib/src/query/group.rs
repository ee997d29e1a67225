//! Order-preserving grouping.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

/// A key with the elements that produced it, in source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grouping<K, T> {
    pub key: K,
    pub items: Vec<T>,
}

impl<K, T> Grouping<K, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

/// Partition `items` by `key`.
///
/// Groups come out in the order their key is first seen; elements keep
/// their source order inside a group. Apply again to a group's `items`
/// for nested grouping.
///
/// ```rust
/// use querylablib::query::group_by;
///
/// let groups = group_by(vec![3, 1, 4, 1, 5, 9, 2, 6], |n| n % 2 == 0);
/// assert_eq!(groups[0].key, false);
/// assert_eq!(groups[0].items, vec![3, 1, 1, 5, 9]);
/// assert_eq!(groups[1].items, vec![4, 2, 6]);
/// ```
pub fn group_by<I, T, K, F>(items: I, mut key: F) -> Vec<Grouping<K, T>>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut groups: Vec<Grouping<K, T>> = Vec::new();
    let mut positions: HashMap<K, usize> = HashMap::new();

    for item in items {
        let k = key(&item);
        match positions.get(&k) {
            Some(&idx) => groups[idx].items.push(item),
            None => {
                positions.insert(k.clone(), groups.len());
                groups.push(Grouping {
                    key: k,
                    items: vec![item],
                });
            }
        }
    }

    groups
}
