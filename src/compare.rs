//! Orderings used to arrange values in a [`Tree`][crate::Tree].
//!
//! Any `Fn(&T, &T) -> Ordering` is a [`Compare`], so a custom order is usually
//! just a closure:
//!
//! ```
//! use ascii_bst::Tree;
//!
//! let mut tree = Tree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
//! tree.insert(1);
//! tree.insert(3);
//! tree.insert(2);
//!
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
//! ```

use std::cmp::Ordering;

/// A three-way comparison over values of type `T`. Every structural operation
/// on a [`Tree`][crate::Tree] goes through this.
pub trait Compare<T: ?Sized> {
    /// Compares `a` to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The natural order of a type, i.e. its [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T> Compare<T> for Natural
where
    T: Ord + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
