//! Horizontal placement of nodes for text drawings.
//!
//! Every node gets a column relative to the root, which sits at column 0. Nodes in the root's
//! left subtree get negative columns and nodes in its right subtree positive ones. A step to a
//! left child moves two columns left and a step to a right child two columns right, and then
//! every non-root node is pushed outwards, away from the root, by a shared *offset*. The offset
//! is the smallest one (starting at 0, in steps of 2) that keeps each subtree entirely on its
//! own side of the root, so the two halves of a drawing never cross.
//!
//! # Examples
//!
//! ```
//! use ascii_bst::{Placement, Tree};
//!
//! let tree: Tree<char> = "NYUEMRACOPTB".chars().collect();
//! let layout = tree.layout();
//!
//! // O hangs deep in Y's left subtree and would cross over the root without an offset.
//! assert_eq!(layout.required_offset(), 4);
//! assert_eq!(layout.position_of(&'O', 0), Some(Placement { column: 0, offset: 4 }));
//! assert_eq!(layout.position_of(&'E', 4), Some(Placement { column: -6, offset: 4 }));
//! assert_eq!(layout.position_of(&'T', 4), Some(Placement { column: 4, offset: 4 }));
//! assert_eq!(layout.left_extent(), -8);
//! ```

use std::cmp::Ordering;

use log::{debug, trace};

use crate::compare::Compare;
use crate::tree::{Node, Tree};

/// Where a value is drawn, and the offset that was needed to draw it there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Column relative to the root. Negative columns are left of the root.
    pub column: i64,
    /// The offset the column was computed with. This is at least the offset asked for and
    /// larger if that one would have pulled the value across the root.
    pub offset: i64,
}

/// The branches taken from the root to reach a node, reduced to what placement needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Course {
    /// -1 under the root's left child, 1 under its right child and 0 for the root itself.
    side: i64,
    /// Distance from the root, measured outwards from it, before any offset is added.
    drift: i64,
}

impl Course {
    pub(crate) const ROOT: Self = Self { side: 0, drift: 0 };

    pub(crate) fn left(self) -> Self {
        let side = if self.side == 0 { -1 } else { self.side };
        Self {
            side,
            drift: self.drift - 2 * side,
        }
    }

    pub(crate) fn right(self) -> Self {
        let side = if self.side == 0 { 1 } else { self.side };
        Self {
            side,
            drift: self.drift + 2 * side,
        }
    }

    /// Places the node at the first offset, counting up from `offset` in steps of 2, that keeps
    /// it on its side of the root. The drift of a node at depth `d` is at least `-2 * d` so this
    /// takes at most `d` steps. The root has no drift, so it only ever raises a negative offset
    /// and always lands on column 0.
    pub(crate) fn place(self, offset: i64) -> Placement {
        let mut offset = offset;
        let mut distance = offset + self.drift;
        while distance < 0 {
            trace!(
                "offset {} crosses the root by {}, retrying with {}",
                offset,
                -distance,
                offset + 2
            );
            offset += 2;
            distance += 2;
        }

        Placement {
            column: distance * self.side,
            offset,
        }
    }
}

/// The placement queries for one [`Tree`], borrowed for the length of a drawing pass. Nothing
/// is cached on the nodes so every `Layout` reflects the tree as it currently is.
pub struct Layout<'a, T, C> {
    tree: &'a Tree<T, C>,
}

impl<T, C> Tree<T, C> {
    /// Borrows the tree for placement queries.
    pub fn layout(&self) -> Layout<'_, T, C> {
        Layout { tree: self }
    }
}

impl<'a, T, C> Layout<'a, T, C> {
    /// The smallest offset that places every node on its side of the root. It is found by
    /// placing the nodes in preorder, each starting from the offset the previous ones needed.
    pub fn required_offset(&self) -> i64 {
        let offset = courses(self.tree.root.as_deref(), Course::ROOT)
            .into_iter()
            .skip(1)
            .fold(0, |offset, (_, course)| {
                offset.max(course.place(offset).offset)
            });
        debug!("required offset is {}", offset);
        offset
    }

    /// The leftmost column used by the drawing, which is never right of the root. Its magnitude
    /// is how far the root has to be indented.
    pub fn left_extent(&self) -> i64 {
        self.left_extent_at(self.required_offset())
    }

    pub(crate) fn left_extent_at(&self, offset: i64) -> i64 {
        let left = match self.tree.root.as_deref() {
            Some(root) => root.left.as_deref(),
            None => None,
        };
        courses(left, Course::ROOT.left())
            .into_iter()
            .map(|(_, course)| course.place(offset).column)
            .fold(0, i64::min)
    }
}

impl<'a, T, C> Layout<'a, T, C>
where
    C: Compare<T>,
{
    /// Places the node holding `target`, growing `offset` if it is too small for that node.
    /// Returns `None` if `target` is not in the tree. The root is always at column 0.
    pub fn position_of(&self, target: &T, offset: i64) -> Option<Placement> {
        self.course_of(target).map(|course| course.place(offset))
    }

    /// Follows the search path for `target`, stopping at the first node comparing equal.
    fn course_of(&self, target: &T) -> Option<Course> {
        let mut course = Course::ROOT;
        let mut link = self.tree.root.as_deref();
        while let Some(node) = link {
            match self.tree.compare.compare(target, &node.value) {
                Ordering::Less => {
                    course = course.left();
                    link = node.left.as_deref();
                }
                Ordering::Equal => return Some(course),
                Ordering::Greater => {
                    course = course.right();
                    link = node.right.as_deref();
                }
            }
        }
        None
    }
}

/// Every node of the subtree at `start`, in preorder, paired with its course. `course` is the
/// course of `start` itself.
fn courses<T>(start: Option<&Node<T>>, course: Course) -> Vec<(&Node<T>, Course)> {
    let mut visited = Vec::new();
    let mut stack: Vec<(&Node<T>, Course)> = start.map(|n| (n, course)).into_iter().collect();
    while let Some((node, course)) = stack.pop() {
        visited.push((node, course));
        if let Some(right) = node.right.as_deref() {
            stack.push((right, course.right()));
        }
        if let Some(left) = node.left.as_deref() {
            stack.push((left, course.left()));
        }
    }
    visited
}

/// The child that is discovered last when `node`'s children are queued breadth first: its right
/// child if it has one, otherwise its left child.
pub(crate) fn last_descendant<T>(node: Option<&Node<T>>) -> Option<&Node<T>> {
    node.and_then(|n| n.right.as_deref().or_else(|| n.left.as_deref()))
}
