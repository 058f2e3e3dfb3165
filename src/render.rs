//! Text drawings of a [`Tree`].
//!
//! The tree is walked breadth first. The root is written on its own line, indented so that
//! nothing is drawn left of the first column, and then each level below it gets a line of branch
//! arrows (`/` towards a left child, `\` towards a right child) followed by a line of values.
//! Columns come from the [`layout`][crate::layout] of the tree and assume every value is drawn
//! as a single character.
//!
//! # Examples
//!
//! ```
//! use ascii_bst::Tree;
//!
//! let tree: Tree<char> = "DBACGHJK".chars().collect();
//!
//! assert_eq!(
//!     tree.drawing().to_string(),
//!     [
//!         "    D",
//!         "   / \\",
//!         "  B   G",
//!         " / \\   \\",
//!         "A   C   H",
//!         "         \\",
//!         "          J",
//!         "           \\",
//!         "            K",
//!         "",
//!     ]
//!     .join("\n")
//! );
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::io;

use log::{debug, trace};

use crate::error::Error;
use crate::layout::{last_descendant, Course};
use crate::tree::{Node, Tree};

/// A drawing of a [`Tree`] that can be written anywhere [`fmt::Display`] can. Created by
/// [`Tree::drawing`].
pub struct Drawing<'a, T, C> {
    tree: &'a Tree<T, C>,
}

impl<T, C> Tree<T, C> {
    /// A drawing of the tree as it currently is. An empty tree draws as nothing at all.
    pub fn drawing(&self) -> Drawing<'_, T, C> {
        Drawing { tree: self }
    }

    /// Writes a drawing of the tree to `out`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ascii_bst::Tree;
    ///
    /// let tree: Tree<char> = "BAC".chars().collect();
    /// let mut out = Vec::new();
    /// tree.render(&mut out).unwrap();
    ///
    /// assert_eq!(out, b"  B\n / \\\nA   C\n");
    /// ```
    pub fn render<W>(&self, mut out: W) -> Result<(), Error>
    where
        T: fmt::Display,
        W: io::Write,
    {
        write!(out, "{}", self.drawing())?;
        out.flush()?;
        Ok(())
    }
}

impl<T, C> fmt::Display for Drawing<'_, T, C>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = match self.tree.root.as_deref() {
            Some(root) => root,
            None => return Ok(()),
        };

        let layout = self.tree.layout();
        let offset = layout.required_offset();
        let indent = -layout.left_extent_at(offset);
        debug!("drawing tree with offset {} and indent {}", offset, indent);

        pad(f, indent)?;
        writeln!(f, "{}", root.value)?;

        // The root's arrows are drawn once for every offset up to the real one, so that they
        // stretch out to wherever its children end up.
        let mut columns = Vec::new();
        for repetition in 0..=offset {
            arrow_positions(&mut columns, root, indent + 1, repetition);
        }

        let mut queue = VecDeque::new();
        queue.push_back((root, Course::ROOT));
        let mut last = last_descendant(Some(root));
        let mut discovered: Option<&Node<T>> = None;
        let mut level: Vec<(&Node<T>, Course)> = Vec::new();
        let mut arrows: Vec<char> = Vec::new();

        while let Some((node, course)) = queue.pop_front() {
            if let Some(left) = node.left.as_deref() {
                queue.push_back((left, course.left()));
                level.push((left, course.left()));
                arrows.push('/');
                discovered = Some(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back((right, course.right()));
                level.push((right, course.right()));
                arrows.push('\\');
                discovered = Some(right);
            }

            let level_complete = match (discovered, last) {
                (Some(discovered), Some(last)) => std::ptr::eq(discovered, last),
                (None, None) => true,
                _ => false,
            };
            if !level_complete && (level.is_empty() || last.is_some()) {
                continue;
            }

            trace!(
                "flushing {} values under {} arrow columns",
                level.len(),
                columns.len()
            );
            write_arrows(f, &columns, &arrows)?;
            arrows.clear();
            columns.clear();

            let mut cursor = 0;
            for (node, course) in &level {
                let column = course.place(offset).column + indent;
                pad(f, column - cursor)?;
                write!(f, "{}", node.value)?;
                arrow_positions(&mut columns, node, column + 1, 0);
                cursor = column + 1;
            }
            writeln!(f)?;
            level.clear();
            last = last_descendant(last);
        }

        Ok(())
    }
}

/// Records where the arrows below `node` go. `base` is the column just right of `node` and
/// `repetition` shifts both arrows outwards by that many columns.
fn arrow_positions<T>(columns: &mut Vec<i64>, node: &Node<T>, base: i64, repetition: i64) {
    if node.left.is_some() {
        columns.push(base - 2 - repetition);
    }
    if node.right.is_some() {
        columns.push(base + repetition);
    }
}

/// Writes one line of arrows per set of `arrows.len()` columns when there are more columns than
/// arrows (the root's widening arrows), otherwise a single line.
fn write_arrows(f: &mut fmt::Formatter<'_>, columns: &[i64], arrows: &[char]) -> fmt::Result {
    let mut cursor = 0;
    for (x, (column, arrow)) in columns.iter().zip(arrows.iter().cycle()).enumerate() {
        pad(f, column - cursor)?;
        write!(f, "{}", arrow)?;
        cursor = column + 1;
        if x % arrows.len() == 1 && columns.len() > arrows.len() {
            cursor = 0;
            writeln!(f)?;
        }
    }
    if columns.len() == arrows.len() {
        writeln!(f)?;
    }
    Ok(())
}

fn pad(f: &mut fmt::Formatter<'_>, width: i64) -> fmt::Result {
    if width > 0 {
        write!(f, "{:width$}", "", width = width as usize)?;
    }
    Ok(())
}
