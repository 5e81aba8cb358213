//! Tree node representation.
//!
//! A node is either a leaf or an internal node carrying a split and two
//! exclusively owned children. Both kinds keep the mean target of the rows
//! that reached them and the row indices themselves.

use crate::core::types::{DataIndex, Score};
use crate::tree::split::Split;
use ndarray::ArrayView1;
use std::fmt;

/// A node of a fitted regression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Terminal node predicting `value`
    Leaf {
        /// Mean target over `samples`
        value: Score,
        /// Rows that reached this node
        samples: Vec<DataIndex>,
    },
    /// Node routing rows to `left` or `right` by `split`
    Internal {
        /// Mean target over `samples`
        value: Score,
        /// Rows that reached this node
        samples: Vec<DataIndex>,
        /// The winning split
        split: Split,
        /// Subtree for rows with `value <= threshold`
        left: Box<Node>,
        /// Subtree for rows with `value > threshold`
        right: Box<Node>,
    },
}

impl Node {
    /// Creates a leaf node.
    pub fn leaf(value: Score, samples: Vec<DataIndex>) -> Self {
        Node::Leaf { value, samples }
    }

    /// Creates an internal node owning both children.
    pub fn internal(
        value: Score,
        samples: Vec<DataIndex>,
        split: Split,
        left: Node,
        right: Node,
    ) -> Self {
        Node::Internal {
            value,
            samples,
            split,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Returns true if this node is a leaf node.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Mean target of the rows that reached this node.
    pub fn value(&self) -> Score {
        match self {
            Node::Leaf { value, .. } | Node::Internal { value, .. } => *value,
        }
    }

    /// Row indices that reached this node.
    pub fn samples(&self) -> &[DataIndex] {
        match self {
            Node::Leaf { samples, .. } | Node::Internal { samples, .. } => samples,
        }
    }

    /// Number of rows that reached this node.
    pub fn count(&self) -> usize {
        self.samples().len()
    }

    /// The split, for internal nodes.
    pub fn split(&self) -> Option<&Split> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { split, .. } => Some(split),
        }
    }

    /// Left and right children, for internal nodes.
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some((left, right)),
        }
    }

    /// Length of the longest path from this node down to a leaf.
    pub fn depth(&self) -> usize {
        match self.children() {
            None => 0,
            Some((left, right)) => 1 + left.depth().max(right.depth()),
        }
    }

    /// Number of leaves in this subtree.
    pub fn num_leaves(&self) -> usize {
        match self.children() {
            None => 1,
            Some((left, right)) => left.num_leaves() + right.num_leaves(),
        }
    }

    /// Number of nodes in this subtree.
    pub fn num_nodes(&self) -> usize {
        match self.children() {
            None => 1,
            Some((left, right)) => 1 + left.num_nodes() + right.num_nodes(),
        }
    }

    /// Leaves of this subtree, left to right.
    pub fn leaves(&self) -> Vec<&Node> {
        let mut leaves = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node.children() {
                None => leaves.push(node),
                Some((left, right)) => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        leaves
    }

    /// Descend to the leaf reached by `row` and return its value.
    ///
    /// `row` must have an entry for every split feature.
    pub(crate) fn predict_row(&self, row: ArrayView1<'_, f64>) -> Score {
        let mut node = self;
        loop {
            match node {
                Node::Leaf { value, .. } => return *value,
                Node::Internal {
                    split, left, right, ..
                } => {
                    node = if split.goes_left(row[split.feature]) {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    fn fmt_subtree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(
            f,
            "{:indent$}n: {}; value: {:.2}",
            "",
            self.count(),
            self.value(),
            indent = depth * 2
        )?;
        match self {
            Node::Leaf { .. } => writeln!(f),
            Node::Internal {
                split, left, right, ..
            } => {
                writeln!(f, "; split: x{} <= {:.3}", split.feature, split.threshold)?;
                left.fmt_subtree(f, depth + 1)?;
                right.fmt_subtree(f, depth + 1)
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_subtree(f, 0)
    }
}
