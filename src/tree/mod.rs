//! Regression tree learning.
//!
//! Trees are grown top-down: each node scans every feature for the threshold
//! that most reduces the squared error of its rows, then recurses into the
//! two halves until the depth limit is reached or no admissible split is
//! left.

mod builder;
pub mod learner;
pub mod node;
pub mod split;
pub mod tree;

pub use learner::RegressionTreeLearner;
pub use node::Node;
pub use split::{Split, SplitFinder};
pub use tree::RegressionTree;
