//! Default configuration values.

/// Default minimum number of samples on each side of a split for a
/// standalone regression tree.
pub const DEFAULT_MIN_SAMPLES_LEAF: usize = 5;

/// Default maximum depth for a standalone regression tree.
pub const DEFAULT_MAX_DEPTH: i32 = 6;

/// Default number of boosting stages.
pub const DEFAULT_N_TREES: usize = 10;

/// Default learning rate (shrinkage) for gradient boosting.
pub const DEFAULT_LEARNING_RATE: f64 = 0.3;

/// Default depth of every weak learner in a boosted ensemble (stumps).
pub const DEFAULT_BOOSTING_MAX_DEPTH: i32 = 1;

/// Default minimum leaf size of every weak learner in a boosted ensemble.
pub const DEFAULT_BOOSTING_MIN_SAMPLES_LEAF: usize = 1;

/// Library version string.
pub const GBRT_RUST_VERSION: &str = env!("CARGO_PKG_VERSION");
