//! Forward-stagewise additive modeling with regression trees.

use crate::config::BoostingConfig;
use crate::core::error::{GbrtError, Result};
use crate::core::traits::{Regressor, WeakLearner};
use crate::core::types::{Label, Score};
use crate::dataset::{ensure_finite_matrix, Dataset};
use crate::metrics::mean_squared_error;
use crate::tree::RegressionTreeLearner;
use ndarray::{Array1, ArrayView1, ArrayView2};

/// Everything produced by a successful fit.
#[derive(Debug)]
struct FittedEnsemble<M> {
    base_value: Score,
    trees: Vec<M>,
    num_features: usize,
    train_loss: Vec<f64>,
}

#[derive(Debug)]
enum FitState<M> {
    Unfit,
    Fitted(FittedEnsemble<M>),
}

/// Gradient boosted ensemble of weak learners.
///
/// Predictions are `base_value + learning_rate * sum(tree predictions)`,
/// where `base_value` is the mean training target.
///
/// The ensemble starts unfit. [`fit`](Self::fit) trains all `n_trees` stages
/// in one pass; calling it again discards the previous model and trains from
/// scratch. A failed fit leaves the ensemble unfit.
///
/// # Examples
///
/// ```rust
/// use gbrt_rust::{BoostingConfig, GradientBoosting};
/// use ndarray::{array, Array2};
///
/// # fn main() -> gbrt_rust::Result<()> {
/// let x = Array2::from_shape_fn((10, 1), |(i, _)| i as f64);
/// let y = x.column(0).mapv(|v| if v < 5.0 { 1.0 } else { 10.0 });
///
/// let mut model = GradientBoosting::new(BoostingConfig::new(25, 0.3, 1)?)?;
/// model.fit(x.view(), y.view())?;
///
/// let predictions = model.predict(array![[0.0], [9.0]].view())?;
/// assert!(predictions[0] < predictions[1]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GradientBoosting<L: WeakLearner = RegressionTreeLearner> {
    config: BoostingConfig,
    learner: L,
    state: FitState<L::Model>,
}

impl GradientBoosting<RegressionTreeLearner> {
    /// Create an unfit ensemble of regression trees configured by `config`.
    pub fn new(config: BoostingConfig) -> Result<Self> {
        let learner = RegressionTreeLearner::new(config.tree_config())?;
        Self::with_learner(config, learner)
    }
}

impl<L: WeakLearner> GradientBoosting<L> {
    /// Create an unfit ensemble with a custom weak learner.
    ///
    /// Only `n_trees` and `learning_rate` of `config` apply; the learner
    /// carries its own settings.
    pub fn with_learner(config: BoostingConfig, learner: L) -> Result<Self> {
        config.validate_learning_rate()?;
        Ok(GradientBoosting {
            config,
            learner,
            state: FitState::Unfit,
        })
    }

    /// The ensemble configuration.
    pub fn config(&self) -> &BoostingConfig {
        &self.config
    }

    /// The weak learner.
    pub fn learner(&self) -> &L {
        &self.learner
    }

    /// Returns true once [`fit`](Self::fit) has succeeded.
    pub fn is_fitted(&self) -> bool {
        matches!(self.state, FitState::Fitted(_))
    }

    /// Fit the ensemble to `features` and `target`.
    pub fn fit<'a>(
        &mut self,
        features: ArrayView2<'a, f64>,
        target: ArrayView1<'a, Label>,
    ) -> Result<()> {
        if let FitState::Fitted(previous) = &self.state {
            log::info!(
                "Refitting gradient boosting model, discarding {} fitted trees",
                previous.trees.len()
            );
        }
        self.state = FitState::Unfit;

        let dataset = Dataset::new(features, target)?;
        let fitted = self.fit_stages(&dataset)?;
        self.state = FitState::Fitted(fitted);
        Ok(())
    }

    fn fit_stages(&self, dataset: &Dataset<'_>) -> Result<FittedEnsemble<L::Model>> {
        let n_trees = self.config.n_trees;
        let learning_rate = self.config.learning_rate;
        let features = dataset.features();
        let target = dataset.target();

        log::info!(
            "Fitting gradient boosting: {} samples, {} features, {} x {} (learning_rate={})",
            dataset.num_data(),
            dataset.num_features(),
            n_trees,
            self.learner.name(),
            learning_rate
        );

        let base_value = target
            .mean()
            .ok_or_else(|| GbrtError::degenerate_data("cannot boost on an empty target"))?;
        let mut running = Array1::from_elem(dataset.num_data(), base_value);
        let mut trees = Vec::with_capacity(n_trees);
        let mut train_loss = Vec::with_capacity(n_trees);

        for stage in 0..n_trees {
            let residual = &target - &running;
            let tree = self
                .learner
                .fit(&dataset.with_target(residual.view())?)
                .map_err(|e| {
                    GbrtError::training(format!("stage {} of {}: {}", stage + 1, n_trees, e))
                })?;

            let update = tree.predict(features)?;
            running.scaled_add(learning_rate, &update);

            let loss = mean_squared_error(running.view(), target)?;
            log::debug!("Stage {}/{}: train mse {:.6}", stage + 1, n_trees, loss);

            train_loss.push(loss);
            trees.push(tree);
        }

        log::info!(
            "Finished gradient boosting: base value {:.6}, final train mse {:.6}",
            base_value,
            mean_squared_error(running.view(), target)?
        );

        Ok(FittedEnsemble {
            base_value,
            trees,
            num_features: dataset.num_features(),
            train_loss,
        })
    }

    fn fitted(&self, operation: &str) -> Result<&FittedEnsemble<L::Model>> {
        match &self.state {
            FitState::Fitted(fitted) => Ok(fitted),
            FitState::Unfit => Err(GbrtError::not_fitted("GradientBoosting", operation)),
        }
    }

    fn check_features(
        fitted: &FittedEnsemble<L::Model>,
        features: ArrayView2<'_, f64>,
    ) -> Result<()> {
        if features.ncols() != fitted.num_features {
            return Err(GbrtError::dimension_mismatch(
                format!("{} feature columns", fitted.num_features),
                format!("{} feature columns", features.ncols()),
            ));
        }
        ensure_finite_matrix(features, "prediction features")
    }

    /// Predict every row of `features`.
    pub fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Array1<Score>> {
        let fitted = self.fitted("predict")?;
        Self::check_features(fitted, features)?;

        let mut total = Array1::zeros(features.nrows());
        for tree in &fitted.trees {
            total += &tree.predict(features)?;
        }

        let learning_rate = self.config.learning_rate;
        Ok(total.mapv(|sum| fitted.base_value + learning_rate * sum))
    }

    /// Ensemble predictions after each stage, one array per tree.
    pub fn staged_predict(&self, features: ArrayView2<'_, f64>) -> Result<Vec<Array1<Score>>> {
        let fitted = self.fitted("staged_predict")?;
        Self::check_features(fitted, features)?;

        let mut running = Array1::from_elem(features.nrows(), fitted.base_value);
        let mut stages = Vec::with_capacity(fitted.trees.len());
        for tree in &fitted.trees {
            running.scaled_add(self.config.learning_rate, &tree.predict(features)?);
            stages.push(running.clone());
        }
        Ok(stages)
    }

    /// Mean of the training target.
    pub fn base_value(&self) -> Result<Score> {
        Ok(self.fitted("base_value")?.base_value)
    }

    /// Fitted trees in stage order; empty before fitting.
    pub fn trees(&self) -> &[L::Model] {
        match &self.state {
            FitState::Fitted(fitted) => &fitted.trees,
            FitState::Unfit => &[],
        }
    }

    /// Number of fitted trees.
    pub fn num_trees(&self) -> usize {
        self.trees().len()
    }

    /// Training mean squared error after each stage; empty before fitting.
    pub fn train_loss(&self) -> &[f64] {
        match &self.state {
            FitState::Fitted(fitted) => &fitted.train_loss,
            FitState::Unfit => &[],
        }
    }
}

impl<L: WeakLearner> Regressor for GradientBoosting<L> {
    fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Array1<Score>> {
        GradientBoosting::predict(self, features)
    }
}
