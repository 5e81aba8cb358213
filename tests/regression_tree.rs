//! Integration tests for regression tree construction and prediction.

mod common;

use approx::assert_abs_diff_eq;
use common::*;
use gbrt_rust::*;
use ndarray::{array, Array1, Array2};
use proptest::prelude::*;

/// Check the structural invariants of every node below `node`.
fn check_node(node: &Node, features: &Array2<f64>, target: &Array1<f64>, min_samples_leaf: usize) {
    let mean = node.samples().iter().map(|&i| target[i]).sum::<f64>() / node.count() as f64;
    assert_abs_diff_eq!(node.value(), mean, epsilon = 1e-9);

    if let Some((left, right)) = node.children() {
        let split = node.split().expect("internal node without split");
        assert_eq!(left.count() + right.count(), node.count());
        assert!(left.count() >= min_samples_leaf);
        assert!(right.count() >= min_samples_leaf);
        assert!(split.score < 0.0);

        let mut expected_left = Vec::new();
        let mut expected_right = Vec::new();
        for &i in node.samples() {
            if split.goes_left(features[[i, split.feature]]) {
                expected_left.push(i);
            } else {
                expected_right.push(i);
            }
        }
        assert_eq!(left.samples(), expected_left.as_slice());
        assert_eq!(right.samples(), expected_right.as_slice());

        check_node(left, features, target, min_samples_leaf);
        check_node(right, features, target, min_samples_leaf);
    } else {
        assert!(node.split().is_none());
    }
}

fn check_routing(tree: &RegressionTree, features: &Array2<f64>) {
    for leaf in tree.leaves() {
        for &i in leaf.samples() {
            let prediction = tree.predict_row(features.row(i)).unwrap();
            assert_eq!(prediction, leaf.value());
        }
    }
}

#[test]
fn test_step_function_stump() {
    let (x, y) = step_data();
    let tree = RegressionTree::fit(x.view(), y.view(), &TreeConfig::new(1, 1).unwrap()).unwrap();

    let split = tree.root().split().unwrap();
    assert_eq!(split.feature, 0);
    assert_eq!(split.threshold, 5.5);
    assert_abs_diff_eq!(split.sse_reduction(), 202.5, epsilon = 1e-9);

    let (left, right) = tree.root().children().unwrap();
    assert_eq!(left.value(), 1.0);
    assert_eq!(right.value(), 10.0);
    assert_eq!(left.samples(), &[0, 1, 2, 3, 4]);
    assert_eq!(right.samples(), &[5, 6, 7, 8, 9]);

    let predictions = tree.predict(array![[0.0], [5.5], [5.6], [42.0]].view()).unwrap();
    assert_eq!(predictions, array![1.0, 1.0, 10.0, 10.0]);
}

#[test]
fn test_constant_target_is_single_leaf() {
    let x = create_features(50, 3, 7);
    let y = Array1::from_elem(50, 3.25);
    for max_depth in [0, 1, 5, 20] {
        let tree =
            RegressionTree::fit(x.view(), y.view(), &TreeConfig::new(1, max_depth).unwrap())
                .unwrap();
        assert!(tree.root().is_leaf());
        assert_eq!(tree.value(), 3.25);
    }
}

#[test]
fn test_depth_zero_is_global_mean() {
    let x = create_features(40, 2, 1);
    let y = create_linear_target(&x);
    let tree = RegressionTree::fit(x.view(), y.view(), &TreeConfig::new(1, 0).unwrap()).unwrap();

    assert_eq!(tree.num_nodes(), 1);
    assert_abs_diff_eq!(tree.value(), y.mean().unwrap(), epsilon = 1e-12);
    let predictions = tree.predict(x.view()).unwrap();
    assert!(predictions.iter().all(|&p| p == tree.value()));
}

#[test]
fn test_invariants_on_random_data() {
    let x = create_features(200, 4, 42);
    let y = create_sine_target(&x, 0.1, 43);
    let config = TreeConfig::new(5, 6).unwrap();
    let tree = RegressionTree::fit(x.view(), y.view(), &config).unwrap();

    assert!(tree.depth() <= 6);
    check_node(tree.root(), &x, &y, 5);
    check_routing(&tree, &x);

    let mut rows: Vec<usize> = tree
        .leaves()
        .iter()
        .flat_map(|leaf| leaf.samples().to_vec())
        .collect();
    rows.sort_unstable();
    assert_eq!(rows, (0..200).collect::<Vec<_>>());
}

#[test]
fn test_deeper_trees_fit_better() {
    let x = create_features(300, 2, 5);
    let y = create_sine_target(&x, 0.05, 6);

    let mut previous = f64::INFINITY;
    for depth in 0..6 {
        let tree =
            RegressionTree::fit(x.view(), y.view(), &TreeConfig::new(3, depth).unwrap()).unwrap();
        let mse = mean_squared_error(tree.predict(x.view()).unwrap().view(), y.view()).unwrap();
        assert!(mse <= previous + 1e-12);
        previous = mse;
    }
}

#[test]
fn test_parallel_features_match_serial() {
    let x = create_tied_features(150, 6, 11);
    let y = create_linear_target(&x);

    let serial = TreeConfigBuilder::new()
        .min_samples_leaf(2)
        .max_depth(5)
        .build()
        .unwrap();
    let parallel = TreeConfig {
        parallel_features: true,
        ..serial.clone()
    };

    let a = RegressionTree::fit(x.view(), y.view(), &serial).unwrap();
    let b = RegressionTree::fit(x.view(), y.view(), &parallel).unwrap();
    assert_eq!(a.root(), b.root());
}

#[test]
fn test_with_indices_subset() {
    let (x, y) = step_data();
    let dataset = Dataset::new(x.view(), y.view()).unwrap();
    let config = TreeConfig::new(1, 3).unwrap();

    let tree = RegressionTree::with_indices(&dataset, &config, vec![0, 1, 2]).unwrap();
    assert!(tree.root().is_leaf());
    assert_eq!(tree.value(), 1.0);

    let tree = RegressionTree::with_indices(&dataset, &config, vec![3, 4, 5, 6]).unwrap();
    assert_eq!(tree.root().split().unwrap().threshold, 5.5);

    assert!(matches!(
        RegressionTree::with_indices(&dataset, &config, vec![]),
        Err(GbrtError::DegenerateData { .. })
    ));
    assert!(matches!(
        RegressionTree::with_indices(&dataset, &config, vec![0, 10]),
        Err(GbrtError::IndexOutOfBounds { .. })
    ));
}

#[test]
fn test_rejects_bad_input() {
    let (x, y) = step_data();
    let config = TreeConfig::default();

    let empty = Array2::<f64>::zeros((0, 1));
    assert!(matches!(
        RegressionTree::fit(empty.view(), Array1::<f64>::zeros(0).view(), &config),
        Err(GbrtError::DegenerateData { .. })
    ));
    assert!(matches!(
        RegressionTree::fit(x.view(), Array1::<f64>::zeros(3).view(), &config),
        Err(GbrtError::DimensionMismatch { .. })
    ));

    let mut with_nan = x.clone();
    with_nan[[2, 0]] = f64::NAN;
    assert!(matches!(
        RegressionTree::fit(with_nan.view(), y.view(), &config),
        Err(GbrtError::NonFiniteValue { .. })
    ));

    let invalid = TreeConfig {
        min_samples_leaf: 0,
        ..TreeConfig::default()
    };
    let err = RegressionTree::fit(x.view(), y.view(), &invalid).unwrap_err();
    assert!(err.is_precondition());
}

#[test]
fn test_display_dump() {
    let (x, y) = step_data();
    let tree = RegressionTree::fit(x.view(), y.view(), &TreeConfig::new(1, 1).unwrap()).unwrap();
    let dump = tree.to_string();
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "n: 10; value: 5.50; split: x0 <= 5.500");
    assert_eq!(lines[1], "  n: 5; value: 1.00");
    assert_eq!(lines[2], "  n: 5; value: 10.00");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_tree_invariants(
        rows in prop::collection::vec(
            (prop::collection::vec(-10i32..10, 3), -50.0f64..50.0),
            1..60,
        ),
        min_samples_leaf in 1usize..6,
        max_depth in 0i32..6,
        parallel_features in any::<bool>(),
    ) {
        let n = rows.len();
        let x = Array2::from_shape_fn((n, 3), |(i, j)| rows[i].0[j] as f64);
        let y = Array1::from_iter(rows.iter().map(|r| r.1));
        let config = TreeConfig {
            min_samples_leaf,
            max_depth,
            parallel_features,
        };

        let tree = RegressionTree::fit(x.view(), y.view(), &config).unwrap();
        prop_assert!(tree.depth() <= max_depth as usize);
        check_node(tree.root(), &x, &y, min_samples_leaf);
        check_routing(&tree, &x);

        // Identical rows always land in the same leaf.
        let predictions = tree.predict(x.view()).unwrap();
        for a in 0..n {
            for b in 0..n {
                if x.row(a) == x.row(b) {
                    prop_assert_eq!(predictions[a], predictions[b]);
                }
            }
        }

        // Prediction is a pure function of its input.
        prop_assert_eq!(tree.predict(x.view()).unwrap(), predictions);
    }
}
