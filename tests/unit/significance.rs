//! Tests for the per-voxel paired t-test through the public API.

use ndarray::{array, Array2};
use voxsig::statistics::{paired_t_test, paired_t_test_columns, pearson_columns};
use voxsig::Alternative;

#[test]
fn three_voxel_example() {
    // Columns are voxels, rows are configurations
    let base = array![[1.0, 0.0, 5.0], [2.0, 0.0, 4.0], [1.0, 0.0, 6.0], [2.0, 0.0, 5.0]];
    let booksum = array![[3.0, 0.0, 5.0], [4.0, 0.0, 4.0], [3.0, 0.0, 6.0], [4.0, 0.0, 5.0]];

    for alternative in [Alternative::TwoSided, Alternative::Less, Alternative::Greater] {
        let p = paired_t_test_columns(base.view(), booksum.view(), alternative).unwrap();
        assert_eq!(p.len(), 3);
        assert!(p[1].is_nan(), "{}: zero-variance voxel should be NaN", alternative);
    }

    let p = paired_t_test_columns(base.view(), booksum.view(), Alternative::TwoSided).unwrap();
    assert!((p[2] - 1.0).abs() < 1e-12);
}

#[test]
fn column_order_is_preserved() {
    // Voxel 0 favors booksum, voxel 1 favors base
    let base = array![[0.1, 0.5], [0.2, 0.6], [0.15, 0.55], [0.12, 0.58]];
    let booksum = array![[0.3, 0.2], [0.35, 0.3], [0.4, 0.25], [0.33, 0.22]];

    let less = paired_t_test_columns(base.view(), booksum.view(), Alternative::Less).unwrap();
    assert!(less[0] < 0.05);
    assert!(less[1] > 0.95);
}

#[test]
fn column_pvalues_match_scalar_test() {
    let base = Array2::from_shape_fn((6, 4), |(i, j)| ((i * 3 + j * 7) % 5) as f64 * 0.1);
    let booksum = Array2::from_shape_fn((6, 4), |(i, j)| ((i * 2 + j) % 4) as f64 * 0.1);

    let p = paired_t_test_columns(base.view(), booksum.view(), Alternative::TwoSided).unwrap();
    for j in 0..4 {
        let x = base.column(j).to_vec();
        let y = booksum.column(j).to_vec();
        let scalar = paired_t_test(&x, &y, Alternative::TwoSided).pvalue;
        assert!(
            (scalar.is_nan() && p[j].is_nan()) || scalar == p[j],
            "voxel {}: {} vs {}",
            j,
            scalar,
            p[j]
        );
    }
}

#[test]
fn pvalues_are_probabilities() {
    let base = Array2::from_shape_fn((10, 20), |(i, j)| ((i * 13 + j * 7) % 17) as f64 / 17.0);
    let booksum = Array2::from_shape_fn((10, 20), |(i, j)| ((i * 5 + j * 11) % 19) as f64 / 19.0);

    for alternative in [Alternative::TwoSided, Alternative::Less, Alternative::Greater] {
        let p = paired_t_test_columns(base.view(), booksum.view(), alternative).unwrap();
        assert!(p.iter().all(|v| v.is_nan() || (0.0..=1.0).contains(v)));
    }
}

#[test]
fn correlation_length_matches_voxels() {
    let x = Array2::from_shape_fn((162, 9), |(i, j)| ((i + j) % 7) as f64);
    let y = Array2::from_shape_fn((162, 9), |(i, j)| ((i * j) % 5) as f64);
    let r = pearson_columns(x.view(), y.view()).unwrap();
    assert_eq!(r.len(), 9);
}
