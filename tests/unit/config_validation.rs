//! Tests for configuration validation.
//!
//! These tests verify that invalid configuration values are rejected
//! by the builder methods with appropriate panic messages.

use voxsig::{Config, ModelGroup, DEFAULT_LAYERS, DEFAULT_MODELS, DEFAULT_SEQ_LENS};

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn defaults_match_constants() {
    let config = Config::default();
    assert_eq!(config.models, DEFAULT_MODELS.to_vec());
    assert_eq!(config.layers, DEFAULT_LAYERS.to_vec());
    assert_eq!(config.seq_lens, DEFAULT_SEQ_LENS.to_vec());
    assert_eq!(config.sample_size, 162);
    assert_eq!(config.seed, 42);
    assert_eq!(config.significance_level, 0.05);
}

#[test]
fn default_models_are_paired() {
    let config = Config::default();
    let base = config
        .models
        .iter()
        .filter(|m| config.group_of(m) == ModelGroup::Base)
        .count();
    let booksum = config
        .models
        .iter()
        .filter(|m| config.group_of(m) == ModelGroup::Booksum)
        .count();
    assert_eq!(base, 4);
    assert_eq!(booksum, 4);
}

#[test]
fn default_models_sorted_and_unique() {
    let mut sorted = DEFAULT_MODELS.to_vec();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted, DEFAULT_MODELS.to_vec());
}

// =============================================================================
// SWEEP GRID VALIDATION
// =============================================================================

#[test]
#[should_panic(expected = "models must not be empty")]
fn empty_models_panics() {
    let _ = Config::default().models(Vec::<String>::new());
}

#[test]
#[should_panic(expected = "layers must not be empty")]
fn empty_layers_panics() {
    let _ = Config::default().layers(Vec::new());
}

#[test]
#[should_panic(expected = "seq_lens must not be empty")]
fn empty_seq_lens_panics() {
    let _ = Config::default().seq_lens(Vec::new());
}

#[test]
#[should_panic(expected = "booksum_suffix must not be empty")]
fn empty_suffix_panics() {
    let _ = Config::default().booksum_suffix("");
}

#[test]
fn custom_suffix_regroups_models() {
    let config = Config::default().booksum_suffix("-tuned");
    assert_eq!(config.group_of("led-tuned"), ModelGroup::Booksum);
    assert_eq!(config.group_of("led-booksum"), ModelGroup::Base);
}

// =============================================================================
// SAMPLING AND TESTING VALIDATION
// =============================================================================

#[test]
#[should_panic(expected = "sample_size must be > 0")]
fn sample_size_zero_panics() {
    let _ = Config::default().sample_size(0);
}

#[test]
fn sample_size_one_valid() {
    let config = Config::default().sample_size(1);
    assert_eq!(config.sample_size, 1);
}

#[test]
#[should_panic(expected = "significance_level must be in (0, 1)")]
fn significance_level_zero_panics() {
    let _ = Config::default().significance_level(0.0);
}

#[test]
#[should_panic(expected = "significance_level must be in (0, 1)")]
fn significance_level_one_panics() {
    let _ = Config::default().significance_level(1.0);
}

#[test]
fn significance_level_strict_valid() {
    let config = Config::default().significance_level(0.001);
    assert_eq!(config.significance_level, 0.001);
}
