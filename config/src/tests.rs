//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON_TOLERANCE > 0.0, "EPSILON_TOLERANCE must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON_TOLERANCE < 1e-6, "EPSILON_TOLERANCE should be small for precision");
}

// =============================================================================
// SENSITIVITY TESTS
// =============================================================================

#[test]
fn test_rotation_is_finer_than_translation() {
    assert!(ROTATE_SENSITIVITY_SCALE < 1.0);
}

#[test]
fn test_radial_sensitivity_needs_many_pixels_per_step() {
    // A single pixel must never change the count on its own
    assert!(RADIAL_SENSITIVITY < 1.0);
}

// =============================================================================
// RADIAL TESTS
// =============================================================================

#[test]
fn test_default_radial_count_matches_three_way_symmetry() {
    assert_eq!(DEFAULT_RADIAL_COUNT, 3);
    assert_eq!(AXIS_COUNT, 3);
}

// =============================================================================
// NAMING TESTS
// =============================================================================

#[test]
fn test_suffixes_start_with_separator() {
    assert!(LATTICE_SUFFIX.starts_with('.'));
    assert!(RADIAL_PIVOT_SUFFIX.starts_with('.'));
}

#[test]
fn test_lattice_suffix_length() {
    // Stripping the suffix recovers the owning object's name
    let name = format!("Suzanne{LATTICE_SUFFIX}");
    assert_eq!(&name[..name.len() - LATTICE_SUFFIX.len()], "Suzanne");
}
