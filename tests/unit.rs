//! Fast unit-style integration tests
//!
//! These tests exercise configuration and the statistics through the public
//! API without touching the filesystem.

#[path = "unit/config_validation.rs"]
mod config_validation;
#[path = "unit/significance.rs"]
mod significance;
