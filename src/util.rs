/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss or rounding errors.
/// Use these helpers whenever you need to move between `i64` and `f64` in a
/// way that guarantees correctness.
pub mod num;
/// Text similarity helpers.
///
/// Provides the edit-distance and scoring routines used to suggest the
/// closest known variable name when an identifier cannot be resolved.
pub mod text;
