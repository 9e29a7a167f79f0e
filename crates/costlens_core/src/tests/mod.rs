//! Tests for the costlens core
//!
//! Tests are organized by topic:
//! - `levelized` - LCOE / LCOH aggregation, discounting and fallbacks
//! - `transform` - Analysis variable ranges and the variable catalog
//! - `session` - Selection, metric resolution, save/reset and loading flag
//! - `tornado` - Tornado bar ordering and summary
//! - `phases` - Schedule and budget variance

mod transform;

use jiff::Timestamp;

/// Fixed clock reading for deterministic tests
pub(crate) fn at(millis: i64) -> Timestamp {
    Timestamp::from_millisecond(1_700_000_000_000 + millis).unwrap()
}

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
