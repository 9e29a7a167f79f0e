//! Default base values for output metrics the outputs provider does not know.

use crate::levelized::DerivedMetrics;

/// Static defaults, by metric name. LCOE/LCOH are handled separately since
/// they prefer the computed value.
pub const METRIC_DEFAULTS: [(&str, f64); 12] = [
    ("NPV", 1_000_000.0),
    ("IRR", 12.0),
    ("DSCR", 1.5),
    ("Payback", 5.0),
    ("Equity IRR", 15.0),
    ("MOIC", 2.5),
    ("Dividend Yield", 6.0),
    ("Cash-on-Cash Return", 12.0),
    ("LLCR", 1.8),
    ("PLCR", 2.0),
    ("Interest Coverage Ratio", 3.5),
    ("Gearing Ratio", 70.0),
];

/// Used for LCOE when the computed value is zero ($/MWh)
pub const DEFAULT_LCOE: f64 = 45.0;
/// Used for LCOH when the computed value is zero ($/kg)
pub const DEFAULT_LCOH: f64 = 4.5;
/// Base value for names absent from every table
pub const UNKNOWN_METRIC_BASE: f64 = 0.0;

/// Look up a metric's fallback base value. Never fails.
pub fn fallback_base_value(metric: &str, derived: &DerivedMetrics) -> f64 {
    match metric {
        "LCOE" => non_zero_or(derived.lcoe, DEFAULT_LCOE),
        "LCOH" => non_zero_or(derived.lcoh, DEFAULT_LCOH),
        _ => METRIC_DEFAULTS
            .iter()
            .find(|(name, _)| *name == metric)
            .map_or(UNKNOWN_METRIC_BASE, |(_, v)| *v),
    }
}

fn non_zero_or(value: f64, default: f64) -> f64 {
    if value == 0.0 || !value.is_finite() {
        default
    } else {
        value
    }
}
