//! Tests for the input -> analysis variable transformation

use crate::levelized::{LCOE_ID, LCOH_ID};
use crate::model::{DataType, InputId, ProjectInput};
use crate::transform::{AnalysisCatalog, Swing, transform_input_to_analysis_variable};

use super::{assert_close, at};

#[test]
fn test_variable_keeps_id_and_base_value() {
    let input = ProjectInput::new("capex-turbines", "Turbines", "capex", 1_000.0)
        .with_unit("$")
        .with_description("Turbine supply contract");

    let var = transform_input_to_analysis_variable(&input);

    assert_eq!(var.id, input.id);
    assert_eq!(var.name, "Turbines");
    assert_eq!(var.unit, "$");
    assert_eq!(var.description, "Turbine supply contract");
    assert_eq!(var.base_value, 1_000.0);
}

#[test]
fn test_transform_is_deterministic() {
    let input = ProjectInput::new("fuel", "Gas", "fuel", 321.5).with_data_type(DataType::TimeSeries);

    let first = transform_input_to_analysis_variable(&input);
    let second = transform_input_to_analysis_variable(&input);
    assert_eq!(first, second);
}

#[test]
fn test_capex_range_is_skewed_up() {
    let var = transform_input_to_analysis_variable(&ProjectInput::new("c", "c", "capex", 1_000.0));

    assert_close(var.range.low, 900.0);
    assert_close(var.range.high, 1_300.0);
    assert_close(var.range.low_pct, -0.1);
    assert_close(var.range.high_pct, 0.3);
}

#[test]
fn test_time_series_widens_swing() {
    let constant = transform_input_to_analysis_variable(&ProjectInput::new("o", "o", "opex", 200.0));
    let series = transform_input_to_analysis_variable(
        &ProjectInput::new("o", "o", "opex", 200.0).with_data_type(DataType::TimeSeries),
    );

    assert_close(constant.range.low, 170.0);
    assert_close(constant.range.high, 230.0);
    assert_close(series.range.low, 155.0);
    assert_close(series.range.high, 245.0);
}

#[test]
fn test_absolute_swings_respect_floor() {
    let rate = transform_input_to_analysis_variable(&ProjectInput::new("r", "r", "discount_rate", 1.0));
    assert_close(rate.range.low, 0.0);
    assert_close(rate.range.high, 3.0);

    let life = transform_input_to_analysis_variable(&ProjectInput::new("l", "l", "project_life", 3.0));
    assert_close(life.range.low, 1.0);
    assert_close(life.range.high, 8.0);

    let wide = transform_input_to_analysis_variable(&ProjectInput::new("l", "l", "project_life", 25.0));
    assert_close(wide.range.low, 20.0);
    assert_close(wide.range.high, 30.0);
    assert_close(wide.range.low_pct, -0.2);
}

#[test]
fn test_negative_base_keeps_bounds_ordered() {
    let var = transform_input_to_analysis_variable(&ProjectInput::new("rev", "rev", "revenue", -100.0));

    assert_close(var.range.low, -120.0);
    assert_close(var.range.high, -80.0);
    assert!(var.range.low <= var.range.high);
    assert_close(var.range.low_pct, -0.2);
    assert_close(var.range.high_pct, 0.2);
}

#[test]
fn test_unknown_combination_uses_default_range() {
    let var = transform_input_to_analysis_variable(
        &ProjectInput::new("m", "Misc", "land_lease", 50.0)
            .with_data_type(DataType::Other("monthly_profile".to_string())),
    );

    assert_close(var.range.low, 45.0);
    assert_close(var.range.high, 55.0);
    assert_eq!(Swing::for_category("land_lease"), crate::transform::DEFAULT_SWING);
}

#[test]
fn test_zero_and_non_finite_values() {
    let zero = transform_input_to_analysis_variable(&ProjectInput::new("z", "z", "capex", 0.0));
    assert_eq!(zero.range.low, 0.0);
    assert_eq!(zero.range.high, 0.0);
    assert_eq!(zero.range.low_pct, 0.0);
    assert_eq!(zero.range.high_pct, 0.0);

    let nan = transform_input_to_analysis_variable(&ProjectInput::new("n", "n", "opex", f64::NAN));
    assert_eq!(nan.base_value, 0.0);
    assert_eq!(nan.range.width(), 0.0);
}

#[test]
fn test_catalog_appends_derived_metrics() {
    let inputs = vec![
        ProjectInput::new("capex", "Capital cost", "capex", 1_000.0),
        ProjectInput::new("production", "Annual output", "production", 100.0),
    ];

    let catalog = AnalysisCatalog::build(&inputs, at(0));

    assert_eq!(catalog.len(), 4);
    let ids: Vec<&str> = catalog.variables.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["capex", "production", LCOE_ID, LCOH_ID]);

    let lcoe = catalog.get(&InputId::new(LCOE_ID)).unwrap();
    assert_eq!(lcoe.base_value, catalog.metrics.lcoe);
    assert_eq!(lcoe.unit, "$/MWh");
}

#[test]
fn test_catalog_select_skips_unknown_ids() {
    let inputs = vec![ProjectInput::new("capex", "Capital cost", "capex", 1_000.0)];
    let catalog = AnalysisCatalog::build(&inputs, at(0));

    let picked = catalog.select(["capex", "missing", LCOH_ID]);
    let ids: Vec<&str> = picked.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["capex", LCOH_ID]);
}

#[test]
fn test_catalog_every_variable_traces_to_a_source() {
    let inputs = vec![
        ProjectInput::new("a", "A", "opex", 1.0),
        ProjectInput::new("b", "B", "anything", 2.0),
    ];
    let catalog = AnalysisCatalog::build(&inputs, at(0));

    for var in &catalog.variables {
        let from_input = inputs.iter().any(|i| i.id == var.id);
        assert!(from_input || var.id.is_derived(), "invented id {}", var.id);
    }
}

#[test]
fn test_catalog_drops_inputs_with_reserved_ids() {
    let inputs = vec![
        ProjectInput::new("capex", "Capital cost", "capex", 1_000.0),
        ProjectInput::new("production", "Annual output", "production", 100.0),
        ProjectInput::new(LCOE_ID, "Hand-entered LCOE", "other", 999.0),
    ];

    let catalog = AnalysisCatalog::build(&inputs, at(0));

    let lcoe_count = catalog
        .variables
        .iter()
        .filter(|v| v.id.as_str() == LCOE_ID)
        .count();
    assert_eq!(lcoe_count, 1, "two variables share id {LCOE_ID}");
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.shadowed, vec![InputId::new(LCOE_ID)]);

    let lcoe = catalog.get(&InputId::new(LCOE_ID)).unwrap();
    assert_eq!(lcoe.base_value, catalog.metrics.lcoe);
    assert_ne!(lcoe.base_value, 999.0);
}
