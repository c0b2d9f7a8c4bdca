use boxstack_rs::api::{
    Axes, BoxSeriesConfig, BoxStackSeries, ChartState, STACK_SERIES_RENDER_JSON_SCHEMA_V1,
};
use boxstack_rs::core::{
    AxisData, BoxSeriesData, ConnectorStyle, Orientation, PlotRect, Stack, StackSeriesData,
};
use boxstack_rs::StackSeriesRender;

fn state() -> ChartState {
    let data = StackSeriesData::new(
        vec![
            BoxSeriesData::new("Budget", vec![3000.0, 1000.0]),
            BoxSeriesData::new("Income", vec![4000.0, 2000.0]),
        ],
        Stack::normal().with_connector(ConnectorStyle::default()),
        false,
    )
    .expect("stack data");
    ChartState::new(
        PlotRect::new(0.0, 0.0, 500.0, 200.0),
        Axes {
            x_axis: AxisData::from_values(&[0.0, 5000.0, 10_000.0], 0.0),
            y_axis: AxisData::new(vec!["A".into(), "B".into()], 3, 100.0),
        },
    )
    .with_colors(["#00a9ff", "#ffb840"])
    .with_categories(["A", "B"])
    .with_stack_series("bar", data)
}

fn rendered() -> StackSeriesRender {
    BoxStackSeries::new("bar", BoxSeriesConfig::bar())
        .render(&state())
        .expect("render")
        .expect("series present")
}

#[test]
fn contract_v1_round_trips_a_render() {
    let output = rendered();
    let json = output.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));

    let parsed = StackSeriesRender::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, output);
}

#[test]
fn bare_payload_is_accepted() {
    let output = rendered();
    let json = output.to_json_pretty().expect("serialize");
    let parsed = StackSeriesRender::from_json_compat_str(&json).expect("parse bare");
    assert_eq!(parsed, output);
}

#[test]
fn models_carry_painter_type_tags() {
    let value = serde_json::to_value(rendered()).expect("to value");
    assert_eq!(value["models"]["clipRect"][0]["type"], "clipRectArea");
    assert_eq!(value["models"]["series"][0]["type"], "rect");
    assert_eq!(value["models"]["connector"][0]["type"], "line");
    assert_eq!(value["responders"][0]["data"]["label"], "Budget");
    assert_eq!(STACK_SERIES_RENDER_JSON_SCHEMA_V1, 1);
}

#[test]
fn series_config_defaults_apply_to_sparse_json() {
    let config: BoxSeriesConfig =
        serde_json::from_str(r#"{"orientation":"bar"}"#).expect("config");
    assert_eq!(config.orientation, Orientation::Bar);
    assert_eq!(config.padding, 5.0);
    assert_eq!(config.hover_thickness, 4.0);
    assert_eq!(config.axis_thickness, 1.0);

    let config: BoxSeriesConfig =
        serde_json::from_str(r#"{"padding":8,"hoverThickness":2}"#).expect("config");
    assert_eq!(config.orientation, Orientation::Column);
    assert_eq!(config.padding, 8.0);
    assert_eq!(config.hover_thickness, 2.0);
}

#[test]
fn stack_false_is_rejected() {
    let err = serde_json::from_str::<Stack>("false").expect_err("not a stack");
    assert!(err.to_string().contains("does not describe a stacked series"));
}

#[test]
fn chart_state_json_round_trips_and_renders() {
    let json = serde_json::to_string(&state()).expect("serialize state");
    let parsed: ChartState = serde_json::from_str(&json).expect("parse state");
    assert_eq!(parsed, state());

    let output = BoxStackSeries::new("bar", BoxSeriesConfig::bar())
        .render(&parsed)
        .expect("render")
        .expect("series present");
    assert_eq!(output, rendered());
}

#[test]
fn chart_state_with_inconsistent_stack_series_is_rejected() {
    let mut value = serde_json::to_value(state()).expect("state to value");
    // Drop Income from the raw series but keep it in the stacked values.
    value["stackSeries"]["bar"]["data"]
        .as_array_mut()
        .expect("series array")
        .pop();

    let err = serde_json::from_value::<ChartState>(value).expect_err("inconsistent state");
    assert!(err.to_string().contains("stack data does not match its series"));
}
