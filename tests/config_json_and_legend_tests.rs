use trend_chart::api::{
    ChartConfig, DatasetConfig, LegendEntry, legend_entries, render_legend, render_line_chart,
};
use trend_chart::core::{DataValue, PaddingOverrides, RangeOverride};
use trend_chart::host::{HeadlessHost, LegendContainer};
use trend_chart::render::NullRenderer;

const UPSTREAM_PAYLOAD: &str = r##"{
    "labels": ["2024-01-01", "2024-01-08", "2024-01-15"],
    "datasets": [
        {
            "label": "Volume",
            "color": "#20c997",
            "unit": "kg",
            "lineWidth": 3,
            "pointRadius": 4,
            "data": [1200, null, "1350.5"],
            "raw": ["1.200", null, "1.350,5"]
        },
        { "data": [5, 6, 7] }
    ],
    "padding": { "left": 48 },
    "yRange": null,
    "yTicks": 4
}"##;

#[test]
fn upstream_payload_parses_with_defaults() {
    let config = ChartConfig::from_json_str(UPSTREAM_PAYLOAD).expect("config");

    assert_eq!(config.labels.len(), 3);
    assert_eq!(config.padding, PaddingOverrides::default().with_left(48.0));
    assert_eq!(config.y_range, None);
    assert_eq!(config.y_ticks, Some(4));

    let volume = &config.datasets[0];
    assert_eq!(volume.effective_line_width(), 3.0);
    assert_eq!(volume.effective_point_radius(), 4.0);
    assert_eq!(volume.data[1], DataValue::Missing);
    assert_eq!(
        volume.raw.as_ref().map(|raw| raw[2].clone()),
        Some(DataValue::from("1.350,5"))
    );
    assert_eq!(config.datasets[1].label, "Series");
    assert_eq!(config.datasets[1].color, "#0d6efd");
}

#[test]
fn partial_y_range_is_ignored_in_favor_of_auto_fit() {
    let config = ChartConfig::from_json_str(
        r#"{ "labels": ["a", "b"], "datasets": [{ "data": [2, 8] }], "yRange": { "min": 0 } }"#,
    )
    .expect("config");
    assert_eq!(
        config.y_range,
        Some(RangeOverride {
            min: Some(0.0),
            max: None
        })
    );

    let mut chart = render_line_chart(
        Some(NullRenderer::with_client_size(300.0, 200.0)),
        HeadlessHost::new(),
        config,
    )
    .expect("chart init");
    chart.on_animation_frame().expect("frame");
    let range = chart.y_range().expect("range");
    assert_eq!((range.min, range.max), (2.0, 8.0));
}

#[test]
fn mistyped_payload_still_renders() {
    let config = ChartConfig::from_json_str(
        r#"{
            "labels": ["a", "b", "c"],
            "datasets": [
                { "label": "flags", "data": [1, true, false] },
                { "label": "empty", "data": null }
            ],
            "yTicks": 2.5
        }"#,
    )
    .expect("config");

    let mut chart = render_line_chart(
        Some(NullRenderer::with_client_size(300.0, 200.0)),
        HeadlessHost::new(),
        config,
    )
    .expect("chart init");
    assert!(chart.on_animation_frame().expect("frame"));

    let datasets = chart.rendered_datasets();
    assert_eq!(datasets[0].data, vec![Some(1.0), Some(1.0), Some(0.0)]);
    assert!(!datasets[1].has_points());
    assert_eq!(chart.config().y_ticks, Some(2));
}

#[test]
fn config_round_trips_through_json() {
    let config = ChartConfig::new(["a", "b"])
        .with_dataset(
            DatasetConfig::new("s", [Some(1.0), None])
                .with_unit("h")
                .with_raw(["1h"]),
        )
        .with_padding(PaddingOverrides::default().with_top(10.0))
        .with_y_range(0.0, 5.0)
        .with_y_ticks(3)
        .with_y_formatter(|value| format!("{value}"));

    let json = config.to_json_pretty().expect("serialize");
    assert!(!json.contains("formatter"));
    let restored = ChartConfig::from_json_str(&json).expect("parse");

    assert_eq!(restored.labels, config.labels);
    assert_eq!(restored.datasets, config.datasets);
    assert_eq!(restored.padding, config.padding);
    assert_eq!(restored.y_range, config.y_range);
    assert_eq!(restored.y_ticks, Some(3));
    assert!(restored.y_formatter.is_none());
}

#[test]
fn legend_lists_rendered_datasets_in_order() {
    let mut chart = render_line_chart(
        Some(NullRenderer::with_client_size(300.0, 200.0)),
        HeadlessHost::new(),
        ChartConfig::from_json_str(UPSTREAM_PAYLOAD).expect("config"),
    )
    .expect("chart init");
    chart.on_animation_frame().expect("frame");
    let snapshot = chart.last_snapshot().expect("snapshot");

    let mut container = vec![LegendEntry {
        color: "#000".to_owned(),
        label: "stale".to_owned(),
    }];
    render_legend(Some(&mut container), &snapshot.datasets);

    assert_eq!(
        container,
        vec![
            LegendEntry {
                color: "#20c997".to_owned(),
                label: "Volume".to_owned(),
            },
            LegendEntry {
                color: "#0d6efd".to_owned(),
                label: "Series".to_owned(),
            },
        ]
    );
    assert_eq!(legend_entries(&snapshot.datasets), container);
}

#[derive(Default)]
struct CountingLegend {
    replacements: usize,
    entries: Vec<LegendEntry>,
}

impl LegendContainer for CountingLegend {
    fn replace_entries(&mut self, entries: Vec<LegendEntry>) {
        self.replacements += 1;
        self.entries = entries;
    }
}

#[test]
fn missing_legend_container_is_a_no_op() {
    render_legend::<CountingLegend>(None, &[]);

    let mut legend = CountingLegend::default();
    render_legend(Some(&mut legend), &[]);
    assert_eq!(legend.replacements, 1);
    assert!(legend.entries.is_empty());
}
