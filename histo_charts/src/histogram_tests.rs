// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec;
use alloc::vec::Vec;

use histo_transforms::Record;

use peniko::Color;

use crate::{
    AxisType, BarMark, ChartEvent, EventFn, Histogram, HistogramError, HistogramProperties,
    Palette, PropertyUpdate, Size, derive_chart_state,
};

fn histogram_from_json(json: &str) -> (Histogram, Vec<ChartEvent>, Vec<BarMark>) {
    let update: PropertyUpdate = serde_json::from_str(json).unwrap();
    let mut histo = Histogram::new();
    histo.set_properties(update).unwrap();
    let mut events = Vec::new();
    let bars = histo.render(&mut events);
    (histo, events, bars)
}

const BASIC: &str = r#"{
    "width": 1000,
    "height": 500,
    "preventResize": true,
    "margin": {"left": 100, "top": 10, "bottom": 50, "right": 30},
    "chartData": [
        {"ord": 1, "val": 10},
        {"ord": 2, "val": 15},
        {"ord": 3, "val": 22},
        {"ord": 4, "val": 10},
        {"ord": 5, "val": 5}
    ],
    "seriesConfig": {"histo": {"x": "ord", "y": "val"}}
}"#;

const OVERLAP: &str = r#"{
    "width": 1000,
    "height": 500,
    "preventResize": true,
    "margin": {"left": 100, "top": 10, "bottom": 50, "right": 30},
    "chartData": [
        {"ord": 1, "val": 10},
        {"ord": 2, "val": 15, "val2": 8},
        {"ord": 3, "val": 22, "val2": 18},
        {"ord": 4, "val": 10, "val2": 27},
        {"ord": 5, "val": 5, "val2": 16},
        {"ord": 6, "val2": 12}
    ],
    "seriesConfig": {
        "histo": {"x": "ord", "y": "val"},
        "overlap": {"x": "ord", "y": "val2"}
    },
    "overlapingHistograms": true
}"#;

// Same chart as `OVERLAP`, with missing values spelled as JSON `null`.
const OVERLAP_WITH_NULLS: &str = r#"{
    "width": 1000,
    "height": 500,
    "preventResize": true,
    "margin": {"left": 100, "top": 10, "bottom": 50, "right": 30},
    "chartData": [
        {"ord": 1, "val": 10, "val2": null},
        {"ord": 2, "val": 15, "val2": 8},
        {"ord": 3, "val": 22, "val2": 18},
        {"ord": 4, "val": 10, "val2": 27},
        {"ord": 5, "val": 5, "val2": 16},
        {"ord": 6, "val": null, "val2": 12}
    ],
    "seriesConfig": {
        "histo": {"x": "ord", "y": "val"},
        "overlap": {"x": "ord", "y": "val2"}
    },
    "overlapingHistograms": true
}"#;

fn spans(series: &histo_transforms::StackedSeries) -> Vec<[f64; 2]> {
    series.spans().collect()
}

#[test]
fn basic_axis_types() {
    let (histo, _, _) = histogram_from_json(BASIC);
    assert_eq!(histo.state().x_axis_type, AxisType::ScaleBand);
    assert_eq!(histo.state().y_axis_type.as_str(), "linear");
}

#[test]
fn basic_complete_series_config() {
    let (histo, _, _) = histogram_from_json(BASIC);
    let histo_series = &histo.state().complete_series_config["histo"];
    assert_eq!(histo_series.css_color(), "rgb(90,191,248)");
    assert_eq!(histo_series.name, "histo");
    assert_eq!(histo_series.kind.as_str(), "bar");
    assert_eq!(histo_series.x, "ord");
    assert_eq!(histo_series.y, "val");
}

#[test]
fn basic_stacked_chart_data() {
    let (histo, _, _) = histogram_from_json(BASIC);
    let state = histo.state();
    assert_eq!(state.stacked_chart_data.len(), 1);
    let stacked = &state.stacked_chart_data[0];
    assert_eq!(
        spans(stacked),
        vec![[0.0, 10.0], [0.0, 15.0], [0.0, 22.0], [0.0, 10.0], [0.0, 5.0]]
    );
    assert_eq!(stacked.key, "val");
    assert_eq!(stacked.index, 0);

    let data = &histo.properties().chart_data;
    assert_eq!(
        stacked.datum(data, 0),
        Some(&Record::new().with("ord", 1.0).with("val", 10.0))
    );
    assert_eq!(
        stacked.datum(data, 4),
        Some(&Record::new().with("ord", 5.0).with("val", 5.0))
    );
    assert!(state.overlap_data.is_empty());
}

#[test]
fn basic_ordinal_key_extents_and_scales() {
    let (histo, _, _) = histogram_from_json(BASIC);
    let state = histo.state();
    assert_eq!(state.ordinal_key.as_deref(), Some("ord"));
    assert_eq!(state.data_extents.x, None);
    assert_eq!(state.data_extents.y, (0.0, 22.0));
    assert_eq!(state.x.domain(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(state.y.domain(), (0.0, 22.0));
}

#[test]
fn basic_scales_span_the_plot() {
    let (histo, _, _) = histogram_from_json(BASIC);
    let state = histo.state();
    assert_eq!(state.x.range(), (100.0, 970.0));
    assert_eq!(state.y.range(), (450.0, 10.0));
    assert_eq!(state.y.map(0.0), 450.0);
    assert_eq!(state.y.map(22.0), 10.0);
}

#[test]
fn basic_render_emits_colors_then_rendering_ended() {
    let (_, events, bars) = histogram_from_json(BASIC);
    assert_eq!(
        events,
        vec![
            ChartEvent::ColorsApplied,
            ChartEvent::RenderingEnded { bars: 5 }
        ]
    );
    assert_eq!(bars.len(), 5);

    // The tallest bar (ord 3, val 22) reaches the top of the plot.
    let tallest = &bars[2];
    assert_eq!(tallest.ordinal, 3.0);
    assert!((tallest.rect.y0 - 10.0).abs() < 1e-9);
    assert!((tallest.rect.y1 - 450.0).abs() < 1e-9);
    // Bars are ordered left to right and share the band width.
    for pair in bars.windows(2) {
        assert!(pair[0].rect.x0 < pair[1].rect.x0);
        assert!((pair[0].rect.width() - pair[1].rect.width()).abs() < 1e-9);
    }
}

#[test]
fn overlap_axis_types_and_series_config() {
    let (histo, _, _) = histogram_from_json(OVERLAP);
    let state = histo.state();
    assert_eq!(state.x_axis_type.as_str(), "scaleBand");
    assert_eq!(state.y_axis_type, AxisType::Linear);

    let first = &state.complete_series_config["histo"];
    assert_eq!(first.css_color(), "rgb(90,191,248)");
    assert_eq!(first.name, "histo");
    assert_eq!(first.y, "val");

    let second = &state.complete_series_config["overlap"];
    assert_eq!(second.css_color(), "rgb(226,141,23)");
    assert_eq!(second.name, "overlap");
    assert_eq!(second.kind.as_str(), "bar");
    assert_eq!(second.x, "ord");
    assert_eq!(second.y, "val2");
}

#[test]
fn overlap_has_no_summed_stack() {
    let (histo, _, _) = histogram_from_json(OVERLAP);
    assert!(histo.state().stacked_chart_data.is_empty());
    assert_eq!(histo.state().ordinal_key.as_deref(), Some("ord"));
}

#[test]
fn overlap_scales_use_the_largest_single_series_value() {
    let (histo, _, _) = histogram_from_json(OVERLAP);
    let state = histo.state();
    assert_eq!(state.x.domain(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(state.y.domain(), (0.0, 27.0));
}

#[test]
fn overlap_data_is_per_series_and_present_only() {
    let (histo, _, _) = histogram_from_json(OVERLAP);
    let state = histo.state();
    let data = &histo.properties().chart_data;

    let first = &state.overlap_data["histo"];
    assert_eq!(first.len(), 1);
    assert_eq!(
        spans(&first[0]),
        vec![[0.0, 10.0], [0.0, 15.0], [0.0, 22.0], [0.0, 10.0], [0.0, 5.0]]
    );
    assert_eq!(first[0].key, "val");
    assert_eq!(first[0].index, 0);
    assert_eq!(
        first[0].datum(data, 0),
        Some(&Record::new().with("ord", 1.0).with("val", 10.0))
    );
    assert_eq!(
        first[0].datum(data, 4),
        Some(&Record::new().with("ord", 5.0).with("val", 5.0).with("val2", 16.0))
    );

    let second = &state.overlap_data["overlap"];
    assert_eq!(
        spans(&second[0]),
        vec![[0.0, 8.0], [0.0, 18.0], [0.0, 27.0], [0.0, 16.0], [0.0, 12.0]]
    );
    assert_eq!(second[0].key, "val2");
    assert_eq!(second[0].index, 0);
    assert_eq!(
        second[0].datum(data, 0),
        Some(&Record::new().with("ord", 2.0).with("val", 15.0).with("val2", 8.0))
    );
    assert_eq!(
        second[0].datum(data, 4),
        Some(&Record::new().with("ord", 6.0).with("val2", 12.0))
    );
}

#[test]
fn overlap_bars_are_translucent_and_layered() {
    let (_, events, bars) = histogram_from_json(OVERLAP);
    assert_eq!(events.last(), Some(&ChartEvent::RenderingEnded { bars: 10 }));

    let first: Vec<_> = bars.iter().filter(|b| b.series == "histo").collect();
    let second: Vec<_> = bars.iter().filter(|b| b.series == "overlap").collect();
    assert_eq!(first.len(), 5);
    assert_eq!(second.len(), 5);
    assert!(second.iter().all(|b| b.z_index > first[0].z_index));
    assert!(first.iter().all(|b| b.fill.to_rgba8().a < 255));

    // Overlapping bars at the same ordinal share the same band.
    let a = first.iter().find(|b| b.ordinal == 2.0).unwrap();
    let b = second.iter().find(|b| b.ordinal == 2.0).unwrap();
    assert_eq!(a.rect.x0, b.rect.x0);
    assert_eq!(a.rect.x1, b.rect.x1);
}

#[test]
fn switching_modes_rederives_state() {
    let (mut histo, _, _) = histogram_from_json(OVERLAP);
    histo
        .set_properties(PropertyUpdate {
            overlapping_histograms: Some(false),
            ..PropertyUpdate::default()
        })
        .unwrap();
    let state = histo.state();
    assert!(state.overlap_data.is_empty());
    assert_eq!(state.stacked_chart_data.len(), 2);
    // Row sums: 10, 23, 40, 37, 21, 12.
    assert_eq!(state.y.domain(), (0.0, 40.0));
    assert_eq!(spans(&state.stacked_chart_data[1])[0], [10.0, 10.0]);
}

#[test]
fn rejected_update_keeps_previous_state() {
    let (mut histo, _, _) = histogram_from_json(BASIC);
    let before = histo.state().clone();
    let err = histo
        .set_properties(PropertyUpdate {
            width: Some(-1.0),
            chart_data: Some(vec![]),
            ..PropertyUpdate::default()
        })
        .unwrap_err();
    assert_eq!(
        err,
        HistogramError::InvalidDimension {
            name: "width",
            value: -1.0
        }
    );
    assert_eq!(histo.state(), &before);
    assert_eq!(histo.properties().chart_data.len(), 5);
}

#[test]
fn prevent_resize_ignores_container_size() {
    let (mut histo, _, _) = histogram_from_json(BASIC);
    assert!(!histo.resize(Size::new(300.0, 200.0)).unwrap());
    assert_eq!(histo.properties().width, 1000.0);

    histo
        .set_properties(PropertyUpdate {
            prevent_resize: Some(false),
            ..PropertyUpdate::default()
        })
        .unwrap();
    assert!(histo.resize(Size::new(300.0, 200.0)).unwrap());
    assert_eq!(histo.state().x.range(), (100.0, 270.0));
    assert_eq!(histo.state().y.range(), (150.0, 10.0));
}

#[test]
fn closure_sink_sees_events_in_order() {
    let (histo, _, _) = histogram_from_json(BASIC);
    let mut names = Vec::new();
    histo.render(&mut EventFn(|e: ChartEvent| names.push(e.name())));
    assert_eq!(names, ["colors-applied", "rendering-ended"]);
}

#[test]
fn empty_histogram_still_completes_a_render() {
    let histo = Histogram::new();
    let mut events = Vec::new();
    assert!(histo.render(&mut events).is_empty());
    assert_eq!(
        events,
        vec![
            ChartEvent::ColorsApplied,
            ChartEvent::RenderingEnded { bars: 0 }
        ]
    );
}

#[test]
fn null_values_read_as_missing() {
    let (with_nulls, _, nulls_bars) = histogram_from_json(OVERLAP_WITH_NULLS);
    let (without, _, bars) = histogram_from_json(OVERLAP);
    assert_eq!(with_nulls.properties(), without.properties());
    assert_eq!(with_nulls.state(), without.state());
    assert_eq!(nulls_bars, bars);
    assert_eq!(with_nulls.state().overlap_data["overlap"][0].len(), 5);
}

#[test]
fn default_histogram_matches_derived_default_state() {
    let derived = derive_chart_state(&HistogramProperties::default()).unwrap();
    assert_eq!(Histogram::new().state(), &derived);
    assert_eq!(Histogram::default().state(), &derived);
}

static MONO: [Color; 2] = [
    Color::from_rgb8(10, 20, 30),
    Color::from_rgb8(40, 50, 60),
];

#[test]
fn custom_palette_colors_default_series() {
    let update: PropertyUpdate = serde_json::from_str(OVERLAP).unwrap();
    let mut props = HistogramProperties::default();
    update.apply_to(&mut props);

    let histo = Histogram::with_properties(props)
        .unwrap()
        .with_palette(Palette::new(&MONO))
        .unwrap();
    let config = &histo.state().complete_series_config;
    assert_eq!(config["histo"].css_color(), "rgb(10,20,30)");
    assert_eq!(config["overlap"].css_color(), "rgb(40,50,60)");

    let bars = histo.render(&mut ());
    let fill = bars.iter().find(|b| b.series == "overlap").unwrap().fill;
    assert_eq!(fill.to_rgba8().r, 40);
}

#[test]
fn custom_palette_survives_property_updates() {
    let mut histo = Histogram::new().with_palette(Palette::new(&MONO)).unwrap();
    histo
        .set_properties(serde_json::from_str(BASIC).unwrap())
        .unwrap();
    assert_eq!(
        histo.state().complete_series_config["histo"].css_color(),
        "rgb(10,20,30)"
    );
}
