// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Histogram properties and the derived chart state.
//!
//! [`derive_chart_state`] is a pure function of [`HistogramProperties`]: it completes the series
//! config, stacks (or overlaps) the series, and instantiates both scales over the plot
//! rectangle. Everything downstream (bars, axes) reads from the resulting [`ChartState`].

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use histo_transforms::{
    FieldMap, Record, StackLayout, StackOffset, StackedSeries, ordinal_domain, value_extent,
    zero_based,
};
use serde::{Deserialize, Serialize};

use crate::axis::AxisType;
use crate::error::{HistogramError, HistogramResult};
use crate::layout::{ChartLayout, Margin, Size};
use crate::scale::{ScaleBand, ScaleBandSpec, ScaleLinear, ScaleLinearSpec};
use crate::series::{Palette, SeriesConfig, SeriesStyle, complete_series_config};

/// Default inner and outer band padding.
pub const DEFAULT_BAR_PADDING: f64 = 0.1;

/// Target tick count for the value axis.
pub const VALUE_TICK_COUNT: usize = 5;

/// Every input a histogram derives its state from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HistogramProperties {
    /// Outer chart width.
    pub width: f64,
    /// Outer chart height.
    pub height: f64,
    /// Space reserved around the plot.
    pub margin: Margin,
    /// Keep `width`/`height` fixed when the container reports a new size.
    pub prevent_resize: bool,
    /// The records to chart.
    pub chart_data: Vec<Record>,
    /// Series by name.
    pub series_config: FieldMap<SeriesConfig>,
    /// Draw each series as an independent histogram instead of stacking them.
    #[serde(rename = "overlapingHistograms", alias = "overlappingHistograms")]
    pub overlapping_histograms: bool,
    /// Inner and outer band padding, in band units.
    pub bar_padding: f64,
    /// Baseline mode for stacked series.
    pub stack_offset: StackOffset,
    /// Extend the value domain outward to round tick values.
    pub nice_value_axis: bool,
}

impl Default for HistogramProperties {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            margin: Margin::default(),
            prevent_resize: false,
            chart_data: Vec::new(),
            series_config: FieldMap::default(),
            overlapping_histograms: false,
            bar_padding: DEFAULT_BAR_PADDING,
            stack_offset: StackOffset::Cumulative,
            nice_value_axis: false,
        }
    }
}

impl HistogramProperties {
    /// Checks the layout parameters.
    pub fn validate(&self) -> HistogramResult<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(HistogramError::InvalidDimension { name, value });
            }
        }
        for (side, value) in self.margin.sides() {
            if !value.is_finite() || value < 0.0 {
                return Err(HistogramError::InvalidMargin { side, value });
            }
        }
        if !(0.0..1.0).contains(&self.bar_padding) {
            return Err(HistogramError::InvalidBarPadding(self.bar_padding));
        }
        Ok(())
    }

    /// The outer view size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// A partial property assignment.
///
/// Unset fields keep their current value when applied.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyUpdate {
    /// New outer width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// New outer height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// New margin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    /// New resize policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevent_resize: Option<bool>,
    /// New records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_data: Option<Vec<Record>>,
    /// New series config.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_config: Option<FieldMap<SeriesConfig>>,
    /// New overlap mode.
    #[serde(
        rename = "overlapingHistograms",
        alias = "overlappingHistograms",
        skip_serializing_if = "Option::is_none"
    )]
    pub overlapping_histograms: Option<bool>,
    /// New band padding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_padding: Option<f64>,
    /// New stack baseline mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_offset: Option<StackOffset>,
    /// New value axis rounding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nice_value_axis: Option<bool>,
}

impl PropertyUpdate {
    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Writes every set field into `props`.
    pub fn apply_to(self, props: &mut HistogramProperties) {
        let Self {
            width,
            height,
            margin,
            prevent_resize,
            chart_data,
            series_config,
            overlapping_histograms,
            bar_padding,
            stack_offset,
            nice_value_axis,
        } = self;
        if let Some(v) = width {
            props.width = v;
        }
        if let Some(v) = height {
            props.height = v;
        }
        if let Some(v) = margin {
            props.margin = v;
        }
        if let Some(v) = prevent_resize {
            props.prevent_resize = v;
        }
        if let Some(v) = chart_data {
            props.chart_data = v;
        }
        if let Some(v) = series_config {
            props.series_config = v;
        }
        if let Some(v) = overlapping_histograms {
            props.overlapping_histograms = v;
        }
        if let Some(v) = bar_padding {
            props.bar_padding = v;
        }
        if let Some(v) = stack_offset {
            props.stack_offset = v;
        }
        if let Some(v) = nice_value_axis {
            props.nice_value_axis = v;
        }
    }
}

/// Numeric data extents per axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataExtents {
    /// The ordinal axis has no numeric extent.
    pub x: Option<(f64, f64)>,
    /// Value extent, anchored at zero.
    pub y: (f64, f64),
}

/// Everything derived from a set of [`HistogramProperties`].
#[derive(Clone, Debug, PartialEq)]
pub struct ChartState {
    /// Series config with color, name and type resolved.
    pub complete_series_config: FieldMap<SeriesStyle>,
    /// Field the bars are placed by: the first series' `x`.
    pub ordinal_key: Option<String>,
    /// One stacked series per configured series (empty in overlap mode).
    pub stacked_chart_data: Vec<StackedSeries>,
    /// Independent stacks by series name (empty unless in overlap mode).
    pub overlap_data: FieldMap<Vec<StackedSeries>>,
    /// Scale type of the ordinal axis.
    pub x_axis_type: AxisType,
    /// Scale type of the value axis.
    pub y_axis_type: AxisType,
    /// Zero-anchored data extents, before any axis rounding.
    pub data_extents: DataExtents,
    /// Ordinal band scale.
    pub x: ScaleBand,
    /// Value scale.
    pub y: ScaleLinear,
    /// View and plot rectangles.
    pub layout: ChartLayout,
}

impl ChartState {
    /// State for properties with no series: empty domains over the laid-out plot.
    pub(crate) fn empty(props: &HistogramProperties) -> Self {
        let layout = ChartLayout::arrange(props.size(), props.margin);
        Self {
            complete_series_config: FieldMap::default(),
            ordinal_key: None,
            stacked_chart_data: Vec::new(),
            overlap_data: FieldMap::default(),
            x_axis_type: AxisType::ScaleBand,
            y_axis_type: AxisType::Linear,
            data_extents: DataExtents {
                x: None,
                y: (0.0, 0.0),
            },
            x: ScaleBand::new(Vec::new(), layout.x_range())
                .with_padding(props.bar_padding, props.bar_padding),
            y: ScaleLinear::new((0.0, 0.0), layout.y_range()),
            layout,
        }
    }

    /// Returns `true` if the state was derived in overlap mode.
    pub fn is_overlapping(&self) -> bool {
        !self.overlap_data.is_empty()
    }

    /// Every stacked series with the name of the series it belongs to, in draw order.
    pub fn series_stacks(&self) -> impl Iterator<Item = (&str, &StackedSeries)> + '_ {
        let stacked = self
            .complete_series_config
            .keys()
            .zip(&self.stacked_chart_data)
            .map(|(name, s)| (name.as_str(), s));
        let overlapped = self
            .overlap_data
            .iter()
            .flat_map(|(name, stacks)| stacks.iter().map(move |s| (name.as_str(), s)));
        stacked.chain(overlapped)
    }
}

/// Derives chart state with the default palette.
pub fn derive_chart_state(props: &HistogramProperties) -> HistogramResult<ChartState> {
    derive_chart_state_with(props, &Palette::default())
}

/// Derives chart state, taking default series colors from `palette`.
pub fn derive_chart_state_with(
    props: &HistogramProperties,
    palette: &Palette,
) -> HistogramResult<ChartState> {
    props.validate()?;
    let data = props.chart_data.as_slice();

    let complete_series_config = complete_series_config(&props.series_config, palette);
    let ordinal_key = props.series_config.values().next().map(|s| s.x.clone());
    if let Some(key) = ordinal_key.as_deref() {
        for (name, s) in props.series_config.iter().skip(1) {
            if s.x != key {
                tracing::warn!(
                    series = %name,
                    x = %s.x,
                    ordinal_key = key,
                    "series x field differs from the ordinal key; bars use the ordinal key"
                );
            }
        }
    }

    let (stacked_chart_data, overlap_data, extent) = if props.overlapping_histograms {
        let overlap: FieldMap<Vec<StackedSeries>> = complete_series_config
            .iter()
            .map(|(name, style)| {
                let stacks = StackLayout::new([style.y.as_str()])
                    .with_offset(props.stack_offset)
                    .present_only(true)
                    .layout(data);
                (name.clone(), stacks)
            })
            .collect();
        let extent = value_extent(overlap.values().flatten());
        (Vec::new(), overlap, extent)
    } else if complete_series_config.is_empty() {
        (Vec::new(), FieldMap::default(), None)
    } else {
        let stacked = StackLayout::new(complete_series_config.values().map(|s| s.y.as_str()))
            .with_offset(props.stack_offset)
            .layout(data);
        let extent = value_extent(&stacked);
        (stacked, FieldMap::default(), extent)
    };

    let y_domain = zero_based(extent);
    let x_domain = ordinal_key
        .as_deref()
        .map(|key| ordinal_domain(data, key))
        .unwrap_or_default();

    let layout = ChartLayout::arrange(props.size(), props.margin);
    let x = ScaleBandSpec::new(x_domain)
        .with_padding(props.bar_padding, props.bar_padding)
        .instantiate(layout.x_range());
    let y = ScaleLinearSpec::new(y_domain)
        .with_nice(props.nice_value_axis)
        .instantiate(layout.y_range(), VALUE_TICK_COUNT);

    tracing::debug!(
        series = complete_series_config.len(),
        records = data.len(),
        bands = x.count(),
        y_min = y.domain().0,
        y_max = y.domain().1,
        overlapping = props.overlapping_histograms,
        "derived histogram state"
    );

    Ok(ChartState {
        complete_series_config,
        ordinal_key,
        stacked_chart_data,
        overlap_data,
        x_axis_type: AxisType::ScaleBand,
        y_axis_type: AxisType::Linear,
        data_extents: DataExtents {
            x: None,
            y: y_domain,
        },
        x,
        y,
        layout,
    })
}
