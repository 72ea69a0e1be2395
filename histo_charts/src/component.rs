// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stateful histogram component.
//!
//! A [`Histogram`] owns its properties and the state derived from them. Every property change
//! re-derives the whole state; a failed change leaves both untouched.

extern crate alloc;

use alloc::vec::Vec;

use crate::bar_mark::{BarMark, BarMarkSpec};
use crate::error::HistogramResult;
use crate::event::{ChartEvent, EventSink};
use crate::histogram::{ChartState, HistogramProperties, PropertyUpdate, derive_chart_state_with};
use crate::layout::Size;
use crate::series::Palette;
use crate::z_order;

/// Fill alpha for bars in overlap mode, so later series don't hide earlier ones.
pub const OVERLAP_FILL_ALPHA: f32 = 0.6;

/// A histogram chart: properties in, chart state and bars out.
#[derive(Clone, Debug)]
pub struct Histogram {
    props: HistogramProperties,
    palette: Palette,
    state: ChartState,
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Histogram {
    /// Creates a histogram with default properties.
    pub fn new() -> Self {
        let props = HistogramProperties::default();
        let palette = Palette::default();
        let state = ChartState::empty(&props);
        Self {
            props,
            palette,
            state,
        }
    }

    /// Creates a histogram from a full property set.
    pub fn with_properties(props: HistogramProperties) -> HistogramResult<Self> {
        let palette = Palette::default();
        let state = derive_chart_state_with(&props, &palette)?;
        Ok(Self {
            props,
            palette,
            state,
        })
    }

    /// Replaces the palette default series colors are taken from.
    pub fn with_palette(mut self, palette: Palette) -> HistogramResult<Self> {
        self.state = derive_chart_state_with(&self.props, &palette)?;
        self.palette = palette;
        Ok(self)
    }

    /// Current properties.
    pub fn properties(&self) -> &HistogramProperties {
        &self.props
    }

    /// State derived from the current properties.
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    /// Applies a partial property update and re-derives the state.
    ///
    /// On error the previous properties and state are kept.
    pub fn set_properties(&mut self, update: PropertyUpdate) -> HistogramResult<()> {
        if update.is_empty() {
            return Ok(());
        }
        let mut props = self.props.clone();
        update.apply_to(&mut props);
        let state = derive_chart_state_with(&props, &self.palette)?;
        self.props = props;
        self.state = state;
        Ok(())
    }

    /// Reacts to a container size change.
    ///
    /// Returns `Ok(false)` without changing anything when `prevent_resize` is set.
    pub fn resize(&mut self, size: Size) -> HistogramResult<bool> {
        if self.props.prevent_resize {
            tracing::trace!(?size, "resize ignored");
            return Ok(false);
        }
        self.set_properties(PropertyUpdate {
            width: Some(size.width),
            height: Some(size.height),
            ..PropertyUpdate::default()
        })?;
        Ok(true)
    }

    /// Generates bars for the current state.
    ///
    /// Emits [`ChartEvent::ColorsApplied`] once every series fill is resolved, then
    /// [`ChartEvent::RenderingEnded`] once the geometry is built.
    pub fn render(&self, events: &mut dyn EventSink) -> Vec<BarMark> {
        let state = &self.state;
        let Some(ordinal_key) = state.ordinal_key.as_deref() else {
            emit(events, ChartEvent::ColorsApplied);
            emit(events, ChartEvent::RenderingEnded { bars: 0 });
            return Vec::new();
        };

        let overlapping = state.is_overlapping();
        let series: Vec<_> = state
            .series_stacks()
            .filter_map(|(name, stack)| {
                let style = state.complete_series_config.get(name)?;
                let (fill, z_index) = if overlapping {
                    let index = state.complete_series_config.get_index_of(name)?;
                    let z = z_order::SERIES_FILL.saturating_add(i32::try_from(index).ok()?);
                    (style.color.with_alpha(OVERLAP_FILL_ALPHA), z)
                } else {
                    (style.color, z_order::SERIES_FILL)
                };
                Some((name, stack, fill, z_index))
            })
            .collect();
        emit(events, ChartEvent::ColorsApplied);

        let mut bars = Vec::new();
        for (name, stack, fill, z_index) in series {
            let spec = BarMarkSpec::new(&state.x, &state.y, ordinal_key)
                .with_fill(fill)
                .with_z_index(z_index);
            bars.extend(spec.marks(name, stack, &self.props.chart_data));
        }
        emit(events, ChartEvent::RenderingEnded { bars: bars.len() });
        bars
    }
}

fn emit(events: &mut dyn EventSink, event: ChartEvent) {
    tracing::trace!(event = event.name(), "histogram event");
    events.emit(event);
}
