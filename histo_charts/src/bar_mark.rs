// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar geometry from stacked spans.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use histo_transforms::{Record, StackedSeries};
use kurbo::Rect;
use peniko::Color;

use crate::scale::{ScaleBand, ScaleLinear};

/// A single bar, ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct BarMark {
    /// Series name (the series config key).
    pub series: String,
    /// Ordinal value of the source record.
    pub ordinal: f64,
    /// `[baseline, value]` in data units.
    pub span: [f64; 2],
    /// Index of the source record.
    pub row: usize,
    /// Bar rectangle in view coordinates.
    pub rect: Rect,
    /// Fill color.
    pub fill: Color,
    /// Rendering order hint.
    pub z_index: i32,
}

/// Generates vertical bars for one stacked series.
///
/// The horizontal position comes from the ordinal field of each span's source record; the
/// vertical extent comes from the span itself.
#[derive(Clone, Debug)]
pub struct BarMarkSpec<'a> {
    /// Band scale used for bar positions along x.
    pub band: &'a ScaleBand,
    /// Linear scale used for bar positions along y.
    pub y_scale: &'a ScaleLinear,
    /// Record field holding the ordinal value.
    pub ordinal_key: &'a str,
    /// Fill paint for bars.
    pub fill: Color,
    /// Rendering order hint.
    pub z_index: i32,
}

impl<'a> BarMarkSpec<'a> {
    /// Creates a bar spec with a default fill.
    pub fn new(band: &'a ScaleBand, y_scale: &'a ScaleLinear, ordinal_key: &'a str) -> Self {
        Self {
            band,
            y_scale,
            ordinal_key,
            fill: Color::BLACK,
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates one bar per span whose record has an ordinal value in the band domain.
    ///
    /// `data` must be the slice `series` was laid out from.
    pub fn marks(&self, name: &str, series: &StackedSeries, data: &[Record]) -> Vec<BarMark> {
        let bw = self.band.band_width();
        series
            .points
            .iter()
            .filter_map(|p| {
                let ordinal = data.get(p.row)?.get(self.ordinal_key)?;
                let x0 = self.band.position(ordinal)?;
                let a = self.y_scale.map(p.bottom());
                let b = self.y_scale.map(p.top());
                Some(BarMark {
                    series: String::from(name),
                    ordinal,
                    span: p.span(),
                    row: p.row,
                    rect: Rect::new(x0, a.min(b), x0 + bw, a.max(b)),
                    fill: self.fill,
                    z_index: self.z_index,
                })
            })
            .collect()
    }
}
