// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack layout over record fields.
//!
//! This mirrors D3's `stack` generator: every key produces one series, and every series holds
//! one `[baseline, value]` span per record. Spans keep the row index of the record they came
//! from, so callers can get back to the source datum without cloning it.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Stack baseline offset mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackOffset {
    /// Each series starts where the previous series ended, whatever the sign (D3's
    /// `stackOffsetNone`).
    #[default]
    Cumulative,
    /// Positive values stack upward from 0, negative values stack downward from 0 (D3's
    /// `stackOffsetDiverging`).
    Diverging,
}

/// A single stacked span.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StackPoint {
    /// Where the span starts.
    pub baseline: f64,
    /// Where the span ends (`baseline + datum value`).
    pub value: f64,
    /// Index of the source record in the input data.
    pub row: usize,
}

impl StackPoint {
    /// Returns `[baseline, value]`.
    pub fn span(&self) -> [f64; 2] {
        [self.baseline, self.value]
    }

    /// The larger endpoint.
    pub fn top(&self) -> f64 {
        self.baseline.max(self.value)
    }

    /// The smaller endpoint.
    pub fn bottom(&self) -> f64 {
        self.baseline.min(self.value)
    }
}

/// The stacked spans for one key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StackedSeries {
    /// The record field this series was stacked from.
    pub key: String,
    /// Position of this series among the stacked keys.
    pub index: usize,
    /// Stacked spans, in record order.
    pub points: Vec<StackPoint>,
}

impl StackedSeries {
    /// Number of spans.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if this series has no spans.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over `[baseline, value]` spans.
    pub fn spans(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.points.iter().map(StackPoint::span)
    }

    /// Returns the source record of the `i`th span.
    ///
    /// `data` must be the slice this series was laid out from.
    pub fn datum<'a>(&self, data: &'a [Record], i: usize) -> Option<&'a Record> {
        data.get(self.points.get(i)?.row)
    }
}

/// Configuration for a stack layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackLayout {
    keys: Vec<String>,
    offset: StackOffset,
    present_only: bool,
}

impl StackLayout {
    /// Creates a cumulative layout stacking `keys` in order.
    pub fn new<K: Into<String>>(keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            offset: StackOffset::Cumulative,
            present_only: false,
        }
    }

    /// Sets the baseline offset mode.
    pub fn with_offset(mut self, offset: StackOffset) -> Self {
        self.offset = offset;
        self
    }

    /// When set, a record missing a key's field gets no span in that key's series.
    ///
    /// By default missing values are zero-filled so every series stays aligned to the records.
    pub fn present_only(mut self, present_only: bool) -> Self {
        self.present_only = present_only;
        self
    }

    /// Keys in stacking order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Computes one [`StackedSeries`] per key.
    pub fn layout(&self, data: &[Record]) -> Vec<StackedSeries> {
        let mut series: Vec<StackedSeries> = self
            .keys
            .iter()
            .enumerate()
            .map(|(index, key)| StackedSeries {
                key: key.clone(),
                index,
                points: Vec::with_capacity(data.len()),
            })
            .collect();

        for (row, record) in data.iter().enumerate() {
            let mut up = 0.0;
            let mut down = 0.0;
            for s in &mut series {
                let v = match record.get(&s.key) {
                    Some(v) => v,
                    None if self.present_only => continue,
                    None => 0.0,
                };
                let baseline = match self.offset {
                    StackOffset::Cumulative => up,
                    StackOffset::Diverging if v < 0.0 => down,
                    StackOffset::Diverging => up,
                };
                if self.offset == StackOffset::Diverging && v < 0.0 {
                    down += v;
                } else {
                    up += v;
                }
                s.points.push(StackPoint {
                    baseline,
                    value: baseline + v,
                    row,
                });
            }
        }

        tracing::trace!(
            keys = self.keys.len(),
            rows = data.len(),
            present_only = self.present_only,
            "stack layout"
        );
        series
    }
}
