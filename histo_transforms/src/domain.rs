// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Domain inference over records and stacked spans.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::record::Record;
use crate::stack::StackedSeries;

/// Distinct values of `field`, in first-seen order.
///
/// Records that do not carry a finite value for `field` are skipped. `-0.0` and `0.0` are the
/// same category.
pub fn ordinal_domain(data: &[Record], field: &str) -> Vec<f64> {
    let mut seen: HashSet<u64> = HashSet::new();
    let mut out = Vec::new();
    for record in data {
        let Some(v) = record.get(field) else {
            continue;
        };
        let v = if v == 0.0 { 0.0 } else { v };
        if seen.insert(v.to_bits()) {
            out.push(v);
        }
    }
    out
}

/// Infer a `(min, max)` extent over every span endpoint of the given series.
///
/// Non-finite values are ignored. Returns `None` if no finite values are present.
pub fn value_extent<'a>(series: impl IntoIterator<Item = &'a StackedSeries>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for s in series {
        for p in &s.points {
            for v in p.span() {
                if !v.is_finite() {
                    continue;
                }
                min = min.min(v);
                max = max.max(v);
            }
        }
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

/// Anchors an extent at zero: `[min(0, lo), hi]`.
///
/// An empty extent becomes `(0, 0)`.
pub fn zero_based(extent: Option<(f64, f64)>) -> (f64, f64) {
    match extent {
        Some((lo, hi)) => (lo.min(0.0), hi),
        None => (0.0, 0.0),
    }
}
