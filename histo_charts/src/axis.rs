// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis typing and tick generation.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::scale::{ScaleBand, ScaleLinear};

/// The kind of scale an axis is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisType {
    /// Categorical bands (the ordinal axis).
    #[serde(rename = "scaleBand")]
    ScaleBand,
    /// Continuous linear values (the value axis).
    #[serde(rename = "linear")]
    Linear,
}

impl AxisType {
    /// The axis type name as used in chart configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ScaleBand => "scaleBand",
            Self::Linear => "linear",
        }
    }
}

impl core::fmt::Display for AxisType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tick along an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Tick value in data units.
    pub value: f64,
    /// Tick position in range units.
    ///
    /// For band axes this is the band center.
    pub position: f64,
    /// Formatted label.
    pub label: String,
}

/// One tick per band, centered in the band.
pub fn band_ticks(scale: &ScaleBand) -> Vec<AxisTick> {
    let half = scale.band_width() * 0.5;
    scale
        .domain()
        .iter()
        .enumerate()
        .map(|(i, &value)| AxisTick {
            value,
            position: scale.x(i) + half,
            label: format_tick(value),
        })
        .collect()
}

/// Nice ticks over a linear scale's domain.
///
/// Ticks that fall outside the domain (nice ticks round outward) are dropped.
pub fn linear_ticks(scale: &ScaleLinear, count: usize) -> Vec<AxisTick> {
    let (d0, d1) = scale.domain();
    let (lo, hi) = (d0.min(d1), d0.max(d1));
    let eps = (hi - lo).abs() * 1e-9;
    scale
        .ticks(count)
        .into_iter()
        .filter(|&v| v >= lo - eps && v <= hi + eps)
        .map(|value| AxisTick {
            value,
            position: scale.map(value),
            label: format_tick(value),
        })
        .collect()
}

/// Formats a tick value: integers without a fraction, others with at most two decimals.
pub fn format_tick(v: f64) -> String {
    let r = v.round();
    if (v - r).abs() < 1e-9 {
        // Adding zero folds `-0` into `0`.
        return alloc::format!("{}", r + 0.0);
    }
    let s = alloc::format!("{v:.2}");
    String::from(s.trim_end_matches('0').trim_end_matches('.'))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn axis_type_names() {
        assert_eq!(AxisType::ScaleBand.as_str(), "scaleBand");
        assert_eq!(AxisType::Linear.as_str(), "linear");
        assert_eq!(
            serde_json::to_string(&AxisType::ScaleBand).unwrap(),
            "\"scaleBand\""
        );
    }

    #[test]
    fn tick_labels() {
        assert_eq!(format_tick(22.0), "22");
        assert_eq!(format_tick(-0.0), "0");
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(0.1 + 0.2), "0.3");
    }

    #[test]
    fn band_ticks_sit_at_band_centers() {
        let band = ScaleBand::new(vec![1.0, 2.0], (0.0, 20.0)).with_padding(0.0, 0.0);
        let ticks = band_ticks(&band);
        assert_eq!(ticks.len(), 2);
        assert_eq!(ticks[0].position, 5.0);
        assert_eq!(ticks[1].position, 15.0);
        assert_eq!(ticks[1].label, "2");
    }

    #[test]
    fn linear_ticks_stay_inside_domain() {
        let y = ScaleLinear::new((0.0, 22.0), (100.0, 0.0));
        let values: alloc::vec::Vec<f64> = linear_ticks(&y, 5).iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0.0, 5.0, 10.0, 15.0, 20.0]);
    }
}
