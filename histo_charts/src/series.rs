// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series configuration and display defaults.
//!
//! Users describe series as a name-keyed map of `{x, y}` field mappings. Completing that map
//! fills in the display metadata (color, name, type) every series needs before it can be drawn.

extern crate alloc;

use alloc::string::String;

use histo_transforms::FieldMap;
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use serde::{Deserialize, Serialize, Serializer};

/// How a series is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum SeriesKind {
    /// Vertical bars.
    #[default]
    Bar,
}

impl SeriesKind {
    /// The kind name as used in chart configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
        }
    }
}

/// A user-supplied series entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Ordinal field.
    pub x: String,
    /// Value field.
    pub y: String,
    /// CSS color; defaults to the palette entry at the series' position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Display name; defaults to the series key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Series kind; defaults to [`SeriesKind::Bar`].
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SeriesKind>,
}

impl SeriesConfig {
    /// Creates a series mapping `x` (ordinal) to `y` (value).
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            ..Self::default()
        }
    }

    /// Sets an explicit CSS color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets an explicit display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A fully-resolved series entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesStyle {
    /// Ordinal field.
    pub x: String,
    /// Value field.
    pub y: String,
    /// Resolved fill color.
    #[serde(serialize_with = "serialize_css")]
    pub color: Color,
    /// Display name.
    pub name: String,
    /// Series kind.
    #[serde(rename = "type")]
    pub kind: SeriesKind,
}

impl SeriesStyle {
    /// The color as a CSS `rgb(r,g,b)` (or `rgba(...)` when translucent) string.
    pub fn css_color(&self) -> String {
        css_color(self.color)
    }
}

/// Formats a color as a CSS functional notation string without spaces.
pub fn css_color(color: Color) -> String {
    let c = color.to_rgba8();
    if c.a == 255 {
        alloc::format!("rgb({},{},{})", c.r, c.g, c.b)
    } else {
        let a = f64::from(c.a) / 255.0;
        alloc::format!("rgba({},{},{},{a:.3})", c.r, c.g, c.b)
    }
}

fn serialize_css<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&css_color(*color))
}

/// The default sequential series palette.
///
/// Series take colors by position; the palette repeats once exhausted.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: &'static [Color],
}

const DATA_VIS_COLORS: [Color; 10] = [
    Color::from_rgb8(90, 191, 248),
    Color::from_rgb8(226, 141, 23),
    Color::from_rgb8(136, 138, 242),
    Color::from_rgb8(123, 188, 0),
    Color::from_rgb8(230, 117, 178),
    Color::from_rgb8(46, 193, 182),
    Color::from_rgb8(243, 81, 89),
    Color::from_rgb8(240, 196, 0),
    Color::from_rgb8(167, 106, 230),
    Color::from_rgb8(56, 110, 207),
];

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: &DATA_VIS_COLORS,
        }
    }
}

impl Palette {
    /// Uses a custom color list. An empty list falls back to the default palette.
    pub fn new(colors: &'static [Color]) -> Self {
        if colors.is_empty() {
            Self::default()
        } else {
            Self { colors }
        }
    }

    /// Color for the series at `index`.
    pub fn color(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    /// Number of distinct colors before the palette repeats.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; a palette holds at least one color.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Resolves every series entry, filling in defaults.
///
/// Output order matches `config` order.
pub fn complete_series_config(
    config: &FieldMap<SeriesConfig>,
    palette: &Palette,
) -> FieldMap<SeriesStyle> {
    config
        .iter()
        .enumerate()
        .map(|(i, (key, series))| {
            let color = match series.color.as_deref() {
                None => palette.color(i),
                Some(css) => match parse_color(css) {
                    Ok(c) => c.to_alpha_color::<Srgb>(),
                    Err(err) => {
                        tracing::warn!(series = %key, color = css, ?err, "unparseable series color");
                        palette.color(i)
                    }
                },
            };
            let style = SeriesStyle {
                x: series.x.clone(),
                y: series.y.clone(),
                color,
                name: series.name.clone().unwrap_or_else(|| key.clone()),
                kind: series.kind.unwrap_or_default(),
            };
            (key.clone(), style)
        })
        .collect()
}
