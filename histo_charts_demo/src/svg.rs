// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `histo_charts_demo`.

use std::fmt::Write as _;

use histo_charts::{
    AXIS_LABELS, AXIS_RULES, BarMark, ChartState, GRID_LINES, PLOT_BACKGROUND, VALUE_TICK_COUNT,
    band_ticks, linear_ticks,
};
use kurbo::{Line, Point, Rect};
use peniko::Color;
use peniko::color::palette::css;

const FONT_SIZE: f64 = 11.0;
const TICK_LEN: f64 = 5.0;

#[derive(Clone, Copy, Debug)]
enum Anchor {
    Middle,
    End,
}

#[derive(Clone, Debug)]
enum Element {
    Rect {
        rect: Rect,
        fill: Color,
    },
    Line {
        line: Line,
        stroke: Color,
    },
    Text {
        pos: Point,
        anchor: Anchor,
        hanging: bool,
        text: String,
    },
}

/// A flat list of z-ordered SVG elements.
#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    elements: Vec<(i32, Element)>,
    view_box: Option<Rect>,
}

impl SvgScene {
    /// Builds a scene from a derived chart state and its bars.
    pub(crate) fn from_chart(state: &ChartState, bars: &[BarMark]) -> Self {
        let mut scene = Self::default();
        let plot = state.layout.plot;
        scene.set_view_box(state.layout.view);
        scene.push(
            PLOT_BACKGROUND,
            Element::Rect {
                rect: plot,
                fill: css::WHITE,
            },
        );

        for bar in bars {
            scene.push(
                bar.z_index,
                Element::Rect {
                    rect: bar.rect,
                    fill: bar.fill,
                },
            );
        }

        for tick in linear_ticks(&state.y, VALUE_TICK_COUNT) {
            let y = tick.position;
            scene.push(
                GRID_LINES,
                Element::Line {
                    line: Line::new((plot.x0, y), (plot.x1, y)),
                    stroke: css::GAINSBORO,
                },
            );
            scene.push(
                AXIS_RULES,
                Element::Line {
                    line: Line::new((plot.x0 - TICK_LEN, y), (plot.x0, y)),
                    stroke: css::BLACK,
                },
            );
            scene.push(
                AXIS_LABELS,
                Element::Text {
                    pos: Point::new(plot.x0 - TICK_LEN - 2.0, y),
                    anchor: Anchor::End,
                    hanging: false,
                    text: tick.label,
                },
            );
        }

        for tick in band_ticks(&state.x) {
            let x = tick.position;
            scene.push(
                AXIS_RULES,
                Element::Line {
                    line: Line::new((x, plot.y1), (x, plot.y1 + TICK_LEN)),
                    stroke: css::BLACK,
                },
            );
            scene.push(
                AXIS_LABELS,
                Element::Text {
                    pos: Point::new(x, plot.y1 + TICK_LEN + 2.0),
                    anchor: Anchor::Middle,
                    hanging: true,
                    text: tick.label,
                },
            );
        }

        scene.push(
            AXIS_RULES,
            Element::Line {
                line: Line::new((plot.x0, plot.y0), (plot.x0, plot.y1)),
                stroke: css::BLACK,
            },
        );
        scene.push(
            AXIS_RULES,
            Element::Line {
                line: Line::new((plot.x0, plot.y1), (plot.x1, plot.y1)),
                stroke: css::BLACK,
            },
        );
        scene
    }

    pub(crate) fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    fn push(&mut self, z_index: i32, element: Element) {
        self.elements.push((z_index, element));
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self
            .view_box
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = writeln!(
            out,
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        );

        // Stable sort: equal z keeps insertion order.
        let mut elements: Vec<_> = self.elements.iter().collect();
        elements.sort_by_key(|(z, _)| *z);

        for (_z, element) in elements {
            match element {
                Element::Rect { rect, fill } => {
                    let _ = write!(
                        out,
                        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                        rect.x0,
                        rect.y0,
                        rect.width(),
                        rect.height(),
                    );
                    write_paint_attr(&mut out, "fill", *fill);
                    out.push_str("/>\n");
                }
                Element::Line { line, stroke } => {
                    let _ = write!(
                        out,
                        r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                        line.p0.x, line.p0.y, line.p1.x, line.p1.y
                    );
                    write_paint_attr(&mut out, "stroke", *stroke);
                    out.push_str("/>\n");
                }
                Element::Text {
                    pos,
                    anchor,
                    hanging,
                    text,
                } => {
                    let baseline = if *hanging { "hanging" } else { "middle" };
                    let anchor = match anchor {
                        Anchor::Middle => "middle",
                        Anchor::End => "end",
                    };
                    let _ = write!(
                        out,
                        r#"<text x="{}" y="{}" font-size="{FONT_SIZE}" dominant-baseline="{baseline}" text-anchor="{anchor}""#,
                        pos.x, pos.y
                    );
                    write_paint_attr(&mut out, "fill", css::BLACK);
                    out.push('>');
                    out.push_str(&escape_xml(text));
                    out.push_str("</text>\n");
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o:.3}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
