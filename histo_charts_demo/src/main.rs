// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Histogram demos for `histo_charts`.
//!
//! Each input file holds a JSON property update (the same shape the component accepts). With no
//! inputs, the built-in fixtures are rendered instead.

mod svg;

use std::path::{Path, PathBuf};

use clap::Parser;
use histo_charts::{ChartEvent, EventFn, Histogram, HistogramError, PropertyUpdate};

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid property file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("chart '{name}' rejected its properties: {source}")]
    Chart {
        name: String,
        #[source]
        source: HistogramError,
    },
}

#[derive(Parser, Debug)]
#[command(name = "histo_charts_demo")]
#[command(about = "Render histogram property files to SVG")]
struct Cli {
    /// JSON property files; renders the built-in fixtures when empty.
    files: Vec<PathBuf>,

    /// Directory the SVG files are written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

const SINGLE_SERIES: &str = r#"{
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

const OVERLAPPING: &str = r#"{
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

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        tracing::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init();
}

fn run(cli: &Cli) -> Result<(), DemoError> {
    std::fs::create_dir_all(&cli.out_dir).map_err(|source| DemoError::Io {
        path: cli.out_dir.clone(),
        source,
    })?;

    if cli.files.is_empty() {
        for (name, json) in [
            ("histogram_single", SINGLE_SERIES),
            ("histogram_overlap", OVERLAPPING),
        ] {
            let update = serde_json::from_str(json).map_err(|source| DemoError::Json {
                path: PathBuf::from(name),
                source,
            })?;
            render_to_file(name, update, &cli.out_dir)?;
        }
        return Ok(());
    }

    for path in &cli.files {
        let text = std::fs::read_to_string(path).map_err(|source| DemoError::Io {
            path: path.clone(),
            source,
        })?;
        let update = serde_json::from_str(&text).map_err(|source| DemoError::Json {
            path: path.clone(),
            source,
        })?;
        let name = path
            .file_stem()
            .map_or_else(|| String::from("histogram"), |s| s.to_string_lossy().into_owned());
        render_to_file(&name, update, &cli.out_dir)?;
    }
    Ok(())
}

fn render_to_file(name: &str, update: PropertyUpdate, out_dir: &Path) -> Result<(), DemoError> {
    let mut histo = Histogram::new();
    histo
        .set_properties(update)
        .map_err(|source| DemoError::Chart {
            name: name.to_string(),
            source,
        })?;

    let bars = histo.render(&mut EventFn(|event: ChartEvent| {
        tracing::debug!(chart = name, event = event.name(), "chart event");
    }));
    let svg = svg::SvgScene::from_chart(histo.state(), &bars).to_svg_string();

    let path = out_dir.join(format!("{name}.svg"));
    std::fs::write(&path, svg).map_err(|source| DemoError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        bars = bars.len(),
        series = histo.state().complete_series_config.len(),
        "wrote chart"
    );
    Ok(())
}
