// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Record tables and stack layouts for histogram charts.
//!
//! This crate provides:
//! - [`Record`], an insertion-ordered `field -> f64` row,
//! - [`StackLayout`], a D3-style stack generator producing `[baseline, value]` spans, and
//! - domain helpers for ordinal (categorical) and value axes.
//!
//! Everything here is a full recompute over the input slice; there is no incremental state.

#![no_std]

extern crate alloc;

mod domain;
mod record;
mod stack;

pub use domain::{ordinal_domain, value_extent, zero_based};
pub use record::{FieldMap, Record};
pub use stack::{StackLayout, StackOffset, StackPoint, StackedSeries};
