// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-pass lifecycle notifications.

extern crate alloc;

use alloc::vec::Vec;

/// A lifecycle notification emitted while rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartEvent {
    /// Series fills have been resolved from the complete series config.
    ColorsApplied,
    /// Bar geometry has been generated.
    RenderingEnded {
        /// Number of bars produced.
        bars: usize,
    },
}

impl ChartEvent {
    /// Stable event name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ColorsApplied => "colors-applied",
            Self::RenderingEnded { .. } => "rendering-ended",
        }
    }
}

/// Receives [`ChartEvent`]s in emission order.
pub trait EventSink {
    /// Handles one event.
    fn emit(&mut self, event: ChartEvent);
}

impl EventSink for Vec<ChartEvent> {
    fn emit(&mut self, event: ChartEvent) {
        self.push(event);
    }
}

/// Discards events.
impl EventSink for () {
    fn emit(&mut self, _event: ChartEvent) {}
}

/// Adapts a closure into an [`EventSink`].
#[derive(Debug)]
pub struct EventFn<F>(pub F);

impl<F: FnMut(ChartEvent)> EventSink for EventFn<F> {
    fn emit(&mut self, event: ChartEvent) {
        (self.0)(event);
    }
}
