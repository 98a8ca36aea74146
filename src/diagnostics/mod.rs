// SPDX-License-Identifier: MPL-2.0
//! Diagnostic tracing for the load pipeline.
//!
//! Every transition of the controller is recorded as a [`DiagnosticEvent`]
//! in a memory-bounded [`CircularBuffer`] and can be exported as JSON. This
//! is a debugging aid only; no behavior depends on it.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds
//! - [`DiagnosticEvent`]: A recorded event with sequence and timestamp
//! - [`Recorder`]: Buffer owner used by the controller

mod buffer;
mod events;
mod recorder;

pub use buffer::{buffer_capacity_bounds, BufferCapacity, CircularBuffer};
pub use events::{Attempt, DiagnosticEvent, DiagnosticEventKind, Outcome};
pub use recorder::Recorder;
