// SPDX-License-Identifier: MPL-2.0
//! Load pipeline domain types.
//!
//! The three pieces that replace ad-hoc retry flags: the [`LoadState`]
//! machine, the one-shot [`RetryBudget`] and the [`PendingRequest`] tag used
//! to discard stale surface callbacks.

pub mod budget;
pub mod request;
pub mod state;

pub use budget::RetryBudget;
pub use request::PendingRequest;
pub use state::{LoadPhase, LoadState};
