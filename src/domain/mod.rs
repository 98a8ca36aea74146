// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core widget logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`LoadError`](error::LoadError))
//! - [`load`]: Load pipeline types ([`LoadState`](load::LoadState),
//!   [`RetryBudget`](load::RetryBudget), [`PendingRequest`](load::PendingRequest))
//! - [`style`]: Presentation value objects ([`HexColor`](style::HexColor),
//!   [`OpacityPercent`](style::OpacityPercent), [`FitMode`](style::FitMode))

pub mod error;
pub mod load;
pub mod style;
