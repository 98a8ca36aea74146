// SPDX-License-Identifier: MPL-2.0
//! Application layer - the seams between the controller and its host.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Host adapters implement application layer ports
//! - The controller drives ports and never names a concrete adapter

pub mod port;
