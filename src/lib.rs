// SPDX-License-Identifier: MPL-2.0
//! `image_display` drives a single-image display widget embedded in a host
//! page.
//!
//! The host pushes settings updates, a rendering surface reports load
//! outcomes, and the [`controller::ImageLoadController`] in between runs a
//! small state machine: load directly, fall back once to a CORS proxy, then
//! show an error. Styling is a pure projection of the settings
//! ([`presentation::Presentation`]).

#![doc(html_root_url = "https://docs.rs/image_display/0.1.0")]

pub mod application;
pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod host;
pub mod presentation;
pub mod proxy;
pub mod settings;

#[cfg(test)]
mod test_utils;
