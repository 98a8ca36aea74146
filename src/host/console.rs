// SPDX-License-Identifier: MPL-2.0
//! A rendering surface that prints directives as text.

use crate::application::port::{CrossOrigin, RenderingSurface, Visibility};
use crate::presentation::Presentation;
use std::io::Write;

/// Writes one line per directive to `out`.
///
/// Write errors are logged and otherwise ignored: a broken pipe must not
/// take the widget down.
#[derive(Debug)]
pub struct ConsoleSurface<W: Write> {
    out: W,
    source: Option<String>,
}

impl<W: Write> ConsoleSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, source: None }
    }

    /// The most recently assigned source.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Consumes the surface, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        if let Err(err) = writeln!(self.out, "{text}") {
            log::error!("Console surface write failed: {err}");
        }
    }
}

impl<W: Write> RenderingSurface for ConsoleSurface<W> {
    fn set_source(&mut self, source: &str, cross_origin: CrossOrigin) {
        self.source = Some(source.to_string());
        match cross_origin.attribute() {
            Some(mode) => self.line(format_args!("src = {source} (crossorigin={mode})")),
            None => self.line(format_args!("src = {source}")),
        }
    }

    fn set_visibility(&mut self, visibility: &Visibility) {
        self.line(format_args!("visibility: {visibility}"));
    }

    fn apply_presentation(&mut self, presentation: &Presentation) {
        self.line(format_args!(
            "style: alt={:?} {}",
            presentation.alt_text,
            presentation.inline_style()
        ));
        if let Some(rule) = presentation.hover_css() {
            self.line(format_args!("hover: {rule}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn output(surface: ConsoleSurface<Vec<u8>>) -> String {
        String::from_utf8(surface.into_inner()).expect("utf8")
    }

    #[test]
    fn prints_source_with_cross_origin() {
        let mut surface = ConsoleSurface::new(Vec::new());
        surface.set_source("a.png", CrossOrigin::None);
        surface.set_source("b.png", CrossOrigin::Anonymous);
        assert_eq!(surface.source(), Some("b.png"));
        assert_eq!(
            output(surface),
            "src = a.png\nsrc = b.png (crossorigin=anonymous)\n"
        );
    }

    #[test]
    fn prints_visibility_and_style() {
        let mut surface = ConsoleSurface::new(Vec::new());
        surface.set_visibility(&Visibility::loading());
        surface.apply_presentation(&Presentation::from_settings(&Settings::default(), "img"));
        let text = output(surface);
        assert!(text.starts_with("visibility: spinner shown, image hidden, error hidden\n"));
        assert!(text.contains("style: alt=\"Image\" border-radius: 0px;"));
        assert!(!text.contains("hover:"));
    }
}
