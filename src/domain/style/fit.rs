// SPDX-License-Identifier: MPL-2.0
//! How the image fills its frame.

use std::fmt;
use std::str::FromStr;

/// Image fit mode, mirroring the CSS `object-fit` keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FitMode {
    #[default]
    Cover,
    Contain,
    Fill,
    None,
    ScaleDown,
}

impl FitMode {
    pub const ALL: [FitMode; 5] = [
        FitMode::Cover,
        FitMode::Contain,
        FitMode::Fill,
        FitMode::None,
        FitMode::ScaleDown,
    ];

    /// Returns the CSS keyword for this mode.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            FitMode::Cover => "cover",
            FitMode::Contain => "contain",
            FitMode::Fill => "fill",
            FitMode::None => "none",
            FitMode::ScaleDown => "scale-down",
        }
    }
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Error returned for an unknown fit keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFitMode(pub String);

impl fmt::Display for UnknownFitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown fit mode: {:?}", self.0)
    }
}

impl std::error::Error for UnknownFitMode {}

impl FromStr for FitMode {
    type Err = UnknownFitMode;

    /// Accepts the CSS keywords case-insensitively; `scale_down` and
    /// `scaledown` are tolerated for `scale-down`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cover" => Ok(FitMode::Cover),
            "contain" => Ok(FitMode::Contain),
            "fill" => Ok(FitMode::Fill),
            "none" => Ok(FitMode::None),
            "scale-down" | "scale_down" | "scaledown" => Ok(FitMode::ScaleDown),
            _ => Err(UnknownFitMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_keywords_parse_back_to_the_same_mode() {
        for mode in FitMode::ALL {
            assert_eq!(mode.as_css().parse::<FitMode>(), Ok(mode));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Contain".parse::<FitMode>(), Ok(FitMode::Contain));
        assert_eq!(" SCALE_DOWN ".parse::<FitMode>(), Ok(FitMode::ScaleDown));
    }

    #[test]
    fn unknown_keyword_is_rejected() {
        assert!("stretch".parse::<FitMode>().is_err());
    }

    #[test]
    fn default_is_cover() {
        assert_eq!(FitMode::default(), FitMode::Cover);
    }
}
