//! Background-color policy for project display.
//!
//! Projects carry a `default_bg_color` column holding one of a small
//! fixed set of names; the gallery frontend maps these to its theme.

use crate::error::CoreError;

/// Neutral theme background.
pub const BG_DEFAULT: &str = "default";

/// Forced black background.
pub const BG_BLACK: &str = "black";

/// Forced white background.
pub const BG_WHITE: &str = "white";

/// Validate that `color` is one of `"default"`, `"black"`, `"white"`.
pub fn validate_bg_color(color: &str) -> Result<(), CoreError> {
    BgColor::from_name(color).map(|_| ())
}

/// Background color enum matching the `default_bg_color` column values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BgColor {
    #[default]
    Default,
    Black,
    White,
}

impl BgColor {
    /// Parse from the database column value.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            BG_DEFAULT => Ok(Self::Default),
            BG_BLACK => Ok(Self::Black),
            BG_WHITE => Ok(Self::White),
            other => Err(CoreError::Validation(format!(
                "Invalid background color '{other}'. Must be one of: {BG_DEFAULT}, {BG_BLACK}, {BG_WHITE}"
            ))),
        }
    }

    /// The column value for this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => BG_DEFAULT,
            Self::Black => BG_BLACK,
            Self::White => BG_WHITE,
        }
    }
}
