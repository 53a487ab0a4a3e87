//! Shared types used across the crate.
//! `Mode` selects the shape family the `primitive` tool draws with; its numeric
//! code is what ends up on the tool's command line.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Combo,
    Triangle,
    Rect,
    Ellipse,
    Circle,
    RotatedRect,
    Beziers,
    RotatedEllipse,
    Polygon,
}

impl Mode {
    pub const ALL: [Mode; 9] = [
        Mode::Combo,
        Mode::Triangle,
        Mode::Rect,
        Mode::Ellipse,
        Mode::Circle,
        Mode::RotatedRect,
        Mode::Beziers,
        Mode::RotatedEllipse,
        Mode::Polygon,
    ];

    /// Numeric value passed to `primitive -m`.
    pub fn code(self) -> u8 {
        match self {
            Mode::Combo => 0,
            Mode::Triangle => 1,
            Mode::Rect => 2,
            Mode::Ellipse => 3,
            Mode::Circle => 4,
            Mode::RotatedRect => 5,
            Mode::Beziers => 6,
            Mode::RotatedEllipse => 7,
            Mode::Polygon => 8,
        }
    }

    pub fn from_code(code: u8) -> Result<Self> {
        Mode::ALL
            .into_iter()
            .find(|m| m.code() == code)
            .ok_or(Error::InvalidArgument {
                arg: "mode",
                value: code.to_string(),
            })
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Mode::Combo => "Combo",
            Mode::Triangle => "Triangle",
            Mode::Rect => "Rect",
            Mode::Ellipse => "Ellipse",
            Mode::Circle => "Circle",
            Mode::RotatedRect => "RotatedRect",
            Mode::Beziers => "Beziers",
            Mode::RotatedEllipse => "RotatedEllipse",
            Mode::Polygon => "Polygon",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_tool_numbering() {
        let codes: Vec<u8> = Mode::ALL.iter().map(|m| m.code()).collect();
        assert_eq!(codes, (0..=8).collect::<Vec<u8>>());
        assert_eq!(Mode::Triangle.code(), 1);
        assert_eq!(Mode::Polygon.code(), 8);
    }

    #[test]
    fn from_code_rejects_unknown_values() {
        assert_eq!(Mode::from_code(5).unwrap(), Mode::RotatedRect);
        assert!(matches!(
            Mode::from_code(9),
            Err(Error::InvalidArgument { arg: "mode", .. })
        ));
    }

    #[test]
    fn serde_uses_kebab_case_names() {
        let json = serde_json::to_string(&Mode::RotatedEllipse).unwrap();
        assert_eq!(json, "\"rotated-ellipse\"");
        let back: Mode = serde_json::from_str("\"beziers\"").unwrap();
        assert_eq!(back, Mode::Beziers);
    }
}
