//! Single line text summaries of a color.
//!
//! Channel values are scaled and then truncated towards zero, never rounded,
//! so `0.999` of a turn is shown as `359deg`.

use crate::{color::Representation, state::ColorState, Component};

/// The summaries a color can be shown as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Summary {
    /// `#RRGGBBAA`
    Hex,
    /// `rgba(R, G, B, A)` with 8-bit color channels and fractional alpha.
    Rgba,
    /// `hsl(Hdeg, S%, L%)`
    Hsl,
    /// `cmyk(C%, M%, Y%, K%)`
    Cmyk,
}

impl Summary {
    /// Short upper-case name shown in front of the summary.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hex => "HEX",
            Self::Rgba => "RGBA",
            Self::Hsl => "HSL",
            Self::Cmyk => "CMYK",
        }
    }
}

impl From<Representation> for Summary {
    fn from(value: Representation) -> Self {
        match value {
            Representation::Rgba => Self::Rgba,
            Representation::Hsl => Self::Hsl,
            Representation::Cmyk => Self::Cmyk,
        }
    }
}

fn scaled(value: Component, scale: Component) -> i32 {
    (scale * value) as i32
}

impl ColorState {
    /// Format the color as the given summary.
    pub fn summary(&self, summary: Summary) -> String {
        match summary {
            Summary::Hex => {
                let rgba = self.rgba();
                format!(
                    "#{:02X}{:02X}{:02X}{:02X}",
                    scaled(rgba.red, 255.0),
                    scaled(rgba.green, 255.0),
                    scaled(rgba.blue, 255.0),
                    scaled(rgba.alpha, 255.0),
                )
            }
            Summary::Rgba => {
                let rgba = self.rgba();
                format!(
                    "rgba({}, {}, {}, {:.2})",
                    scaled(rgba.red, 255.0),
                    scaled(rgba.green, 255.0),
                    scaled(rgba.blue, 255.0),
                    rgba.alpha,
                )
            }
            Summary::Hsl => {
                let hsl = self.hsl();
                format!(
                    "hsl({}deg, {}%, {}%)",
                    scaled(hsl.hue, 360.0),
                    scaled(hsl.saturation, 100.0),
                    scaled(hsl.lightness, 100.0),
                )
            }
            Summary::Cmyk => {
                let cmyk = self.cmyk();
                format!(
                    "cmyk({}%, {}%, {}%, {}%)",
                    scaled(cmyk.cyan, 100.0),
                    scaled(cmyk.magenta, 100.0),
                    scaled(cmyk.yellow, 100.0),
                    scaled(cmyk.key, 100.0),
                )
            }
        }
    }

    /// Format the color as the given summary, prefixed with its label.
    pub fn labeled_summary(&self, summary: Summary) -> String {
        format!("{}: {}", summary.label(), self.summary(summary))
    }
}
