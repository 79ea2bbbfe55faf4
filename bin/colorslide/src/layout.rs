//! Where everything goes on screen, relative to the centre of the terminal.

use colorslide::{Component, Edit, Representation, Summary};
use euclid::{point2, size2};

pub type Point = euclid::default::Point2D<i32>;
pub type Rect = euclid::default::Rect<i32>;

/// Width of a slider track, in cells. One extra cell is drawn past the end
/// so the thumb can reach a value of exactly 1.
pub const SLIDER_WIDTH: i32 = 32;

pub const TITLE: &str = concat!("colorslide v", env!("CARGO_PKG_VERSION"));

const SWATCH_WIDTH: i32 = 54;
const SWATCH_HEIGHT: i32 = 27;

/// Rows of the summary line and the first slider of each representation,
/// relative to the vertical centre. Sliders are two rows apart.
const ROWS: [(Representation, i32, i32); 3] = [
    (Representation::Rgba, -12, -10),
    (Representation::Hsl, -2, 0),
    (Representation::Cmyk, 6, 8),
];

/// A slider controlling one channel of one representation.
#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    pub representation: Representation,
    pub channel: usize,
    /// The cells covered by the slider, including the extra end cell.
    pub rect: Rect,
}

impl Slider {
    /// The channel value for a pointer in column `x`.
    pub fn value_at(&self, x: i32) -> Component {
        (x - self.rect.min_x()) as Component / SLIDER_WIDTH as Component
    }

    /// Offset of the cell that shows `value`.
    pub fn thumb(&self, value: Component) -> i32 {
        (value * SLIDER_WIDTH as Component).floor() as i32
    }

    /// The edit produced by a pointer in column `x`.
    pub fn edit_at(&self, x: i32) -> Edit {
        Edit::new(self.representation, self.channel, self.value_at(x))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub title: Point,
    pub swatch: Rect,
    pub summaries: Vec<(Summary, Point)>,
    pub sliders: Vec<Slider>,
}

impl Layout {
    pub fn new(columns: u16, rows: u16) -> Self {
        let columns = columns as i32;
        let rows = rows as i32;

        let center_x = |width: i32| (columns - width) / 2;
        let center_y = |height: i32| (rows - height) / 2;

        let slider_x = center_x(SLIDER_WIDTH) + 24;
        let middle = center_y(1);

        let mut summaries: Vec<(Summary, Point)> = Vec::with_capacity(4);
        let mut sliders = Vec::new();

        for (representation, summary_row, slider_row) in ROWS {
            summaries.push((representation.into(), point2(slider_x, middle + summary_row)));

            sliders.extend((0..representation.channel_count()).map(|channel| Slider {
                representation,
                channel,
                rect: Rect::new(
                    point2(slider_x, middle + slider_row + 2 * channel as i32),
                    size2(SLIDER_WIDTH + 1, 1),
                ),
            }));
        }

        summaries.push((Summary::Hex, point2(center_x(56), center_y(0) + 15)));

        Self {
            title: point2(center_x(TITLE.len() as i32), center_y(30)),
            swatch: Rect::new(
                point2(center_x(SWATCH_WIDTH) - 22, center_y(26)),
                size2(SWATCH_WIDTH, SWATCH_HEIGHT),
            ),
            summaries,
            sliders,
        }
    }

    /// The slider under the given cell, if any.
    pub fn slider_at(&self, point: Point) -> Option<&Slider> {
        self.sliders.iter().find(|s| s.rect.contains(point))
    }
}
