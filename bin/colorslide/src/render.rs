//! Draw the color state onto the terminal.

use std::io::{self, Write};

use colorslide::{ColorState, Flags, Representation};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal::{Clear, ClearType},
};

use crate::layout::{Layout, Point, Rect, Slider, SLIDER_WIDTH, TITLE};

const TRACK: Color = Color::Rgb {
    r: 99,
    g: 99,
    b: 99,
};
const THUMB: Color = Color::Rgb {
    r: 200,
    g: 200,
    b: 200,
};
const POWERLESS_THUMB: Color = Color::Rgb {
    r: 140,
    g: 140,
    b: 140,
};

/// Redraw the whole screen.
pub fn draw<W: Write>(out: &mut W, state: &ColorState, layout: &Layout) -> io::Result<()> {
    queue!(out, ResetColor, Clear(ClearType::All))?;

    text(out, layout.title, TITLE)?;
    swatch(out, state, layout.swatch)?;

    for &(summary, point) in &layout.summaries {
        text(out, point, &state.labeled_summary(summary))?;
    }

    let flags = state.flags();
    let views = state.views();
    for slider in &layout.sliders {
        let value = views.get(slider.representation)[slider.channel];
        let thumb = if is_powerless(flags, slider) {
            POWERLESS_THUMB
        } else {
            THUMB
        };
        track(out, slider, value, thumb)?;
    }

    queue!(out, ResetColor)?;
    out.flush()
}

/// Whether the slider shows a channel that currently has no effect on the
/// color.
fn is_powerless(flags: Flags, slider: &Slider) -> bool {
    match (slider.representation, slider.channel) {
        (Representation::Hsl, 0) => flags.contains(Flags::HUE_IS_POWERLESS),
        (Representation::Hsl, 1) => flags.contains(Flags::SATURATION_IS_POWERLESS),
        (Representation::Cmyk, 0..=2) => flags.contains(Flags::CMY_IS_POWERLESS),
        _ => false,
    }
}

/// Move to `point`, or return `false` when it is off screen.
fn move_to<W: Write>(out: &mut W, point: Point) -> io::Result<bool> {
    if point.x < 0 || point.y < 0 || point.x > u16::MAX as i32 || point.y > u16::MAX as i32 {
        return Ok(false);
    }
    queue!(out, MoveTo(point.x as u16, point.y as u16))?;
    Ok(true)
}

fn text<W: Write>(out: &mut W, point: Point, text: &str) -> io::Result<()> {
    // Drop whatever falls off the left edge.
    let skip = (-point.x).max(0) as usize;
    let point = Point::new(point.x.max(0), point.y);
    if skip < text.len() && move_to(out, point)? {
        queue!(out, Print(&text[skip..]))?;
    }
    Ok(())
}

fn swatch<W: Write>(out: &mut W, state: &ColorState, rect: Rect) -> io::Result<()> {
    let [r, g, b] = state
        .rgba()
        .premultiplied()
        .map(|c| (255.0 * c).floor() as u8);

    let left = rect.min_x().max(0);
    let width = rect.max_x() - left;
    if width <= 0 {
        return Ok(());
    }

    let row = " ".repeat(width as usize);
    queue!(out, SetBackgroundColor(Color::Rgb { r, g, b }))?;
    for y in rect.min_y()..rect.max_y() {
        if move_to(out, Point::new(left, y))? {
            queue!(out, Print(&row))?;
        }
    }
    queue!(out, ResetColor)
}

fn track<W: Write>(
    out: &mut W,
    slider: &Slider,
    value: colorslide::Component,
    thumb: Color,
) -> io::Result<()> {
    let thumb_at = slider.thumb(value);
    let origin = slider.rect.origin;

    for i in 0..=SLIDER_WIDTH {
        let color = if i == thumb_at { thumb } else { TRACK };
        if move_to(out, Point::new(origin.x + i, origin.y))? {
            queue!(out, SetBackgroundColor(color), Print(' '))?;
        }
    }
    queue!(out, ResetColor)
}
