//! The event loop: read an event, apply it to the color, redraw.

use std::{io::Write, time::Duration};

use anyhow::{Context, Result};
use colorslide::ColorState;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use tracing::{debug, info, warn};

use crate::{
    layout::{Layout, Point},
    render,
};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Source of terminal events so tests can drive the app without a real tty.
pub trait EventSource {
    /// Wait up to `timeout` for the next event. `None` means nothing arrived.
    fn next(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

pub struct CrosstermEventSource;

impl EventSource for CrosstermEventSource {
    fn next(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("could not poll for events")? {
            Ok(Some(event::read().context("could not read event")?))
        } else {
            Ok(None)
        }
    }
}

/// What the loop should do after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Redraw,
    Quit,
}

pub struct App {
    state: ColorState,
    layout: Layout,
}

impl App {
    pub fn new(state: ColorState, layout: Layout) -> Self {
        Self { state, layout }
    }

    pub fn handle_event(&mut self, event: Event) -> Control {
        match event {
            Event::Key(key) => handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(columns, rows) => {
                debug!(columns, rows, "terminal resized");
                self.layout = Layout::new(columns, rows);
                Control::Redraw
            }
            _ => Control::Continue,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Control {
        if !matches!(
            mouse.kind,
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left)
        ) {
            return Control::Continue;
        }

        let point = Point::new(mouse.column as i32, mouse.row as i32);
        let Some(slider) = self.layout.slider_at(point) else {
            return Control::Continue;
        };

        match self.state.apply_edit(slider.edit_at(point.x)) {
            Ok(_) => Control::Redraw,
            Err(err) => {
                warn!(%err, "ignoring edit");
                Control::Continue
            }
        }
    }

    /// Draw once, then handle events until asked to quit.
    pub fn run<S: EventSource, W: Write>(
        &mut self,
        events: &mut S,
        out: &mut W,
        shutdown: impl Fn() -> bool,
    ) -> Result<()> {
        render::draw(out, &self.state, &self.layout).context("could not draw")?;

        loop {
            if shutdown() {
                info!("stopping on signal");
                return Ok(());
            }

            let Some(event) = events.next(POLL_INTERVAL)? else {
                continue;
            };

            match self.handle_event(event) {
                Control::Quit => {
                    info!(color = %self.state.summary(colorslide::Summary::Hex), "quitting");
                    return Ok(());
                }
                Control::Redraw => {
                    render::draw(out, &self.state, &self.layout).context("could not draw")?
                }
                Control::Continue => {}
            }
        }
    }
}

fn handle_key(key: KeyEvent) -> Control {
    if key.kind != KeyEventKind::Press {
        return Control::Continue;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') => Control::Quit,
        // Raw mode delivers ^C and ^\ as keys rather than signals.
        KeyCode::Char('c') | KeyCode::Char('\\') | KeyCode::Char('4') if ctrl => Control::Quit,
        _ => Control::Continue,
    }
}
