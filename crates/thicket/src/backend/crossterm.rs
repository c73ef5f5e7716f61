use std::{
    io::{self, Write},
    panic,
    time::{Duration, Instant},
};

use color_backtrace::{BacktracePrinter, default_output_stream};
use crossterm::{QueueableCommand, cursor as ccursor, event as cevent, style, terminal};
use scopeguard::defer;
use tracing::{debug, trace};

use crate::{
    Error, EventOutcome, Result, TermBuf, Widget,
    event::{Event, Key, KeyCode, mouse::ClickTracker},
    geom::{Expanse, Point},
    render::{Render, RenderBackend},
    style::{Style, StyleMap},
    timer::Timers,
};

/// How long to block for input when no timer is pending.
const IDLE_WAIT: Duration = Duration::from_millis(500);

/// Map an output error into a render error.
fn translate_result<T>(e: io::Result<T>) -> Result<T> {
    e.map_err(|e| Error::Render(e.to_string()))
}

/// Map a terminal control or input error.
fn terminal_result<T>(e: io::Result<T>) -> Result<T> {
    e.map_err(|e| Error::Terminal(e.to_string()))
}

/// Leave the alternate screen and give the terminal back.
fn restore() {
    let mut stderr = io::stderr();
    #[allow(unused_must_use)]
    {
        crossterm::execute!(
            stderr,
            terminal::LeaveAlternateScreen,
            cevent::DisableMouseCapture,
            ccursor::Show
        );
        terminal::disable_raw_mode();
    }
}

/// Writes styled text to stderr.
pub struct CrosstermRender {
    /// Output stream.
    fp: io::Stderr,
}

impl Default for CrosstermRender {
    fn default() -> Self {
        Self { fp: io::stderr() }
    }
}

impl CrosstermRender {
    /// Queue the commands that switch to a style.
    fn queue_style(&mut self, s: &Style) -> io::Result<()> {
        // Reset first, or the colors set below are lost.
        self.fp
            .queue(style::SetAttribute(style::Attribute::Reset))?;
        let attrs = [
            (s.attrs.bold, style::Attribute::Bold),
            (s.attrs.dim, style::Attribute::Dim),
            (s.attrs.italic, style::Attribute::Italic),
            (s.attrs.reverse, style::Attribute::Reverse),
            (s.attrs.underline, style::Attribute::Underlined),
        ];
        for (on, a) in attrs {
            if on {
                self.fp.queue(style::SetAttribute(a))?;
            }
        }
        self.fp.queue(style::SetForegroundColor(s.fg.into()))?;
        self.fp.queue(style::SetBackgroundColor(s.bg.into()))?;
        Ok(())
    }

    /// Queue text at a screen location.
    fn queue_text(&mut self, loc: Point, txt: &str) -> io::Result<()> {
        self.fp.queue(ccursor::MoveTo(loc.x as u16, loc.y as u16))?;
        self.fp.queue(style::Print(txt))?;
        Ok(())
    }

    /// Show the hardware cursor at a screen position, or hide it.
    pub fn cursor(&mut self, p: Option<Point>) -> Result<()> {
        translate_result(match p {
            Some(p) => self
                .fp
                .queue(ccursor::MoveTo(p.x as u16, p.y as u16))
                .and_then(|fp| fp.queue(ccursor::Show))
                .and_then(|fp| fp.flush()),
            None => self.fp.queue(ccursor::Hide).and_then(|fp| fp.flush()),
        })
    }
}

impl RenderBackend for CrosstermRender {
    fn style(&mut self, s: &Style) -> Result<()> {
        translate_result(self.queue_style(s))
    }

    fn text(&mut self, loc: Point, txt: &str) -> Result<()> {
        translate_result(self.queue_text(loc, txt))
    }

    fn flush(&mut self) -> Result<()> {
        translate_result(self.fp.flush())
    }
}

/// Is this the interrupt key?
fn is_interrupt(e: &Event) -> bool {
    matches!(
        e,
        Event::Key(Key {
            key: KeyCode::Char('c'),
            mods,
        }) if mods.ctrl
    )
}

/// Wait up to `wait` for a terminal event we can represent.
fn next_event(wait: Duration) -> Result<Option<Event>> {
    if !terminal_result(cevent::poll(wait))? {
        return Ok(None);
    }
    let raw = terminal_result(cevent::read())?;
    Ok(Event::try_from(raw).ok())
}

/// Run `root` full screen until Ctrl-C, or until `Esc` is pressed and the
/// widget ignores it. The widget fills the terminal, receives timer firings
/// through [`Timers`], and gets double clicks synthesized from pairs of
/// presses.
pub fn runloop<W: Widget>(root: &mut W, styles: &StyleMap) -> Result<()> {
    let mut be = CrosstermRender::default();
    terminal_result(terminal::enable_raw_mode())?;
    terminal_result(crossterm::execute!(
        be.fp,
        terminal::EnterAlternateScreen,
        cevent::EnableMouseCapture,
        ccursor::Hide
    ))?;
    defer! {
        restore();
    }
    panic::set_hook(Box::new(|pi| {
        restore();
        #[allow(unused_must_use)]
        {
            BacktracePrinter::new().print_panic_info(pi, &mut default_output_stream());
        }
    }));

    let (w, h) = terminal_result(terminal::size())?;
    let mut size = Expanse::new(w.into(), h.into());
    let mut timers = Timers::new();
    let mut clicks = ClickTracker::default();
    root.on_event(&Event::Resize(size), &mut timers)?;
    root.on_event(&Event::FocusIn, &mut timers)?;
    debug!(widget = root.name(), ?size, "run loop started");

    let mut prev: Option<TermBuf> = None;
    loop {
        let mut buf = TermBuf::empty(size);
        let mut r = Render::new(&mut buf, styles, size.rect());
        root.render(&mut r)?;
        let cursor = r.cursor();
        match &prev {
            Some(p) => buf.diff(p, &mut be)?,
            None => buf.render(&mut be)?,
        }
        be.cursor(cursor)?;
        prev = Some(buf);

        let wait = timers.next_wait().unwrap_or(IDLE_WAIT);
        if let Some(mut event) = next_event(wait)? {
            trace!(?event, "terminal event");
            if is_interrupt(&event) {
                break;
            }
            match &mut event {
                Event::Mouse(m) => *m = clicks.track(Instant::now(), *m),
                Event::Resize(sz) => size = *sz,
                _ => {}
            }
            let outcome = root.on_event(&event, &mut timers)?;
            if outcome == EventOutcome::Ignore
                && matches!(event, Event::Key(Key { key: KeyCode::Esc, .. }))
            {
                break;
            }
        }
        for id in timers.due() {
            root.on_event(&Event::Timer(id), &mut timers)?;
        }
    }
    debug!("run loop finished");
    Ok(())
}
