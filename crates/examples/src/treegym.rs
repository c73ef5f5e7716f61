//! A list view over a generated project tree, drivable from a script.
//!
//! Scripts are whitespace-separated tokens. Key names (`up`, `down`, `left`,
//! `right`, `pgup`, `pgdn`, `home`, `end`, `enter`, `esc`) and single
//! characters become key presses. Mouse tokens take a screen position:
//! `click:x,y`, `dclick:x,y`, `drag:x,y`, `release:x,y`, `wheelup:x,y` and
//! `wheeldown:x,y`. `tick` fires every pending timer once.
use std::{
    cell::RefCell,
    fs::File,
    path::Path,
    rc::Rc,
    sync::Mutex,
    time::{Duration, Instant},
};

use anyhow::{Context as _, anyhow, bail};
use thicket::{
    TermBuf, Widget,
    event::{
        Event, KeyCode, Wheel, WheelEvent,
        mouse::{Action, MouseEvent},
    },
    geom::{Point, Rect},
    render::Render,
    style::{StyleMap, theme::default_theme},
    timer::Timers,
    widgets::listview::{Alignment, ItemId, ListView, ListViewConfig, Parent, Width},
};
use tracing::{Level, debug, info};

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Deliver an event.
    Event(Event),
    /// Fire all pending timers.
    Tick,
}

/// Parse `x,y`.
fn point(arg: &str) -> anyhow::Result<Point> {
    let (x, y) = arg
        .split_once(',')
        .ok_or_else(|| anyhow!("expected x,y, got {arg:?}"))?;
    Ok(Point {
        x: x.trim().parse().context("bad x")?,
        y: y.trim().parse().context("bad y")?,
    })
}

/// Parse one script token.
fn step(token: &str) -> anyhow::Result<Step> {
    let key = |k: KeyCode| Ok(Step::Event(Event::Key(k.into())));
    match token {
        "up" => return key(KeyCode::Up),
        "down" => return key(KeyCode::Down),
        "left" => return key(KeyCode::Left),
        "right" => return key(KeyCode::Right),
        "pgup" => return key(KeyCode::PageUp),
        "pgdn" => return key(KeyCode::PageDown),
        "home" => return key(KeyCode::Home),
        "end" => return key(KeyCode::End),
        "enter" => return key(KeyCode::Enter),
        "esc" => return key(KeyCode::Esc),
        "tick" => return Ok(Step::Tick),
        _ => {}
    }
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return key(KeyCode::Char(c));
    }
    let Some((name, arg)) = token.split_once(':') else {
        bail!("unknown script token {token:?}");
    };
    let p = point(arg)?;
    let mouse = |action| Ok(Step::Event(Event::Mouse(MouseEvent::left(action, p))));
    let wheel = |direction| {
        Ok(Step::Event(Event::Wheel(WheelEvent {
            direction,
            location: p,
        })))
    };
    match name {
        "click" => mouse(Action::Down),
        "dclick" => mouse(Action::DoubleClick),
        "drag" => mouse(Action::Drag),
        "release" => mouse(Action::Up),
        "wheelup" => wheel(Wheel::Up),
        "wheeldown" => wheel(Wheel::Down),
        _ => bail!("unknown script token {token:?}"),
    }
}

/// Parse a whole script.
pub fn parse_script(script: &str) -> anyhow::Result<Vec<Step>> {
    script.split_whitespace().map(step).collect()
}

/// Deterministic pseudo file size.
fn size_of(i: usize, j: usize) -> u64 {
    ((i + 1) * (j + 7) * 7919 % 100_000) as u64
}

/// Build the demo list: `dirs` directories, each holding a few files and,
/// for every other directory, a nested one. Payloads are byte sizes.
pub fn sample(dirs: usize, tree_view: bool) -> ListView<u64> {
    let mut list = ListView::new(ListViewConfig::default().with_tree_view(tree_view));
    list.add_column("Name", Width::Auto);
    let size_col = list.add_column("Size", Width::Fixed(7));
    list.set_column_alignment(size_col, Alignment::Right);

    for i in 0..dirs {
        let Some(dir) = list.insert(&[format!("dir{i:02}"), String::new()], 0, Parent::Root) else {
            continue;
        };
        for j in 0..3 {
            let size = size_of(i, j);
            list.insert(&[format!("file{j}.rs"), size.to_string()], size, dir);
        }
        if i % 2 == 0
            && let Some(sub) = list.insert(&["nested", ""], 0, dir)
        {
            for j in 3..5 {
                let size = size_of(i, j);
                list.insert(&[format!("data{j}.bin"), size.to_string()], size, sub);
            }
        }
    }
    info!(dirs, items = list.tree().len(), "sample tree built");
    list
}

/// Install a debug-level log subscriber writing to `path`.
pub fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))
}

/// The demo list with its timers, styles and a log of clicked items.
pub struct TreeGym {
    /// The list under test.
    pub list: ListView<u64>,
    /// Timers the list schedules on.
    timers: Timers,
    /// Styles for rendering frames.
    styles: StyleMap,
    /// Items reported through `clicked`.
    clicked: Rc<RefCell<Vec<ItemId>>>,
}

impl TreeGym {
    /// Build the sample list at `w`×`h`, focused.
    pub fn new(dirs: usize, tree_view: bool, w: u32, h: u32) -> Self {
        let mut list = sample(dirs, tree_view);
        list.set_area(Rect::new(0, 0, w, h));
        list.state_mut().set_focus(true);
        let clicked = Rc::new(RefCell::new(vec![]));
        let log = clicked.clone();
        list.clicked.connect(move |id| log.borrow_mut().push(*id));
        Self {
            list,
            timers: Timers::new(),
            styles: default_theme(),
            clicked,
        }
    }

    /// Apply one step.
    pub fn step(&mut self, step: &Step) -> anyhow::Result<()> {
        debug!(?step, "script step");
        match step {
            Step::Event(e) => {
                self.list.on_event(e, &mut self.timers)?;
            }
            Step::Tick => {
                let later = Instant::now() + Duration::from_secs(3600);
                for id in self.timers.due_at(later) {
                    self.list.on_event(&Event::Timer(id), &mut self.timers)?;
                }
            }
        }
        Ok(())
    }

    /// Render the list and return its rows as text.
    pub fn frame(&mut self) -> anyhow::Result<Vec<String>> {
        let area = self.list.state().area();
        let mut tb = TermBuf::empty(area.expanse());
        let mut r = Render::new(&mut tb, &self.styles, area);
        self.list.render(&mut r)?;
        Ok(tb.lines())
    }

    /// Apply every step and return the final frame.
    pub fn run(&mut self, steps: &[Step]) -> anyhow::Result<Vec<String>> {
        for s in steps {
            self.step(s)?;
        }
        self.frame()
    }

    /// Names of the items reported as clicked, oldest first.
    pub fn clicked(&self) -> Vec<String> {
        self.clicked
            .borrow()
            .iter()
            .map(|id| self.list.item_text(*id, 1).to_string())
            .collect()
    }

    /// Status line: selected row, row count and the selected item's size.
    pub fn status(&self) -> String {
        let size = self
            .list
            .current()
            .and_then(|id| self.list.payload(id))
            .copied()
            .unwrap_or_default();
        format!(
            "row {}/{}  {} bytes",
            self.list.current_position() + 1,
            self.list.count(),
            size
        )
    }
}
