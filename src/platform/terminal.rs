//! Terminal host built on crossterm
//!
//! The 998×590 playfield is scaled onto the terminal grid. Mouse clicks are
//! mapped back into playfield pixels, and held keys are approximated from
//! press/repeat timestamps because classic terminals never report releases.

use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

use crossterm::{
    ExecutableCommand, QueueableCommand, cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Color, Print},
    terminal,
};
use glam::Vec2;

use super::{HeldKeys, InputEvent, InputSource, Key};
use crate::renderer::{DrawCommand, Frame, Presenter};
use crate::sim::{SizeTier, Species, Sprite};
use crate::ui::Rgb;

/// A key counts as held if its last press/repeat arrived within this many
/// polls. Keeps arrows alive between OS key-repeat events.
const HOLD_WINDOW: u64 = 4;

/// How long a poll waits for the first event
const POLL_WAIT: Duration = Duration::from_millis(1);

/// Raw mode, alternate screen and mouse capture for as long as it lives
pub struct TerminalSession {
    keyboard_enhanced: bool,
}

impl TerminalSession {
    pub fn enter<W: Write>(out: &mut W) -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        // From here on, an early return drops the guard and restores the terminal
        let mut session = Self {
            keyboard_enhanced: false,
        };
        out.execute(terminal::EnterAlternateScreen)?;
        out.execute(cursor::Hide)?;
        out.execute(EnableMouseCapture)?;

        // Release events are only available on kitty-protocol terminals
        session.keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
            && out
                .execute(PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
                ))
                .is_ok();

        Ok(session)
    }

    /// Whether the terminal reports key releases
    pub fn reports_releases(&self) -> bool {
        self.keyboard_enhanced
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = std::io::stdout();
        if self.keyboard_enhanced {
            let _ = out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = out.execute(DisableMouseCapture);
        let _ = out.execute(cursor::Show);
        let _ = out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Map a terminal cell to the playfield pixel at its centre
fn cell_to_playfield(col: u16, row: u16, grid: (u16, u16), field: Vec2) -> Vec2 {
    let (cols, rows) = (grid.0.max(1) as f32, grid.1.max(1) as f32);
    Vec2::new(
        (col as f32 + 0.5) * field.x / cols,
        (row as f32 + 0.5) * field.y / rows,
    )
}

/// Map a playfield pixel to the terminal cell containing it
fn playfield_to_cell(pos: Vec2, grid: (u16, u16), field: Vec2) -> (i32, i32) {
    (
        (pos.x * grid.0 as f32 / field.x).floor() as i32,
        (pos.y * grid.1 as f32 / field.y).floor() as i32,
    )
}

/// Keyboard and mouse input from the terminal
pub struct TerminalInput {
    field: Vec2,
    grid: (u16, u16),
    /// Maps each held key → the poll it was last seen on
    key_frame: HashMap<KeyCode, u64>,
    frame: u64,
    /// Without release reports, OS auto-repeat arrives as fresh presses
    reports_releases: bool,
}

impl TerminalInput {
    pub fn new(field: Vec2, reports_releases: bool) -> std::io::Result<Self> {
        Ok(Self::with_grid(field, terminal::size()?, reports_releases))
    }

    fn with_grid(field: Vec2, grid: (u16, u16), reports_releases: bool) -> Self {
        Self {
            field,
            grid,
            key_frame: HashMap::new(),
            frame: 0,
            reports_releases,
        }
    }

    fn is_held(&self, key: KeyCode) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn on_key(&mut self, key: KeyEvent, out: &mut Vec<InputEvent>) {
        match key.kind {
            KeyEventKind::Release => {
                self.key_frame.remove(&key.code);
                return;
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(key.code, self.frame);
                return;
            }
            KeyEventKind::Press => {
                let repeated = !self.reports_releases && self.is_held(key.code);
                self.key_frame.insert(key.code, self.frame);
                if repeated {
                    return;
                }
            }
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                out.push(InputEvent::Quit);
            }
            KeyCode::Esc => out.push(InputEvent::Quit),
            KeyCode::Left => out.push(InputEvent::KeyDown(Key::Left)),
            KeyCode::Right => out.push(InputEvent::KeyDown(Key::Right)),
            KeyCode::Up => out.push(InputEvent::KeyDown(Key::Up)),
            KeyCode::Down => out.push(InputEvent::KeyDown(Key::Down)),
            KeyCode::Enter => out.push(InputEvent::KeyDown(Key::Enter)),
            KeyCode::Backspace => out.push(InputEvent::KeyDown(Key::Backspace)),
            KeyCode::Char(' ') => {
                out.push(InputEvent::KeyDown(Key::Space));
                out.push(InputEvent::TextInput(' '));
            }
            KeyCode::Char(c) => {
                out.push(InputEvent::KeyDown(Key::Other));
                out.push(InputEvent::TextInput(c));
            }
            _ => out.push(InputEvent::KeyDown(Key::Other)),
        }
    }

    fn on_mouse(&self, mouse: MouseEvent, out: &mut Vec<InputEvent>) {
        let pos = cell_to_playfield(mouse.column, mouse.row, self.grid, self.field);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => out.push(InputEvent::PointerDown(pos)),
            MouseEventKind::Up(MouseButton::Left) => out.push(InputEvent::PointerUp(pos)),
            _ => {}
        }
    }
}

impl InputSource for TerminalInput {
    fn poll_events(&mut self) -> std::io::Result<Vec<InputEvent>> {
        self.frame += 1;
        let mut events = Vec::new();
        let mut wait = POLL_WAIT;

        while event::poll(wait)? {
            wait = Duration::ZERO;
            match event::read()? {
                Event::Key(key) => self.on_key(key, &mut events),
                Event::Mouse(mouse) => self.on_mouse(mouse, &mut events),
                Event::Resize(cols, rows) => self.grid = (cols, rows),
                _ => {}
            }
        }
        Ok(events)
    }

    fn held_keys(&self) -> HeldKeys {
        HeldKeys {
            left: self.is_held(KeyCode::Left),
            right: self.is_held(KeyCode::Right),
            up: self.is_held(KeyCode::Up),
            down: self.is_held(KeyCode::Down),
        }
    }
}

/// One terminal cell
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    glyph: char,
    fg: Rgb,
    bg: Rgb,
}

const BLANK: Cell = Cell {
    glyph: ' ',
    fg: (255, 255, 255),
    bg: (0, 0, 0),
};

const GRASS: Rgb = (60, 140, 60);

/// Glyph and colour standing in for a sprite
fn sprite_glyph(sprite: Sprite) -> (&'static str, Rgb) {
    let species_glyph = |species: Species, tier: SizeTier| match (species, tier) {
        (Species::Pig, SizeTier::Small) => "p",
        (Species::Pig, SizeTier::Big) => "P",
        (Species::Pig, SizeTier::VeryBig) => "PP",
        (Species::Elephant, SizeTier::Small) => "e",
        (Species::Elephant, SizeTier::Big) => "E",
        (Species::Elephant, SizeTier::VeryBig) => "EE",
        (Species::Cow, SizeTier::Small) => "c",
        (Species::Cow, SizeTier::Big) => "C",
        (Species::Cow, SizeTier::VeryBig) => "CC",
    };
    match sprite {
        Sprite::Character(species, tier) => (species_glyph(species, tier), (255, 190, 200)),
        Sprite::Avatar(species) => (species_glyph(species, SizeTier::VeryBig), (255, 255, 255)),
        Sprite::Apple => ("o", (220, 30, 30)),
        Sprite::Wolf => ("W", (90, 90, 90)),
        Sprite::Background => ("", GRASS),
    }
}

/// Draws frames as coloured cells
pub struct TerminalPresenter<W: Write> {
    out: W,
    last: Option<Frame>,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }

    fn rasterize(frame: &Frame, grid: (u16, u16)) -> Vec<Vec<Cell>> {
        let (cols, rows) = (grid.0 as i32, grid.1 as i32);
        let mut cells = vec![vec![BLANK; cols.max(0) as usize]; rows.max(0) as usize];
        let mut put = |col: i32, row: i32, f: &dyn Fn(&mut Cell)| {
            if (0..cols).contains(&col) && (0..rows).contains(&row) {
                f(&mut cells[row as usize][col as usize]);
            }
        };

        for command in &frame.commands {
            match command {
                DrawCommand::FillRect { pos, size, color } => {
                    let (c0, r0) = playfield_to_cell(*pos, grid, frame.size);
                    let (c1, r1) = playfield_to_cell(*pos + *size, grid, frame.size);
                    for row in r0..r1.max(r0 + 1) {
                        for col in c0..c1.max(c0 + 1) {
                            put(col, row, &|cell: &mut Cell| {
                                cell.glyph = ' ';
                                cell.bg = *color;
                            });
                        }
                    }
                }
                DrawCommand::Image {
                    sprite: Sprite::Background,
                    ..
                } => {
                    for row in 0..rows {
                        for col in 0..cols {
                            put(col, row, &|cell: &mut Cell| *cell = Cell { bg: GRASS, ..BLANK });
                        }
                    }
                }
                DrawCommand::Image { sprite, pos } => {
                    let (glyphs, fg) = sprite_glyph(*sprite);
                    let (col, row) = playfield_to_cell(*pos, grid, frame.size);
                    for (i, glyph) in glyphs.chars().enumerate() {
                        put(col + i as i32, row, &|cell: &mut Cell| {
                            cell.glyph = glyph;
                            cell.fg = fg;
                        });
                    }
                }
                DrawCommand::Text {
                    text, pos, color, ..
                } => {
                    let (col, row) = playfield_to_cell(*pos, grid, frame.size);
                    for (i, glyph) in text.chars().enumerate() {
                        put(col + i as i32, row, &|cell: &mut Cell| {
                            cell.glyph = glyph;
                            cell.fg = *color;
                        });
                    }
                }
            }
        }
        cells
    }
}

fn rgb(color: Rgb) -> Color {
    Color::Rgb {
        r: color.0,
        g: color.1,
        b: color.2,
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn present(&mut self, frame: &Frame) -> std::io::Result<()> {
        // Menus re-send identical frames every iteration
        if self.last.as_ref() == Some(frame) {
            return Ok(());
        }

        let grid = terminal::size()?;
        let cells = Self::rasterize(frame, grid);

        let mut colors: Option<(Rgb, Rgb)> = None;
        for (row, line) in cells.iter().enumerate() {
            self.out.queue(cursor::MoveTo(0, row as u16))?;
            for cell in line {
                if colors != Some((cell.fg, cell.bg)) {
                    self.out.queue(style::SetForegroundColor(rgb(cell.fg)))?;
                    self.out.queue(style::SetBackgroundColor(rgb(cell.bg)))?;
                    colors = Some((cell.fg, cell.bg));
                }
                self.out.queue(Print(cell.glyph))?;
            }
        }
        self.out.queue(style::ResetColor)?;
        self.out.flush()?;

        self.last = Some(frame.clone());
        Ok(())
    }
}
