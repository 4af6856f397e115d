//! Terminal rendering and event translation.
//!
//! The 600×800 logical playfield maps onto a 60×40 grid of terminal cells
//! (10×20 pixels per cell), centred in the terminal.  Drawing goes into a
//! back buffer; `present` writes the whole buffer in one flush.

mod art;

use std::io::Write;

use crossterm::{
    cursor,
    event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::economy::Economy;
use crate::geometry::{Point, Rect};
use crate::input::{InputEvent, Key, KeyAction};
use crate::render::{Align, Backdrop, Renderer, Rgb, Sprite, TextStyle};

pub const CELL_WIDTH: f32 = 10.0;
pub const CELL_HEIGHT: f32 = 20.0;
pub const GRID_COLS: u16 = (SCREEN_WIDTH / CELL_WIDTH) as u16;
pub const GRID_ROWS: u16 = (SCREEN_HEIGHT / CELL_HEIGHT) as u16;

// ── Colour palette ───────────────────────────────────────────────────────────

const C_MENU_BG: Color = Color::Rgb { r: 18, g: 14, b: 40 };
const C_MENU_STAR: Color = Color::DarkGrey;
const C_ROAD_BG: Color = Color::Rgb { r: 28, g: 28, b: 34 };
const C_LANE_MARK: Color = Color::Rgb { r: 90, g: 90, b: 100 };
const C_COIN: Color = Color::Yellow;
const C_EXPLOSION: [Color; 2] = [Color::Red, Color::Yellow];
const C_OBSTACLE: [Color; 4] = [Color::Magenta, Color::Blue, Color::Green, Color::Grey];
const C_KEY: Color = Color::White;

fn rgb(c: Rgb) -> Color {
    Color::Rgb { r: c.0, g: c.1, b: c.2 }
}

fn text_colour(style: TextStyle) -> Color {
    match style {
        TextStyle::Title => Color::Cyan,
        TextStyle::GameOver => Color::Red,
        TextStyle::Hud => Color::Yellow,
        TextStyle::Subtitle | TextStyle::Heading => Color::Magenta,
        TextStyle::Story
        | TextStyle::NavButton
        | TextStyle::ItemButton
        | TextStyle::ItemName => Color::White,
    }
}

/// Colours for cosmetic indices, taken from the shop catalog at start-up.
#[derive(Debug, Clone)]
pub struct Palette {
    pub skins: Vec<Color>,
    pub ammo: Vec<Color>,
}

const SKIN_COLOURS: [Color; 6] = [
    Color::Grey,
    Color::White,
    Color::Rgb { r: 210, g: 160, b: 90 },
    Color::Rgb { r: 150, g: 110, b: 200 },
    Color::Rgb { r: 120, g: 200, b: 140 },
    Color::Rgb { r: 240, g: 130, b: 170 },
];

impl Palette {
    pub fn from_economy(economy: &Economy) -> Self {
        let skins = (0..economy.skins.len())
            .map(|i| SKIN_COLOURS[i % SKIN_COLOURS.len()])
            .collect();
        let ammo = economy
            .ammo_colours
            .items()
            .iter()
            .map(|item| match item.color {
                Some([r, g, b]) => Color::Rgb { r, g, b },
                None => Color::Magenta,
            })
            .collect();
        Self { skins, ammo }
    }

    fn skin(&self, i: usize) -> Color {
        self.skins.get(i).copied().unwrap_or(Color::Grey)
    }

    fn ammo(&self, i: usize) -> Color {
        self.ammo.get(i).copied().unwrap_or(Color::Magenta)
    }
}

// ── Back buffer ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

const BLANK: Cell = Cell {
    ch: ' ',
    fg: Color::White,
    bg: Color::Black,
};

/// Cell span `[c0, c1) × [r0, r1)` covered by a logical rect, at least one
/// cell in each direction.  Coordinates may lie off-grid.
fn cell_span(rect: Rect) -> (i32, i32, i32, i32) {
    let c0 = (rect.x / CELL_WIDTH).floor() as i32;
    let r0 = (rect.y / CELL_HEIGHT).floor() as i32;
    let c1 = ((rect.right() / CELL_WIDTH).ceil() as i32).max(c0 + 1);
    let r1 = ((rect.bottom() / CELL_HEIGHT).ceil() as i32).max(r0 + 1);
    (c0, r0, c1, r1)
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    palette: Palette,
    cells: Vec<Cell>,
    /// Top-left terminal cell of the playfield.
    origin: (u16, u16),
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, palette: Palette, term_size: (u16, u16)) -> Self {
        let mut renderer = Self {
            out,
            palette,
            cells: vec![BLANK; GRID_COLS as usize * GRID_ROWS as usize],
            origin: (0, 0),
        };
        renderer.resize(term_size.0, term_size.1);
        renderer
    }

    /// Re-centre the playfield in a terminal of `cols × rows`.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.origin = (
            cols.saturating_sub(GRID_COLS) / 2,
            rows.saturating_sub(GRID_ROWS) / 2,
        );
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Logical centre of a terminal cell, or `None` outside the playfield.
    pub fn cell_to_point(&self, col: u16, row: u16) -> Option<Point> {
        let col = col.checked_sub(self.origin.0)?;
        let row = row.checked_sub(self.origin.1)?;
        if col >= GRID_COLS || row >= GRID_ROWS {
            return None;
        }
        Some(Point::new(
            col as f32 * CELL_WIDTH + CELL_WIDTH / 2.0,
            row as f32 * CELL_HEIGHT + CELL_HEIGHT / 2.0,
        ))
    }

    /// Translate a terminal event into a game input event.
    pub fn translate(&mut self, event: &Event) -> Option<InputEvent> {
        match event {
            Event::Key(key) => translate_key(key),
            Event::Mouse(MouseEvent { kind, column, row, .. }) => {
                let p = self.cell_to_point(*column, *row)?;
                match kind {
                    MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::Click(p)),
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                        Some(InputEvent::PointerMoved(p))
                    }
                    _ => None,
                }
            }
            Event::Resize(cols, rows) => {
                self.resize(*cols, *rows);
                None
            }
            _ => None,
        }
    }

    fn cell_mut(&mut self, col: i32, row: i32) -> Option<&mut Cell> {
        if col < 0 || row < 0 || col >= GRID_COLS as i32 || row >= GRID_ROWS as i32 {
            return None;
        }
        self.cells.get_mut(row as usize * GRID_COLS as usize + col as usize)
    }

    fn put(&mut self, col: i32, row: i32, ch: char, fg: Color) {
        if let Some(cell) = self.cell_mut(col, row) {
            cell.ch = ch;
            cell.fg = fg;
        }
    }

    fn fill(&mut self, rect: Rect, ch: char, fg: Color, bg: Color) {
        let (c0, r0, c1, r1) = cell_span(rect);
        for row in r0..r1 {
            for col in c0..c1 {
                if let Some(cell) = self.cell_mut(col, row) {
                    *cell = Cell { ch, fg, bg };
                }
            }
        }
    }

    /// Stamp multi-line art at the rect's top-left cell, clipped to the rect.
    fn stamp<S: AsRef<str>>(&mut self, rect: Rect, art: &[S], fg: Color) {
        let (c0, r0, c1, r1) = cell_span(rect);
        for (dy, line) in art.iter().enumerate() {
            let row = r0 + dy as i32;
            if row >= r1 {
                break;
            }
            for (dx, ch) in line.as_ref().chars().enumerate() {
                let col = c0 + dx as i32;
                if col >= c1 {
                    break;
                }
                if ch != ' ' {
                    self.put(col, row, ch, fg);
                }
            }
        }
    }

    fn backdrop(&mut self, kind: Backdrop, rect: Rect) {
        let (c0, r0, c1, r1) = cell_span(rect);
        for row in r0..r1 {
            for col in c0..c1 {
                let (lc, lr) = (col - c0, row - r0);
                let cell = match kind {
                    Backdrop::Menu => Cell {
                        ch: if (lc * 7 + lr * 13) % 29 == 0 { '·' } else { ' ' },
                        fg: C_MENU_STAR,
                        bg: C_MENU_BG,
                    },
                    Backdrop::Gameplay => Cell {
                        ch: if lc % 12 == 0 && lr % 3 != 0 { '╎' } else { ' ' },
                        fg: C_LANE_MARK,
                        bg: C_ROAD_BG,
                    },
                };
                if let Some(target) = self.cell_mut(col, row) {
                    *target = cell;
                }
            }
        }
    }

    fn shade(&mut self, rect: Rect) {
        let (c0, r0, c1, r1) = cell_span(rect);
        for row in r0..r1 {
            for col in c0..c1 {
                if let Some(cell) = self.cell_mut(col, row) {
                    cell.fg = Color::DarkGrey;
                    cell.bg = Color::Black;
                }
            }
        }
    }
}

fn translate_key(key: &KeyEvent) -> Option<InputEvent> {
    let action = match key.kind {
        KeyEventKind::Press => KeyAction::Press,
        KeyEventKind::Repeat => KeyAction::Repeat,
        KeyEventKind::Release => KeyAction::Release,
    };
    let game_key = match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Key::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Key::Right,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return (action == KeyAction::Press).then_some(InputEvent::Quit);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            return (action == KeyAction::Press).then_some(InputEvent::Quit);
        }
        _ => return None,
    };
    Some(InputEvent::Key {
        key: game_key,
        action,
    })
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear(&mut self) -> std::io::Result<()> {
        self.cells.fill(BLANK);
        Ok(())
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) -> std::io::Result<()> {
        match sprite {
            Sprite::Backdrop(kind) => self.backdrop(kind, rect),
            Sprite::Shade => self.shade(rect),
            Sprite::Player { skin } => {
                let colour = self.palette.skin(skin);
                self.stamp(rect, &art::RACCOON, colour);
            }
            Sprite::Obstacle { variant } => {
                let colour = C_OBSTACLE[variant % C_OBSTACLE.len()];
                self.stamp(rect, art::obstacle(variant), colour);
            }
            Sprite::AmmoPickup { colour } => {
                let colour = self.palette.ammo(colour);
                self.stamp(rect, &art::AMMO, colour);
            }
            Sprite::Coin { frame } => self.stamp(rect, &art::coin(frame), C_COIN),
            Sprite::TwinBeam { colour } => {
                let colour = self.palette.ammo(colour);
                let (c0, r0, c1, r1) = cell_span(rect);
                for row in r0..r1 {
                    self.put(c0, row, '│', colour);
                    self.put(c1 - 1, row, '│', colour);
                }
            }
            Sprite::Explosion { frame } => {
                let colour = C_EXPLOSION[frame % C_EXPLOSION.len()];
                self.stamp(rect, &art::explosion(frame), colour);
            }
            Sprite::KeyLeft => self.stamp(rect, &art::key_cap('←'), C_KEY),
            Sprite::KeyRight => self.stamp(rect, &art::key_cap('→'), C_KEY),
            Sprite::KeySpace => self.stamp(rect, &art::key_cap('␣'), C_KEY),
            Sprite::StoryPortrait => {
                let colour = self.palette.skin(0);
                self.stamp(rect, &art::PORTRAIT, colour);
            }
        }
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, colour: Rgb) -> std::io::Result<()> {
        self.fill(rect, ' ', Color::White, rgb(colour));
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        pos: Point,
        style: TextStyle,
        align: Align,
    ) -> std::io::Result<()> {
        let len = text.chars().count() as i32;
        let row = (pos.y / CELL_HEIGHT).floor() as i32;
        let col = match align {
            Align::Left => (pos.x / CELL_WIDTH).floor() as i32,
            Align::Center => (pos.x / CELL_WIDTH).round() as i32 - len / 2,
        };
        let fg = text_colour(style);
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i32, row, ch, fg);
        }
        Ok(())
    }

    fn present(&mut self) -> std::io::Result<()> {
        let cols = GRID_COLS as usize;
        for (row, line) in self.cells.chunks(cols).enumerate() {
            self.out
                .queue(cursor::MoveTo(self.origin.0, self.origin.1 + row as u16))?;
            let mut current: Option<(Color, Color)> = None;
            for cell in line {
                if current != Some((cell.fg, cell.bg)) {
                    self.out.queue(style::SetForegroundColor(cell.fg))?;
                    self.out.queue(style::SetBackgroundColor(cell.bg))?;
                    current = Some((cell.fg, cell.bg));
                }
                self.out.queue(Print(cell.ch))?;
            }
        }
        self.out.queue(style::ResetColor)?;
        self.out.flush()
    }
}

/// Clear the whole terminal once, e.g. after a resize left stale cells.
pub fn wipe<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.flush()
}
