//! Drawing collaborator.
//!
//! The game describes *what* to draw in logical pixels; a backend decides how.
//! Asset lookup (which image a skin or obstacle variant uses) is the backend's
//! business, keyed by the indices carried in [`Sprite`].

use std::io;

use crate::geometry::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const GREY: Rgb = Rgb(150, 150, 150);
}

/// Which cosmetic variants are currently equipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Look {
    pub skin: usize,
    pub ammo: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backdrop {
    /// Menu backdrop, drifting horizontally.
    Menu,
    /// Gameplay backdrop, scrolling vertically.
    Gameplay,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sprite {
    Backdrop(Backdrop),
    /// Darkening overlay used behind menu pages.
    Shade,
    Player { skin: usize },
    Obstacle { variant: usize },
    AmmoPickup { colour: usize },
    Coin { frame: usize },
    /// Two thin beams at the left and right edges of the target rect.
    TwinBeam { colour: usize },
    Explosion { frame: usize },
    /// Key-cap pictures on the controls page.
    KeyLeft,
    KeyRight,
    KeySpace,
    /// Portrait on the story page.
    StoryPortrait,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    Subtitle,
    GameOver,
    NavButton,
    Hud,
    Heading,
    Story,
    ItemButton,
    ItemName,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

pub trait Renderer {
    /// Start a new frame.
    fn clear(&mut self) -> io::Result<()>;

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) -> io::Result<()>;

    fn fill_rect(&mut self, rect: Rect, colour: Rgb) -> io::Result<()>;

    /// Draw `text` anchored at `pos` (top-left or centre, per `align`).
    fn draw_text(&mut self, text: &str, pos: Point, style: TextStyle, align: Align)
        -> io::Result<()>;

    /// Flip the finished frame onto the screen.
    fn present(&mut self) -> io::Result<()>;
}
