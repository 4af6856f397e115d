//! Screen layout and page drawing.
//!
//! Button rectangles live here so hit-testing and drawing share one source of
//! truth.  Every page is drawn through the [`Renderer`] trait only.

use std::io;

use crate::consts::*;
use crate::economy::{Category, CosmeticItem, Economy};
use crate::entities::{Difficulty, Entity, Session};
use crate::geometry::{Point, Rect};
use crate::render::{Align, Backdrop, Look, Renderer, Rgb, Sprite, TextStyle};

// ── Layout ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeButton {
    Play,
    Level,
    Shop,
    Story,
    Controls,
    Quit,
}

impl HomeButton {
    pub const ALL: [HomeButton; 6] = [
        HomeButton::Play,
        HomeButton::Level,
        HomeButton::Shop,
        HomeButton::Story,
        HomeButton::Controls,
        HomeButton::Quit,
    ];

    pub fn rect(self) -> Rect {
        let row = match self {
            HomeButton::Play => 0.0,
            HomeButton::Level => 1.0,
            HomeButton::Shop => 2.0,
            HomeButton::Story => 3.0,
            HomeButton::Controls => 4.0,
            HomeButton::Quit => 5.0,
        };
        Rect::new(100.0, 300.0 + 80.0 * row, 400.0, 60.0)
    }
}

pub const GO_BACK: Rect = Rect::new(100.0, 720.0, 400.0, 50.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverButton {
    Retry,
    Home,
}

impl GameOverButton {
    pub fn rect(self) -> Rect {
        match self {
            GameOverButton::Retry => Rect::new(200.0, 400.0, 200.0, 80.0),
            GameOverButton::Home => Rect::new(200.0, 500.0, 200.0, 80.0),
        }
    }
}

/// Horizontal pitch of items in a shop row.
const SHOP_PITCH: f32 = 100.0;

fn shop_row_y(category: Category) -> f32 {
    match category {
        Category::Skin => 350.0,
        Category::AmmoColour => 610.0,
    }
}

/// The buy/equip button under the `index`-th item of a shop row.
pub fn shop_button(category: Category, index: usize) -> Rect {
    Rect::new(15.0 + SHOP_PITCH * index as f32, shop_row_y(category), 70.0, 28.0)
}

// ── Hit-testing ──────────────────────────────────────────────────────────────

pub fn home_hit(p: Point) -> Option<HomeButton> {
    HomeButton::ALL.into_iter().find(|b| b.rect().contains(p))
}

pub fn game_over_hit(p: Point) -> Option<GameOverButton> {
    [GameOverButton::Retry, GameOverButton::Home]
        .into_iter()
        .find(|b| b.rect().contains(p))
}

pub fn shop_hit(economy: &Economy, p: Point) -> Option<(Category, usize)> {
    Category::ALL.into_iter().find_map(|category| {
        (0..economy.catalog(category).len())
            .find(|&i| shop_button(category, i).contains(p))
            .map(|i| (category, i))
    })
}

// ── Page content ─────────────────────────────────────────────────────────────

pub const TITLE: &str = "Raccoon Madness";

pub const STORY_LINES: [&str; 11] = [
    "In the late 3000s, Earth's cities are ruled by robots,",
    "with no life remaining, except you, a lone raccoon",
    "scavenging for survival. While sneaking into",
    "a futuristic lab, you stumble upon laser goggles",
    "and accidentally trigger the robot security.",
    "Now on the run, the goggles reveal hidden traps and",
    "allow you to outmaneuver the relentless machines.",
    "As they close in, you discover the goggles can fire",
    "lasers, and with a daring blast, you break",
    "through their defenses, racing to escape",
    "the robot-controlled metropolis.",
];

const OBSTACLE_NAMES: [&str; OBSTACLE_VARIANTS] = [
    "purple security bot",
    "blue security bot",
    "green security bot",
    "trash can",
];

/// Label on an item's shop button.
pub fn item_button_label(item: &CosmeticItem) -> &'static str {
    if item.equipped {
        "SELECTED"
    } else if item.purchased {
        "EQUIP"
    } else {
        "PURCHASE"
    }
}

// ── Shared pieces ────────────────────────────────────────────────────────────

fn draw_button<R: Renderer>(r: &mut R, label: &str, rect: Rect, pointer: Point) -> io::Result<()> {
    let fill = if rect.contains(pointer) { Rgb::GREY } else { Rgb::BLACK };
    r.fill_rect(rect, fill)?;
    r.draw_text(label, rect.center(), TextStyle::NavButton, Align::Center)
}

/// Drifting menu backdrop plus optional darkening overlay.
fn draw_menu_backdrop<R: Renderer>(r: &mut R, scroll: f32, shaded: bool) -> io::Result<()> {
    let full = Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT);
    r.draw_sprite(Sprite::Backdrop(Backdrop::Menu), full.translated(-scroll, 0.0))?;
    r.draw_sprite(
        Sprite::Backdrop(Backdrop::Menu),
        full.translated(SCREEN_WIDTH - scroll, 0.0),
    )?;
    if shaded {
        r.draw_sprite(Sprite::Shade, full)?;
    }
    Ok(())
}

fn draw_all<R: Renderer, E: Entity>(r: &mut R, entities: &[E], look: &Look) -> io::Result<()> {
    for e in entities {
        r.draw_sprite(e.sprite(look), e.bounds())?;
    }
    Ok(())
}

// ── Pages ────────────────────────────────────────────────────────────────────

pub fn draw_home<R: Renderer>(
    r: &mut R,
    scroll: f32,
    high_score: u64,
    difficulty: Difficulty,
    pointer: Point,
) -> io::Result<()> {
    draw_menu_backdrop(r, scroll, false)?;
    r.draw_text(TITLE, Point::new(SCREEN_WIDTH / 2.0, 50.0), TextStyle::Title, Align::Center)?;
    r.draw_text(
        &format!("Highest Score: {high_score}"),
        Point::new(SCREEN_WIDTH / 2.0, 120.0),
        TextStyle::Title,
        Align::Center,
    )?;

    for button in HomeButton::ALL {
        let label = match button {
            HomeButton::Play => "Play".to_string(),
            HomeButton::Level => format!("Level: {}", difficulty.label()),
            HomeButton::Shop => "Shop".to_string(),
            HomeButton::Story => "Story".to_string(),
            HomeButton::Controls => "Controls".to_string(),
            HomeButton::Quit => "Quit".to_string(),
        };
        draw_button(r, &label, button.rect(), pointer)?;
    }
    Ok(())
}

fn draw_shop_row<R: Renderer>(
    r: &mut R,
    economy: &Economy,
    category: Category,
    pointer: Point,
) -> io::Result<()> {
    let (name_y, picture, price_y) = match category {
        Category::Skin => (190.0, Rect::new(0.0, 220.0, PLAYER_WIDTH, PLAYER_HEIGHT), 320.0),
        Category::AmmoColour => (480.0, Rect::new(0.0, 520.0, AMMO_WIDTH, AMMO_HEIGHT), 570.0),
    };

    for (i, item) in economy.catalog(category).items().iter().enumerate() {
        let x = 25.0 + SHOP_PITCH * i as f32;
        r.draw_text(&item.name, Point::new(x, name_y), TextStyle::ItemName, Align::Left)?;

        let sprite = match category {
            Category::Skin => Sprite::Player { skin: i },
            Category::AmmoColour => Sprite::AmmoPickup { colour: i },
        };
        r.draw_sprite(sprite, Rect { x, ..picture })?;

        if !item.purchased {
            r.draw_text(
                &format!("{} Coins", item.price),
                Point::new(x, price_y),
                TextStyle::ItemButton,
                Align::Left,
            )?;
        }

        let button = shop_button(category, i);
        let hovered = button.contains(pointer);
        r.fill_rect(button, if hovered { Rgb::GREY } else { Rgb::BLACK })?;
        r.draw_text(
            item_button_label(item),
            button.center(),
            TextStyle::ItemButton,
            Align::Center,
        )?;
    }
    Ok(())
}

pub fn draw_store<R: Renderer>(
    r: &mut R,
    scroll: f32,
    economy: &Economy,
    pointer: Point,
) -> io::Result<()> {
    draw_menu_backdrop(r, scroll, true)?;
    r.draw_text(
        " item store ",
        Point::new(SCREEN_WIDTH / 2.0, 50.0),
        TextStyle::Title,
        Align::Center,
    )?;
    r.draw_text(
        &format!("Available Coins: {}", economy.balance),
        Point::new(SCREEN_WIDTH / 2.0, 100.0),
        TextStyle::Story,
        Align::Center,
    )?;

    r.draw_text("Raccoon Skins", Point::new(15.0, 150.0), TextStyle::Heading, Align::Left)?;
    draw_shop_row(r, economy, Category::Skin, pointer)?;
    r.draw_text("ammo Colours", Point::new(15.0, 430.0), TextStyle::Heading, Align::Left)?;
    draw_shop_row(r, economy, Category::AmmoColour, pointer)?;

    draw_button(r, "Go Back", GO_BACK, pointer)
}

pub fn draw_story<R: Renderer>(r: &mut R, scroll: f32, pointer: Point) -> io::Result<()> {
    draw_menu_backdrop(r, scroll, true)?;
    r.draw_text(
        " the raccoon story ",
        Point::new(SCREEN_WIDTH / 2.0, 100.0),
        TextStyle::Title,
        Align::Center,
    )?;
    for (i, line) in STORY_LINES.iter().enumerate() {
        r.draw_text(
            line,
            Point::new(SCREEN_WIDTH / 2.0, 170.0 + 30.0 * i as f32),
            TextStyle::Story,
            Align::Center,
        )?;
    }
    r.draw_sprite(Sprite::StoryPortrait, Rect::new(150.0, 430.0, 300.0, 300.0))?;
    draw_button(r, "Go Back", GO_BACK, pointer)
}

/// One row on the controls page: picture, what it is, what it does.
fn draw_control_row<R: Renderer>(
    r: &mut R,
    sprite: Sprite,
    size: (f32, f32),
    description: &str,
    action: &str,
    y: f32,
) -> io::Result<()> {
    r.draw_sprite(sprite, Rect::new(30.0, y + 10.0, size.0, size.1))?;
    r.draw_text(description, Point::new(110.0, y + 20.0), TextStyle::Heading, Align::Left)?;
    r.draw_text(action, Point::new(340.0, y + 20.0), TextStyle::Heading, Align::Left)
}

pub fn draw_controls<R: Renderer>(
    r: &mut R,
    scroll: f32,
    look: &Look,
    pointer: Point,
) -> io::Result<()> {
    draw_menu_backdrop(r, scroll, true)?;
    let key = (50.0, 50.0);

    r.draw_text("Controls:", Point::new(30.0, 15.0), TextStyle::Subtitle, Align::Left)?;
    draw_control_row(r, Sprite::KeyLeft, key, "left arrow key", "turns left", 50.0)?;
    draw_control_row(r, Sprite::KeyRight, key, "right arrow key", "turns right", 105.0)?;
    draw_control_row(r, Sprite::KeySpace, key, "space bar key", "shoots lasers", 160.0)?;

    r.draw_text("Obstacles:", Point::new(30.0, 240.0), TextStyle::Subtitle, Align::Left)?;
    for (variant, name) in OBSTACLE_NAMES.iter().enumerate() {
        draw_control_row(
            r,
            Sprite::Obstacle { variant },
            (OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            name,
            "destroy with laser",
            275.0 + 55.0 * variant as f32,
        )?;
    }

    r.draw_text("Items:", Point::new(30.0, 520.0), TextStyle::Subtitle, Align::Left)?;
    draw_control_row(
        r,
        Sprite::AmmoPickup { colour: look.ammo },
        (AMMO_WIDTH, AMMO_HEIGHT),
        "laser ammunition",
        "used to shoot lasers",
        555.0,
    )?;
    draw_control_row(
        r,
        Sprite::Coin { frame: 0 },
        (COIN_WIDTH, COIN_HEIGHT),
        "coins",
        "used to purchase items",
        610.0,
    )?;

    draw_button(r, "Go Back", GO_BACK, pointer)
}

/// The live playfield with HUD.  Also used, frozen, under the game-over page.
pub fn draw_playfield<R: Renderer>(r: &mut R, session: &Session, look: &Look) -> io::Result<()> {
    let full = Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT);
    let offset = session.background_offset;
    r.draw_sprite(Sprite::Backdrop(Backdrop::Gameplay), full.translated(0.0, offset))?;
    r.draw_sprite(
        Sprite::Backdrop(Backdrop::Gameplay),
        full.translated(0.0, offset - SCREEN_HEIGHT),
    )?;

    r.draw_sprite(Sprite::Player { skin: look.skin }, session.player.rect)?;
    draw_all(r, &session.obstacles, look)?;
    draw_all(r, &session.bullets, look)?;
    draw_all(r, &session.ammo_pickups, look)?;
    draw_all(r, &session.coins, look)?;
    draw_all(r, &session.explosions, look)?;

    r.fill_rect(Rect::new(0.0, 0.0, SCREEN_WIDTH, 30.0), Rgb::BLACK)?;
    r.draw_text(
        &format!("Ammo: {}", session.player.ammo),
        Point::new(10.0, 5.0),
        TextStyle::Hud,
        Align::Left,
    )?;
    r.draw_text(
        &format!("Score: {}", session.score),
        Point::new(250.0, 5.0),
        TextStyle::Hud,
        Align::Left,
    )?;
    r.draw_text(
        &format!("Coins: {}", session.collected_coins),
        Point::new(480.0, 5.0),
        TextStyle::Hud,
        Align::Left,
    )
}

pub fn draw_game_over<R: Renderer>(
    r: &mut R,
    session: &Session,
    look: &Look,
    pointer: Point,
) -> io::Result<()> {
    draw_playfield(r, session, look)?;
    r.draw_sprite(Sprite::Shade, Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT))?;
    r.draw_text("GAME", Point::new(140.0, 180.0), TextStyle::GameOver, Align::Left)?;
    r.draw_text("Over", Point::new(170.0, 280.0), TextStyle::GameOver, Align::Left)?;
    draw_button(r, "Retry", GameOverButton::Retry.rect(), pointer)?;
    draw_button(r, "Home", GameOverButton::Home.rect(), pointer)
}
