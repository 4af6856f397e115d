use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use raccoon_madness::display::{Palette, TerminalRenderer, GRID_COLS, GRID_ROWS};
use raccoon_madness::economy::Economy;
use raccoon_madness::geometry::{Point, Rect};
use raccoon_madness::input::{InputEvent, Key, KeyAction};
use raccoon_madness::render::{Align, Renderer, Sprite, TextStyle};

fn renderer(term: (u16, u16)) -> TerminalRenderer<Vec<u8>> {
    TerminalRenderer::new(Vec::new(), Palette::from_economy(&Economy::default()), term)
}

fn key(code: KeyCode, kind: KeyEventKind) -> Event {
    Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn grid_covers_the_playfield() {
    assert_eq!(GRID_COLS, 60);
    assert_eq!(GRID_ROWS, 40);
}

#[test]
fn palette_takes_beam_colours_from_catalog() {
    let p = Palette::from_economy(&Economy::default());
    assert_eq!(p.ammo.len(), 6);
    assert_eq!(p.skins.len(), 6);
}

#[test]
fn cells_map_to_logical_centres() {
    let r = renderer((80, 50));
    // Playfield origin is at (10, 5).
    assert_eq!(r.cell_to_point(10, 5), Some(Point::new(5.0, 10.0)));
    assert_eq!(r.cell_to_point(40, 20), Some(Point::new(305.0, 310.0)));
    assert_eq!(r.cell_to_point(9, 5), None);
    assert_eq!(r.cell_to_point(70, 5), None);
}

#[test]
fn left_click_becomes_logical_click() {
    let mut r = renderer((60, 40));
    let ev = mouse(MouseEventKind::Down(MouseButton::Left), 30, 16);
    assert_eq!(r.translate(&ev), Some(InputEvent::Click(Point::new(305.0, 330.0))));
    let ev = mouse(MouseEventKind::Down(MouseButton::Right), 30, 16);
    assert_eq!(r.translate(&ev), None);
}

#[test]
fn mouse_motion_updates_pointer() {
    let mut r = renderer((60, 40));
    let ev = mouse(MouseEventKind::Moved, 0, 0);
    assert_eq!(r.translate(&ev), Some(InputEvent::PointerMoved(Point::new(5.0, 10.0))));
}

#[test]
fn arrows_and_letters_steer() {
    let mut r = renderer((60, 40));
    assert_eq!(
        r.translate(&key(KeyCode::Left, KeyEventKind::Press)),
        Some(InputEvent::Key { key: Key::Left, action: KeyAction::Press })
    );
    assert_eq!(
        r.translate(&key(KeyCode::Char('d'), KeyEventKind::Repeat)),
        Some(InputEvent::Key { key: Key::Right, action: KeyAction::Repeat })
    );
    assert_eq!(
        r.translate(&key(KeyCode::Char(' '), KeyEventKind::Release)),
        Some(InputEvent::Key { key: Key::Space, action: KeyAction::Release })
    );
    assert_eq!(r.translate(&key(KeyCode::Char('x'), KeyEventKind::Press)), None);
}

#[test]
fn quit_keys() {
    let mut r = renderer((60, 40));
    assert_eq!(r.translate(&key(KeyCode::Esc, KeyEventKind::Press)), Some(InputEvent::Quit));
    assert_eq!(r.translate(&key(KeyCode::Char('q'), KeyEventKind::Press)), Some(InputEvent::Quit));
    assert_eq!(r.translate(&key(KeyCode::Char('q'), KeyEventKind::Release)), None);
    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(r.translate(&ctrl_c), Some(InputEvent::Quit));
}

#[test]
fn resize_recentres_playfield() {
    let mut r = renderer((60, 40));
    assert_eq!(r.translate(&Event::Resize(100, 60)), None);
    assert_eq!(r.cell_to_point(20, 10), Some(Point::new(5.0, 10.0)));
}

#[test]
fn present_writes_drawn_text() {
    let mut r = renderer((60, 40));
    r.clear().unwrap();
    r.draw_sprite(Sprite::Player { skin: 0 }, Rect::new(300.0, 700.0, 50.0, 80.0))
        .unwrap();
    r.draw_sprite(Sprite::Obstacle { variant: 3 }, Rect::new(180.0, -20.0, 50.0, 50.0))
        .unwrap();
    r.draw_text("Score: 9", Point::new(250.0, 5.0), TextStyle::Hud, Align::Left)
        .unwrap();
    r.present().unwrap();
    let out = String::from_utf8(r.into_inner()).unwrap();
    assert!(out.contains("Score: 9"));
    assert!(out.contains('▓'), "bottom rows of a half-visible obstacle");
}

#[test]
fn drawing_off_grid_is_clipped() {
    let mut r = renderer((60, 40));
    r.clear().unwrap();
    r.draw_sprite(Sprite::Coin { frame: 3 }, Rect::new(-100.0, -100.0, 30.0, 30.0))
        .unwrap();
    r.draw_text("far away", Point::new(5_000.0, 5.0), TextStyle::Hud, Align::Center)
        .unwrap();
    r.present().unwrap();
}
