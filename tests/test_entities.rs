use raccoon_madness::animation::Animation;
use raccoon_madness::consts::*;
use raccoon_madness::entities::*;
use raccoon_madness::geometry::{Point, Rect};
use raccoon_madness::render::{Look, Sprite};

// ── Lane ─────────────────────────────────────────────────────────────────────

#[test]
fn lane_positions() {
    let xs: Vec<f32> = (0..LANE_COUNT).map(|i| Lane::new(i).x()).collect();
    assert_eq!(xs, vec![60.0, 180.0, 300.0, 420.0, 540.0]);
}

#[test]
fn lane_constructors_clamp() {
    assert_eq!(Lane::new(9).index(), 4);
    assert_eq!(Lane::playable(0).index(), 1);
    assert_eq!(Lane::playable(4).index(), 3);
    assert_eq!(Lane::HOME.index(), 2);
}

#[test]
fn lane_steps_stay_playable() {
    assert_eq!(Lane::playable(1).left().index(), 1);
    assert_eq!(Lane::playable(3).right().index(), 3);
    assert_eq!(Lane::HOME.left().index(), 1);
    assert_eq!(Lane::HOME.right().index(), 3);
}

// ── Difficulty ───────────────────────────────────────────────────────────────

#[test]
fn difficulty_cycles_back_to_easy() {
    let mut d = Difficulty::default();
    assert_eq!(d, Difficulty::Easy);
    let mut seen = Vec::new();
    for _ in 0..4 {
        d = d.next();
        seen.push(d);
    }
    assert_eq!(
        seen,
        vec![
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
            Difficulty::Easy
        ]
    );
}

#[test]
fn difficulty_labels() {
    let labels: Vec<&str> = Difficulty::ALL.iter().map(|d| d.label()).collect();
    assert_eq!(labels, vec!["Easy", "Medium", "Hard", "Expert"]);
}

// ── Animation ────────────────────────────────────────────────────────────────

#[test]
fn looping_animation_holds_each_frame_for_its_delay() {
    let mut a = Animation::looping(COIN_FRAMES, COIN_FRAME_DELAY);
    for _ in 0..COIN_FRAME_DELAY - 1 {
        a.advance();
    }
    assert_eq!(a.frame(), 0);
    a.advance();
    assert_eq!(a.frame(), 1);
}

#[test]
fn looping_animation_wraps_and_never_finishes() {
    let mut a = Animation::looping(COIN_FRAMES, COIN_FRAME_DELAY);
    for _ in 0..COIN_FRAMES as u32 * COIN_FRAME_DELAY {
        a.advance();
    }
    assert_eq!(a.frame(), 0);
    assert!(!a.is_finished());
}

#[test]
fn looping_animation_restarts() {
    let mut a = Animation::looping(4, 1);
    a.advance();
    a.advance();
    a.restart();
    assert_eq!(a.frame(), 0);
}

#[test]
fn one_shot_animation_finishes_after_last_frame() {
    let mut a = Animation::once(3);
    a.advance();
    a.advance();
    assert_eq!(a.frame(), 2);
    assert!(!a.is_finished());
    a.advance();
    assert!(a.is_finished());
    assert_eq!(a.frame(), 2);
}

#[test]
fn one_shot_animation_ignores_restart() {
    let mut a = Animation::once(3);
    a.advance();
    a.restart();
    assert_eq!(a.frame(), 1);
}

// ── Entities ─────────────────────────────────────────────────────────────────

#[test]
fn obstacle_spawns_above_screen_and_expires_below_it() {
    let mut o = Obstacle::new(Lane::playable(1), 2, 2.0);
    assert_eq!(o.rect, Rect::new(180.0, -50.0, 50.0, 50.0));
    o.rect.y = SCREEN_HEIGHT;
    assert!(!o.is_expired());
    o.update();
    assert!(o.is_expired());
}

#[test]
fn obstacle_variant_wraps() {
    let o = Obstacle::new(Lane::HOME, OBSTACLE_VARIANTS + 1, 2.0);
    assert_eq!(o.variant, 1);
}

#[test]
fn coin_animates_while_falling() {
    let mut c = Coin::new(Lane::HOME, 3.0);
    for _ in 0..COIN_FRAME_DELAY {
        c.update();
    }
    assert_eq!(c.rect.y, -30.0 + 3.0 * COIN_FRAME_DELAY as f32);
    assert_eq!(c.sprite(&Look::default()), Sprite::Coin { frame: 1 });
}

#[test]
fn bullet_expires_once_both_beams_leave_the_top() {
    let mut b = Bullet::new(Point::new(325.0, 5.0));
    assert!(!b.is_expired());
    b.update();
    assert!(b.is_expired());
}

#[test]
fn bullet_bounds_span_both_beams() {
    let b = Bullet::new(Point::new(325.0, 700.0));
    assert_eq!(b.bounds(), Rect::new(310.0, 700.0, 32.0, 20.0));
}

#[test]
fn bullet_hits_with_either_beam() {
    let b = Bullet::new(Point::new(325.0, 700.0));
    assert!(b.hits(&Rect::new(300.0, 690.0, 12.0, 20.0)));
    assert!(b.hits(&Rect::new(338.0, 690.0, 10.0, 20.0)));
    assert!(!b.hits(&Rect::new(315.0, 690.0, 20.0, 20.0)), "gap between beams");
}

#[test]
fn sprites_follow_equipped_look() {
    let look = Look { skin: 3, ammo: 5 };
    let b = Bullet::new(Point::new(0.0, 0.0));
    assert_eq!(b.sprite(&look), Sprite::TwinBeam { colour: 5 });
    let a = AmmoPickup::new(Lane::HOME, 2.0);
    assert_eq!(a.sprite(&look), Sprite::AmmoPickup { colour: 5 });
}

// ── Geometry ─────────────────────────────────────────────────────────────────

#[test]
fn rects_sharing_an_edge_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    assert!(a.overlaps(&Rect::new(9.5, 9.5, 10.0, 10.0)));
}

#[test]
fn contains_is_half_open() {
    let r = Rect::new(100.0, 300.0, 400.0, 60.0);
    assert!(r.contains(Point::new(100.0, 300.0)));
    assert!(!r.contains(Point::new(500.0, 330.0)));
    assert!(!r.contains(Point::new(300.0, 360.0)));
}
