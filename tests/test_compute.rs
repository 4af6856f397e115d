use std::time::Duration;

use raccoon_madness::collision;
use raccoon_madness::compute::*;
use raccoon_madness::consts::*;
use raccoon_madness::entities::*;
use raccoon_madness::geometry::Point;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_state() -> Session {
    init_session(Difficulty::Easy)
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// An obstacle placed directly, bypassing the spawner.
fn obstacle_at(lane: usize, y: f32, speed: f32) -> Obstacle {
    let mut o = Obstacle::new(Lane::playable(lane), 0, speed);
    o.rect.y = y;
    o
}

// ── init_session ─────────────────────────────────────────────────────────────

#[test]
fn init_session_player_in_home_lane() {
    let s = make_state();
    assert_eq!(s.player.lane, Lane::HOME);
    assert_eq!(s.player.rect.x, 300.0);
    assert_eq!(s.player.rect.y, 700.0);
    assert_eq!(s.player.pending_coins, 0);
}

#[test]
fn init_session_empty_collections() {
    let s = make_state();
    assert!(s.obstacles.is_empty());
    assert!(s.bullets.is_empty());
    assert!(s.ammo_pickups.is_empty());
    assert!(s.coins.is_empty());
    assert!(s.explosions.is_empty());
    assert!(s.events.is_empty());
    assert_eq!(s.score, 0);
    assert_eq!(s.collected_coins, 0);
    assert_eq!(s.frame, 0);
    assert_eq!(s.status, GameStatus::Playing);
}

#[test]
fn init_session_follows_difficulty() {
    let expected = [(3, 2.0), (2, 4.0), (1, 6.0), (0, 8.0)];
    for (difficulty, (ammo, speed)) in Difficulty::ALL.into_iter().zip(expected) {
        let s = init_session(difficulty);
        assert_eq!(s.difficulty, difficulty);
        assert_eq!(s.player.ammo, ammo);
        assert_eq!(s.obstacle_speed, speed);
        assert_eq!(s.background_speed, speed);
    }
}

// ── movement ─────────────────────────────────────────────────────────────────

#[test]
fn move_left_normal() {
    let s = move_player_left(&make_state());
    assert_eq!(s.player.lane.index(), 1);
    assert_eq!(s.player.rect.x, 180.0);
}

#[test]
fn move_left_clamps_at_first_playable_lane() {
    let s = move_player_left(&move_player_left(&make_state()));
    assert_eq!(s.player.lane.index(), 1);
    assert_eq!(s.player.rect.x, 180.0);
}

#[test]
fn move_right_clamps_at_last_playable_lane() {
    let s = move_player_right(&move_player_right(&make_state()));
    assert_eq!(s.player.lane.index(), 3);
    assert_eq!(s.player.rect.x, 420.0);
}

#[test]
fn move_keeps_vertical_position() {
    let s = move_player_right(&make_state());
    assert_eq!(s.player.rect.y, 700.0);
}

#[test]
fn move_does_not_mutate_original() {
    let original = make_state();
    let _ = move_player_left(&original);
    assert_eq!(original.player.lane, Lane::HOME);
}

// ── steer ────────────────────────────────────────────────────────────────────

#[test]
fn steer_moves_once_then_waits_for_cooldown() {
    let mut s = move_player_left(&make_state());
    for _ in 0..MOVE_COOLDOWN {
        s = steer(&s, false, true);
    }
    assert_eq!(s.player.lane.index(), 2, "one lane change per cooldown window");
    s = steer(&s, false, true);
    assert_eq!(s.player.lane.index(), 3);
}

#[test]
fn steer_with_both_held_applies_left_then_right() {
    let s = steer(&make_state(), true, true);
    assert_eq!(s.player.lane, Lane::HOME);
    assert_eq!(s.move_cooldown, MOVE_COOLDOWN - 1);

    let from_edge = steer(&move_player_left(&make_state()), true, true);
    assert_eq!(from_edge.player.lane.index(), 2);
}

#[test]
fn steer_without_keys_only_counts_down() {
    let mut s = make_state();
    s.move_cooldown = 4;
    let s = steer(&s, false, false);
    assert_eq!(s.move_cooldown, 3);
    assert_eq!(s.player.lane, Lane::HOME);
}

// ── player_shoot ─────────────────────────────────────────────────────────────

#[test]
fn shoot_spawns_twin_beam_at_player_top_centre() {
    let s = player_shoot(&make_state());
    assert_eq!(s.bullets.len(), 1);
    let b = &s.bullets[0];
    assert_eq!(b.left_beam.x, 325.0 - 15.0);
    assert_eq!(b.right_beam.x, 325.0 + 15.0);
    assert_eq!(b.left_beam.y, 700.0);
    assert_eq!(s.player.ammo, 2);
    assert_eq!(s.events, vec![GameEvent::Shot]);
}

#[test]
fn shoot_without_ammo_does_nothing() {
    let s = init_session(Difficulty::Expert);
    let next = player_shoot(&s);
    assert!(next.bullets.is_empty());
    assert_eq!(next.player.ammo, 0);
    assert!(next.events.is_empty());
}

#[test]
fn shoot_after_game_over_does_nothing() {
    let mut s = make_state();
    s.status = GameStatus::GameOver;
    assert!(player_shoot(&s).bullets.is_empty());
}

#[test]
fn shoot_does_not_mutate_original() {
    let original = make_state();
    let _ = player_shoot(&original);
    assert!(original.bullets.is_empty());
    assert_eq!(original.player.ammo, 3);
}

// ── tick ─────────────────────────────────────────────────────────────────────

#[test]
fn tick_increments_frame() {
    let mut rng = seeded_rng();
    let s = tick(&make_state(), FRAME, &mut rng);
    assert_eq!(s.frame, 1);
}

#[test]
fn tick_leaves_finished_run_untouched() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    s.status = GameStatus::GameOver;
    s.obstacles.push(obstacle_at(1, 100.0, 2.0));
    let next = tick(&s, FRAME, &mut rng);
    assert_eq!(next.frame, 0);
    assert_eq!(next.obstacles[0].rect.y, 100.0);
}

#[test]
fn tick_moves_bullets_up_and_obstacles_down() {
    let mut rng = seeded_rng();
    let mut s = player_shoot(&make_state());
    s.obstacles.push(obstacle_at(1, 100.0, 2.0));
    let next = tick(&s, FRAME, &mut rng);
    assert_eq!(next.bullets[0].left_beam.y, 690.0);
    assert_eq!(next.obstacles[0].rect.y, 102.0);
}

#[test]
fn tick_scrolls_background_and_wraps() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    s.background_offset = SCREEN_HEIGHT - 1.0;
    let next = tick(&s, FRAME, &mut rng);
    assert_eq!(next.background_offset, 1.0);
}

// ── ramp ─────────────────────────────────────────────────────────────────────

#[test]
fn ramp_after_ten_seconds_speeds_up_everything() {
    let mut rng = seeded_rng();
    let mut s = init_session(Difficulty::Medium);
    s.obstacles.push(obstacle_at(1, -50.0, 4.0));
    let next = tick(&s, Duration::from_secs(10), &mut rng);

    assert_eq!(next.obstacle_speed, 4.25);
    assert_eq!(next.background_speed, 4.25);
    assert_eq!(next.ramp_elapsed, Duration::ZERO);
    assert_eq!(next.obstacles[0].speed, 4.25);
    assert_eq!(next.obstacles[0].rect.y, -50.0 + 4.25);
    assert!(next
        .events
        .contains(&GameEvent::SpeedRamped { speed: 4.25 }));
}

#[test]
fn ramp_accumulates_frame_time() {
    let mut s = make_state();
    ramp(&mut s, Duration::from_secs(6));
    assert_eq!(s.obstacle_speed, 2.0);
    ramp(&mut s, Duration::from_secs(4));
    assert_eq!(s.obstacle_speed, 2.25);
    ramp(&mut s, Duration::from_secs(9));
    assert_eq!(s.obstacle_speed, 2.25);
}

#[test]
fn ramp_applies_to_pickups_already_falling() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    s.coins.push(Coin::new(Lane::playable(1), 2.0));
    s.ammo_pickups.push(AmmoPickup::new(Lane::playable(3), 2.0));
    let next = tick(&s, RAMP_INTERVAL, &mut rng);
    assert_eq!(next.coins[0].speed, 2.25);
    assert_eq!(next.ammo_pickups[0].speed, 2.25);
}

// ── scenarios ────────────────────────────────────────────────────────────────

#[test]
fn bullet_destroys_obstacle_and_leaves_explosion() {
    let mut rng = seeded_rng();
    let mut s = player_shoot(&make_state());
    s.obstacles.push(obstacle_at(2, 600.0, 2.0));

    for _ in 0..20 {
        s = tick(&s, FRAME, &mut rng);
        if s.score > 0 {
            break;
        }
    }

    assert_eq!(s.score, SCORE_OBSTACLE_DESTROYED);
    assert!(s.bullets.is_empty());
    assert!(s.obstacles.iter().all(|o| o.rect.y < 0.0), "only fresh spawns remain");
    assert_eq!(s.explosions.len(), 1);
    assert_eq!(s.explosions[0].animation.frame(), 0);
    assert_eq!(s.explosions[0].rect.x, 300.0);
    assert!(s
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::ObstacleDestroyed { .. })));
    assert_eq!(s.status, GameStatus::Playing);
}

#[test]
fn bullet_past_the_top_cannot_hit_a_fresh_spawn() {
    let mut s = make_state();
    s.bullets.push(Bullet::new(Point::new(325.0, 0.0)));
    s.obstacles.push(obstacle_at(2, -OBSTACLE_HEIGHT, 2.0));

    let s = tick(&s, FRAME, &mut seeded_rng());

    assert!(s.bullets.is_empty());
    assert!(s.explosions.is_empty());
    assert_eq!(s.score, 0);
    assert!(s.obstacles.iter().any(|o| o.lane.index() == 2));
}

#[test]
fn explosion_plays_every_frame_then_disappears() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    s.explosions.push(Explosion::new(300.0, 300.0));

    for expected in 1..EXPLOSION_FRAMES {
        s = tick(&s, FRAME, &mut rng);
        assert_eq!(s.explosions[0].animation.frame(), expected);
    }
    s = tick(&s, FRAME, &mut rng);
    assert!(s.explosions.is_empty());
}

#[test]
fn obstacle_leaving_screen_scores_a_dodge() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    s.obstacles.push(obstacle_at(1, SCREEN_HEIGHT - 1.0, 2.0));
    let next = tick(&s, FRAME, &mut rng);
    assert_eq!(next.score, SCORE_OBSTACLE_DODGED);
    assert!(next.events.contains(&GameEvent::ObstacleDodged));
    assert!(next.obstacles.iter().all(|o| o.rect.y < SCREEN_HEIGHT));
}

#[test]
fn obstacle_at_bottom_edge_is_not_yet_culled() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    s.obstacles.push(obstacle_at(1, SCREEN_HEIGHT - 2.0, 2.0));
    let next = tick(&s, FRAME, &mut rng);
    assert_eq!(next.score, 0);
    assert_eq!(next.obstacles[0].rect.y, SCREEN_HEIGHT);
}

#[test]
fn touching_obstacle_ends_the_run() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    s.obstacles.push(obstacle_at(2, 660.0, 2.0));
    let next = tick(&s, FRAME, &mut rng);
    assert_eq!(next.status, GameStatus::GameOver);
    assert!(next.events.contains(&GameEvent::Crashed));
    assert_eq!(next.obstacles[0].rect.y, 662.0, "obstacle stays on the frozen field");
}

#[test]
fn shared_edge_is_not_a_crash() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    // Lands exactly on the player's top edge.
    s.obstacles.push(obstacle_at(2, 648.0, 2.0));
    let next = tick(&s, FRAME, &mut rng);
    assert_eq!(next.status, GameStatus::Playing);
}

#[test]
fn coin_pickup_counts_for_hud_and_settlement() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    let mut coin = Coin::new(Lane::HOME, 2.0);
    coin.rect.y = 690.0;
    s.coins.push(coin);
    let next = tick(&s, FRAME, &mut rng);
    assert!(next.coins.iter().all(|c| c.rect.y < 0.0));
    assert_eq!(next.player.pending_coins, 1);
    assert_eq!(next.collected_coins, 1);
    assert!(next.events.contains(&GameEvent::CoinCollected));
}

#[test]
fn ammo_pickup_adds_one_shot() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    let mut ammo = AmmoPickup::new(Lane::HOME, 2.0);
    ammo.rect.y = 690.0;
    s.ammo_pickups.push(ammo);
    let next = tick(&s, FRAME, &mut rng);
    assert_eq!(next.player.ammo, 4);
    assert!(next.events.contains(&GameEvent::AmmoCollected));
}

#[test]
fn pickups_in_other_lanes_are_ignored() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    let mut coin = Coin::new(Lane::playable(1), 2.0);
    coin.rect.y = 690.0;
    s.coins.push(coin);
    let next = tick(&s, FRAME, &mut rng);
    assert_eq!(next.player.pending_coins, 0);
}

// ── collision ordering ───────────────────────────────────────────────────────

#[test]
fn bullet_destroys_only_first_overlapping_obstacle() {
    let mut s = player_shoot(&make_state());
    s.obstacles.push(obstacle_at(2, 690.0, 0.0));
    s.obstacles.push(obstacle_at(2, 680.0, 0.0));
    s.player = s.player.at_lane(Lane::playable(1));
    collision::bullets_vs_obstacles(&mut s);
    assert_eq!(s.obstacles.len(), 1);
    assert_eq!(s.obstacles[0].rect.y, 680.0);
    assert_eq!(s.score, SCORE_OBSTACLE_DESTROYED);
}

#[test]
fn destroyed_obstacle_cannot_also_crash() {
    let mut s = player_shoot(&make_state());
    s.obstacles.push(obstacle_at(2, 660.0, 0.0));
    collision::resolve(&mut s);
    assert_eq!(s.status, GameStatus::Playing);
    assert_eq!(s.score, SCORE_OBSTACLE_DESTROYED);
}
