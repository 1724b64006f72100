//! Fixed timestep simulation step
//!
//! Advances a `Playing` world by one frame. The order of the phases below is
//! part of the game's behavior: collisions settle before pickups, pickups
//! before enemies, enemies before the goal.

use super::collision::{VerticalContact, clamp_to_width, resolve_x, resolve_y};
use super::rect::overlaps;
use super::state::{GameEvent, GamePhase, World};
use crate::tuning::Tuning;

/// Held-key state sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Jump key is down. Only a fresh press starts a jump.
    pub jump: bool,
}

/// Advance the world by `dt` seconds.
///
/// Does nothing unless the world is `Playing`. `dt` is expected to be
/// clamped by the caller (see `crate::clamp_dt`).
pub fn advance(world: &mut World, input: &TickInput, tuning: &Tuning, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if world.phase != GamePhase::Playing {
        return events;
    }
    debug_assert!(dt >= 0.0, "negative timestep {dt}");

    world.session.tick_timer(dt);

    let player = &mut world.player;

    // Run speed snaps instantly; opposite keys cancel
    let mut vx = 0.0;
    if input.left {
        vx -= tuning.move_speed;
    }
    if input.right {
        vx += tuning.move_speed;
    }
    player.vel.x = vx;

    if !input.jump {
        player.jump_armed = true;
    } else if player.jump_armed && player.on_ground {
        player.vel.y = -tuning.jump_power;
        player.on_ground = false;
        player.jump_armed = false;
        events.push(GameEvent::Jumped);
    }

    player.vel.y += tuning.gravity * dt;

    let old = player.rect;
    player.rect.x += player.vel.x * dt;
    if resolve_x(&mut player.rect, &old, &world.platforms, tuning.contact_epsilon) {
        player.vel.x = 0.0;
    }

    player.rect.y += player.vel.y * dt;
    player.on_ground = false;
    match resolve_y(&mut player.rect, &old, &world.platforms, tuning.contact_epsilon) {
        VerticalContact::Floor => {
            player.vel.y = 0.0;
            player.on_ground = true;
        }
        VerticalContact::Ceiling => player.vel.y = 0.0,
        VerticalContact::None => {}
    }

    clamp_to_width(&mut player.rect, world.width);

    if player.rect.y > world.height + tuning.fall_margin {
        log::debug!("Player fell off the level");
        lose_life(world, &mut events);
        return events;
    }

    collect_coins(world, tuning, &mut events);
    update_enemies(world, tuning, dt, &mut events);

    if world.phase == GamePhase::Playing && overlaps(&world.player.rect, &world.goal.rect) {
        world.phase = GamePhase::LevelComplete;
        world.session.timer_running = false;
        log::info!(
            "Level {} complete in {:.1}s (score {})",
            world.level_index + 1,
            world.session.level_time,
            world.session.score
        );
        events.push(GameEvent::LevelComplete {
            level_index: world.level_index,
            time: world.session.level_time,
        });
    }

    events
}

/// Take a life; respawn the player or end the game
pub fn lose_life(world: &mut World, events: &mut Vec<GameEvent>) {
    world.session.lives -= 1;
    let lives_left = world.session.lives;
    events.push(GameEvent::PlayerDied { lives_left });

    if lives_left <= 0 {
        world.phase = GamePhase::GameOver;
        log::info!("Game over with score {}", world.session.score);
        events.push(GameEvent::GameOver {
            score: world.session.score,
        });
        return;
    }

    log::debug!("Lost a life, {lives_left} left");
    world.player.respawn();
    events.push(GameEvent::Respawned);
}

fn collect_coins(world: &mut World, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    let player = world.player.rect;
    let before = world.coins.len();
    world.coins.retain(|coin| !overlaps(&player, &coin.rect));

    for _ in world.coins.len()..before {
        world.session.score += tuning.coin_score;
        events.push(GameEvent::CoinCollected {
            score: tuning.coin_score,
        });
    }
    if world.coins.len() < before {
        log::debug!("Collected {} coin(s), {} left", before - world.coins.len(), world.coins.len());
    }
}

fn update_enemies(world: &mut World, tuning: &Tuning, dt: f32, events: &mut Vec<GameEvent>) {
    let mut damaged = false;

    for enemy in world.enemies.iter_mut().filter(|e| e.alive) {
        enemy.patrol(dt);
        let player = &mut world.player;
        if !overlaps(&player.rect, &enemy.rect) {
            continue;
        }

        let falling = player.vel.y > 0.0;
        let depth = player.rect.bottom() - enemy.rect.y;
        if falling && depth < tuning.stomp_tolerance {
            enemy.alive = false;
            world.session.score += tuning.stomp_score;
            player.vel.y = -tuning.jump_power * tuning.stomp_bounce;
            log::debug!("Stomped enemy at x={:.0}", enemy.rect.x);
            events.push(GameEvent::EnemyStomped {
                score: tuning.stomp_score,
            });
        } else {
            damaged = true;
            break;
        }
    }

    world.enemies.retain(|e| e.alive);

    if damaged {
        lose_life(world, events);
    }
}
