//! Demo mode: a simple bot that plays the game
//!
//! Runs toward the goal, hopping over enemies, gaps and walls. It reads the
//! world like a renderer would and answers with the keys it wants down.

use crate::platform::{InputState, Key};
use crate::sim::{FlowCommand, Rect, TickInput, World, overlaps};

/// How far ahead (px) the bot looks for trouble
const LOOKAHEAD: f32 = 70.0;
/// Horizontal slack around the target before the bot stops running
const DEADZONE: f32 = 4.0;

/// Keys the bot wants this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intent {
    pub held: TickInput,
    /// Press Enter (start / advance / restart)
    pub confirm: bool,
}

pub fn decide(world: &World) -> Intent {
    if FlowCommand::confirm_for(world.phase).is_some() {
        return Intent {
            held: TickInput::default(),
            confirm: true,
        };
    }

    let player = &world.player;
    let center = player.rect.x + player.rect.w / 2.0;
    let target = world.goal.rect.x + world.goal.rect.w / 2.0;
    let dir = if target > center + DEADZONE {
        1.0
    } else if target < center - DEADZONE {
        -1.0
    } else {
        0.0
    };

    let mut held = TickInput {
        left: dir < 0.0,
        right: dir > 0.0,
        jump: false,
    };

    if player.on_ground && dir != 0.0 {
        let threat = enemy_ahead(world, dir) || wall_ahead(world, dir) || gap_ahead(world, dir);
        let goal_above = world.goal.rect.bottom() < player.rect.y;
        held.jump = threat || goal_above;
    }

    Intent {
        held,
        confirm: false,
    }
}

/// Press and release keys on `input` so it matches `intent`
pub fn apply(intent: &Intent, input: &mut InputState) {
    set_key(input, Key::Left, intent.held.left);
    set_key(input, Key::Right, intent.held.right);
    set_key(input, Key::Space, intent.held.jump);
    // Enter is a press, not a hold: release first so the next down is a new edge
    input.key_up(Key::Enter);
    if intent.confirm {
        input.key_down(Key::Enter);
    }
}

fn set_key(input: &mut InputState, key: Key, down: bool) {
    if down {
        input.key_down(key);
    } else {
        input.key_up(key);
    }
}

/// Strip of space directly in front of the player
fn strip_ahead(rect: &Rect, dir: f32, reach: f32, dy: f32) -> Rect {
    let x = if dir > 0.0 { rect.right() } else { rect.x - reach };
    Rect::new(x, rect.y + dy, reach, rect.h)
}

fn enemy_ahead(world: &World, dir: f32) -> bool {
    let zone = strip_ahead(&world.player.rect, dir, LOOKAHEAD, 0.0);
    world.enemies.iter().any(|e| overlaps(&zone, &e.rect))
}

fn wall_ahead(world: &World, dir: f32) -> bool {
    let zone = strip_ahead(&world.player.rect, dir, 12.0, -1.0);
    world.platforms.iter().any(|p| overlaps(&zone, &p.rect))
}

fn gap_ahead(world: &World, dir: f32) -> bool {
    // Look just under the feet, one body-width ahead
    let rect = &world.player.rect;
    let feet = Rect::new(rect.x, rect.bottom() + 1.0, rect.w, 4.0);
    let ahead = Rect {
        x: feet.x + dir * rect.w,
        ..feet
    };
    !world.platforms.iter().any(|p| overlaps(&ahead, &p.rect))
}
