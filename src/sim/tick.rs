//! Fixed timestep simulation tick
//!
//! Core loop that advances the world deterministically. Motion constants
//! are per-tick pixel deltas, so there is no dt.

use super::collision;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input intents for a single tick (a stable frame-local snapshot)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub shoot: bool,
    /// Only honored while the run is over
    pub restart: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::GameOver => {
            // World is frozen; only the restart signal is honored
            if input.restart {
                state.restart();
            }
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    // No cooldown or ammo: every tick with the intent set fires
    if input.shoot {
        state.spawn_projectile();
    }

    step_player(state, input);
    step_projectiles(state);
    step_enemies(state);
    step_collectibles(state);

    collision::resolve(state);
}

/// Player physics: intent-driven horizontal movement, jump, gravity
/// integration, ground clamp
fn step_player(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;

    // Independent flags; both set in the same tick cancel out
    if input.move_left {
        player.rect.pos.x -= PLAYER_SPEED;
    }
    if input.move_right {
        player.rect.pos.x += PLAYER_SPEED;
    }

    if !player.airborne && input.jump {
        player.airborne = true;
        player.vel_y = -JUMP_FORCE;
    }

    // Gravity applies every tick, grounded or not
    player.vel_y += GRAVITY;
    player.rect.pos.y += player.vel_y;

    // Ground clamp. Residual velocity is zeroed: a landing is a true rest.
    if player.rect.pos.y >= GROUND_Y {
        player.rect.pos.y = GROUND_Y;
        player.airborne = false;
        player.vel_y = 0.0;
    }
}

fn step_projectiles(state: &mut GameState) {
    for projectile in &mut state.projectiles {
        projectile.rect.pos.x += projectile.vel_x;
    }
    // Culled the first tick the leading edge passes the right screen edge
    state.projectiles.retain(|p| p.rect.right() <= SCREEN_WIDTH);
}

fn step_enemies(state: &mut GameState) {
    for enemy in &mut state.enemies {
        enemy.rect.pos.x -= ENEMY_SPEED;
    }
    // Culled once fully past the left edge
    state.enemies.retain(|e| e.rect.right() >= 0.0);
}

/// Collectibles have no motion of their own; the left-edge cull still
/// applies should anything ever shift them
fn step_collectibles(state: &mut GameState) {
    state.collectibles.retain(|c| c.rect.right() >= 0.0);
}
