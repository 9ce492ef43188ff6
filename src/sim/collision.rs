//! Pairwise collision resolution
//!
//! Fixed pass order per tick (it matters for score/removal consistency).
//! Removal is mark-then-compact so nothing is killed mid-iteration.

use super::state::{CollectibleKind, GamePhase, GameState};
use crate::consts::*;

/// Apply all collision rules for this tick, in order:
/// 1. projectiles vs enemies (removal + scoring)
/// 2. player vs enemies (contact damage, life loss, run end)
/// 3. player vs collectibles (pickup effects)
///
/// If pass 2 ends the run the resolver stops there; the world stays frozen
/// until restart.
pub fn resolve(state: &mut GameState) {
    projectiles_vs_enemies(state);
    player_vs_enemies(state);
    if state.phase == GamePhase::GameOver {
        return;
    }
    player_vs_collectibles(state);
}

/// Group-collide pass: every enemy overlapped by at least one projectile
/// dies exactly once, and every projectile that touched an enemy is
/// consumed. Score is awarded per enemy destroyed, never per projectile.
fn projectiles_vs_enemies(state: &mut GameState) {
    let mut dead_enemies: Vec<u32> = Vec::new();
    let mut spent_projectiles: Vec<u32> = Vec::new();

    for enemy in &state.enemies {
        let mut hit = false;
        for projectile in &state.projectiles {
            if projectile.rect.intersects(&enemy.rect) {
                hit = true;
                if !spent_projectiles.contains(&projectile.id) {
                    spent_projectiles.push(projectile.id);
                }
            }
        }
        if hit {
            dead_enemies.push(enemy.id);
        }
    }

    if dead_enemies.is_empty() {
        return;
    }

    state.player.score += ENEMY_KILL_SCORE * dead_enemies.len() as u64;
    state.enemies.retain(|e| !dead_enemies.contains(&e.id));
    state
        .projectiles
        .retain(|p| !spent_projectiles.contains(&p.id));

    log::debug!(
        "destroyed {} enemies ({} projectiles spent), score {}",
        dead_enemies.len(),
        spent_projectiles.len(),
        state.player.score
    );
}

/// Each enemy overlapping the player deducts contact damage separately.
/// A depletion costs a life and refills health; losing the last life ends
/// the run immediately.
fn player_vs_enemies(state: &mut GameState) {
    let player_rect = state.player.rect;
    let overlaps = state
        .enemies
        .iter()
        .filter(|e| e.rect.intersects(&player_rect))
        .count();

    for _ in 0..overlaps {
        state.player.health -= ENEMY_CONTACT_DAMAGE;
        if state.player.health <= 0 {
            state.player.lives = state.player.lives.saturating_sub(1);
            state.player.health = MAX_HEALTH;
            if state.player.lives == 0 {
                state.phase = GamePhase::GameOver;
                log::info!(
                    "game over at tick {} with score {}",
                    state.time_ticks,
                    state.player.score
                );
                return;
            }
        }
    }
}

/// Overlapping collectibles are removed and their effect applied: kinds are
/// collected during the compaction, effects applied after.
fn player_vs_collectibles(state: &mut GameState) {
    let player_rect = state.player.rect;
    let mut collected: Vec<CollectibleKind> = Vec::new();

    state.collectibles.retain(|c| {
        if c.rect.intersects(&player_rect) {
            collected.push(c.kind);
            false
        } else {
            true
        }
    });

    for kind in collected {
        match kind {
            CollectibleKind::Health => {
                state.player.health =
                    (state.player.health + HEALTH_PICKUP_AMOUNT).min(MAX_HEALTH);
                log::debug!("health pickup, health {}", state.player.health);
            }
            CollectibleKind::Life => {
                state.player.lives += 1;
                log::debug!("life pickup, lives {}", state.player.lives);
            }
        }
    }
}
