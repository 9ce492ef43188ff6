//! Procedural level population
//!
//! Places a fixed batch of enemies and collectibles in a window just past
//! the right screen edge, on the ground line.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::aabb::Aabb;
use super::state::{Collectible, CollectibleKind, Enemy, GameState};
use crate::consts::*;

/// Populate the current level.
///
/// Placement randomness is deterministic per (seed, level, run): the same
/// session replays identically, while each restart rerolls the layout.
pub fn create_level(state: &mut GameState) {
    let mut rng = placement_rng(state.seed, state.level, state.run);

    let x_min = SCREEN_WIDTH + SPAWN_MIN_AHEAD;
    let x_max = SCREEN_WIDTH + SPAWN_MAX_AHEAD;

    // TODO: scale counts/ranges with state.level - right now it only seeds
    // placement and difficulty never ramps
    for _ in 0..ENEMIES_PER_LEVEL {
        let id = state.next_entity_id();
        let x = rng.random_range(x_min..=x_max);
        state.enemies.push(Enemy {
            id,
            rect: Aabb::new(x, GROUND_Y, ENEMY_SIZE, ENEMY_SIZE),
            health: ENEMY_START_HEALTH,
        });
    }

    for _ in 0..COLLECTIBLES_PER_LEVEL {
        let id = state.next_entity_id();
        let x = rng.random_range(x_min..=x_max);
        let kind = if rng.random_range(0..2) == 0 {
            CollectibleKind::Health
        } else {
            CollectibleKind::Life
        };
        state.collectibles.push(Collectible {
            id,
            rect: Aabb::new(x, GROUND_Y, COLLECTIBLE_SIZE, COLLECTIBLE_SIZE),
            kind,
        });
    }

    log::info!(
        "level {}: spawned {} enemies, {} collectibles",
        state.level,
        ENEMIES_PER_LEVEL,
        COLLECTIBLES_PER_LEVEL
    );
}

/// Deterministic placement RNG from session seed, level number and restart
/// generation (golden-ratio hash mix)
fn placement_rng(seed: u64, level: u32, run: u32) -> Pcg32 {
    let mixed = (level as u64)
        .wrapping_mul(2654435761)
        .wrapping_add((run as u64).wrapping_mul(0x9E37_79B9))
        .wrapping_add(seed);
    Pcg32::seed_from_u64(mixed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_population_counts() {
        let state = GameState::new(42);
        assert_eq!(state.enemies.len(), ENEMIES_PER_LEVEL);
        assert_eq!(state.collectibles.len(), COLLECTIBLES_PER_LEVEL);
    }

    #[test]
    fn test_spawn_window_and_ground_line() {
        let state = GameState::new(7);
        for enemy in &state.enemies {
            assert!(enemy.rect.pos.x >= SCREEN_WIDTH + SPAWN_MIN_AHEAD);
            assert!(enemy.rect.pos.x <= SCREEN_WIDTH + SPAWN_MAX_AHEAD);
            assert_eq!(enemy.rect.pos.y, GROUND_Y);
        }
        for c in &state.collectibles {
            assert!(c.rect.pos.x >= SCREEN_WIDTH + SPAWN_MIN_AHEAD);
            assert!(c.rect.pos.x <= SCREEN_WIDTH + SPAWN_MAX_AHEAD);
            assert_eq!(c.rect.pos.y, GROUND_Y);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = GameState::new(12345);
        let b = GameState::new(12345);
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.rect.pos, eb.rect.pos);
        }
        for (ca, cb) in a.collectibles.iter().zip(&b.collectibles) {
            assert_eq!(ca.rect.pos, cb.rect.pos);
            assert_eq!(ca.kind, cb.kind);
        }
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let state = GameState::new(99);
        let mut ids: Vec<u32> = state
            .enemies
            .iter()
            .map(|e| e.id)
            .chain(state.collectibles.iter().map(|c| c.id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(
            ids.len(),
            ENEMIES_PER_LEVEL + COLLECTIBLES_PER_LEVEL
        );
    }
}
